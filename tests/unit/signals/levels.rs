//! Unit tests for price-level derivation

use chrono::{TimeZone, Utc};
use pivotrix::models::bars::Bar;
use pivotrix::models::signal::Side;
use pivotrix::signals::levels::LevelPolicy;

fn signal_bar() -> Bar {
    let timestamp = Utc.with_ymd_and_hms(2024, 3, 15, 12, 15, 0).unwrap();
    Bar::new(timestamp, 111.5, 113.0, 105.0, 112.0, 1000.0)
}

#[test]
fn volatility_scaled_buy_levels() {
    let policy = LevelPolicy::VolatilityScaled {
        multipliers: [1.5, 2.5, 3.5],
    };
    let levels = policy.derive(Side::Buy, &signal_bar(), Some(2.0)).unwrap();
    assert_eq!(levels.entry, 113.0);
    assert_eq!(levels.target1, 116.0);
    assert_eq!(levels.target2, 118.0);
    assert_eq!(levels.target3, 120.0);
    assert_eq!(levels.stop_loss, 110.0);
}

#[test]
fn volatility_scaled_sell_mirrors() {
    let policy = LevelPolicy::VolatilityScaled {
        multipliers: [1.0, 2.0, 3.0],
    };
    let levels = policy.derive(Side::Sell, &signal_bar(), Some(2.0)).unwrap();
    assert_eq!(levels.entry, 105.0);
    assert_eq!(levels.target1, 103.0);
    assert_eq!(levels.target2, 101.0);
    assert_eq!(levels.target3, 99.0);
    assert_eq!(levels.stop_loss, 107.0);
}

#[test]
fn volatility_scaled_requires_atr() {
    let policy = LevelPolicy::VolatilityScaled {
        multipliers: [1.0, 2.0, 3.0],
    };
    assert!(policy.derive(Side::Buy, &signal_bar(), None).is_none());
}

#[test]
fn stop_mirrors_smallest_multiplier() {
    let policy = LevelPolicy::VolatilityScaled {
        multipliers: [1.5, 2.5, 3.5],
    };
    let levels = policy.derive(Side::Buy, &signal_bar(), Some(1.0)).unwrap();
    assert_eq!(levels.entry - levels.stop_loss, levels.target1 - levels.entry);
}

#[test]
fn percentage_scaled_uses_per_side_offsets() {
    let policy = LevelPolicy::percentage_defaults();

    let buy = policy.derive(Side::Buy, &signal_bar(), None).unwrap();
    assert_eq!(buy.entry, 113.0);
    assert_eq!(buy.target1, 113.56);
    assert_eq!(buy.target2, 114.04);
    assert_eq!(buy.target3, 115.02);
    assert_eq!(buy.stop_loss, 112.44);

    let sell = policy.derive(Side::Sell, &signal_bar(), None).unwrap();
    assert_eq!(sell.entry, 105.0);
    assert_eq!(sell.target1, 104.48);
    assert_eq!(sell.target2, 103.82);
    assert_eq!(sell.target3, 102.77);
    assert_eq!(sell.stop_loss, 105.53);
}

#[test]
fn levels_are_rounded_to_two_decimals() {
    let policy = LevelPolicy::VolatilityScaled {
        multipliers: [1.0, 2.0, 3.0],
    };
    let levels = policy.derive(Side::Buy, &signal_bar(), Some(3.333)).unwrap();
    assert_eq!(levels.target1, 116.33);
    assert_eq!(levels.target2, 119.67);
}
