//! Unit tests for the Supertrend state machine

use chrono::{Duration, TimeZone, Utc};
use pivotrix::indicators::structure::{supertrend_series, SupertrendConfig, TrendSmoothing};
use pivotrix::indicators::volatility::{atr_series, AtrKind};
use pivotrix::models::bars::Bar;
use pivotrix::models::frame::TrendDirection;

fn bar(i: usize, open: f64, high: f64, low: f64, close: f64) -> Bar {
    let timestamp =
        Utc.with_ymd_and_hms(2024, 3, 15, 9, 15, 0).unwrap() + Duration::minutes(15 * i as i64);
    Bar::new(timestamp, open, high, low, close, 1000.0)
}

/// Closes rise by 1 per bar with a constant half-point range, so the
/// true range settles at 1.5 from the second bar on.
fn rising_bars(count: usize) -> Vec<Bar> {
    (0..count)
        .map(|i| {
            let close = 100.0 + i as f64;
            bar(i, close - 0.25, close + 0.5, close - 0.5, close)
        })
        .collect()
}

fn config(smoothing: TrendSmoothing) -> SupertrendConfig {
    SupertrendConfig {
        period: 3,
        multiplier: 2.0,
        atr_kind: AtrKind::Simple,
        seed: TrendDirection::Bearish,
        smoothing,
    }
}

#[test]
fn undefined_before_atr_start() {
    let bars = rising_bars(10);
    let state = supertrend_series(&bars, &config(TrendSmoothing::Ratchet));
    assert_eq!(state.band[0], None);
    assert_eq!(state.band[1], None);
    assert_eq!(state.direction[1], None);
    assert!(state.band[2].is_some());
}

#[test]
fn seeded_at_upper_band_for_bearish_seed() {
    let bars = rising_bars(10);
    let cfg = config(TrendSmoothing::Ratchet);
    let state = supertrend_series(&bars, &cfg);

    let atr = atr_series(&bars, cfg.period, cfg.atr_kind);
    let upper = bars[2].hl2() + cfg.multiplier * atr[2].unwrap();
    assert_eq!(state.direction[2], Some(TrendDirection::Bearish));
    assert_eq!(state.band[2], Some(upper));
}

#[test]
fn seeded_at_lower_band_for_bullish_seed() {
    let bars = rising_bars(10);
    let cfg = SupertrendConfig {
        seed: TrendDirection::Bullish,
        ..config(TrendSmoothing::Ratchet)
    };
    let state = supertrend_series(&bars, &cfg);

    let atr = atr_series(&bars, cfg.period, cfg.atr_kind);
    let lower = bars[2].hl2() - cfg.multiplier * atr[2].unwrap();
    assert_eq!(state.direction[2], Some(TrendDirection::Bullish));
    assert_eq!(state.band[2], Some(lower));
}

#[test]
fn ratchet_band_while_trend_persists() {
    let bars = rising_bars(20);
    let cfg = config(TrendSmoothing::Ratchet);
    let state = supertrend_series(&bars, &cfg);
    let atr = atr_series(&bars, cfg.period, cfg.atr_kind);

    // A rising series eventually overtakes the seeded upper band.
    let flip = state
        .direction
        .iter()
        .position(|d| *d == Some(TrendDirection::Bullish))
        .expect("trend should flip bullish");

    for i in (flip + 1)..bars.len() {
        assert_eq!(state.direction[i], Some(TrendDirection::Bullish));
        let lower = bars[i].hl2() - cfg.multiplier * atr[i].unwrap();
        let expected = lower.max(state.band[i - 1].unwrap());
        assert_eq!(state.band[i], Some(expected), "ratchet broken at {i}");
    }
}

#[test]
fn breakout_carry_flips_on_basic_band_cross() {
    // Flat, then a strong rally through the previous upper band.
    let mut bars = rising_bars(6);
    bars.push(bar(6, 106.0, 120.5, 105.5, 120.0));
    let cfg = config(TrendSmoothing::BreakoutCarry);
    let state = supertrend_series(&bars, &cfg);
    let atr = atr_series(&bars, cfg.period, cfg.atr_kind);

    assert_eq!(state.direction[6], Some(TrendDirection::Bullish));
    let lower = bars[6].hl2() - cfg.multiplier * atr[6].unwrap();
    assert_eq!(state.band[6], Some(lower));
}

#[test]
fn confirmed_smoothing_needs_two_bars_to_flip() {
    let bars = rising_bars(20);
    let ratchet = supertrend_series(&bars, &config(TrendSmoothing::Ratchet));
    let confirmed = supertrend_series(&bars, &config(TrendSmoothing::Confirmed));

    let flip_ratchet = ratchet
        .direction
        .iter()
        .position(|d| *d == Some(TrendDirection::Bullish))
        .unwrap();
    let flip_confirmed = confirmed
        .direction
        .iter()
        .position(|d| *d == Some(TrendDirection::Bullish))
        .unwrap();
    assert_eq!(flip_confirmed, flip_ratchet + 1);
}

#[test]
fn recomputation_is_deterministic() {
    let bars = rising_bars(30);
    let cfg = config(TrendSmoothing::Ratchet);
    let first = supertrend_series(&bars, &cfg);
    let second = supertrend_series(&bars, &cfg);
    assert_eq!(first, second);
}

#[test]
fn too_short_series_is_all_undefined() {
    let bars = rising_bars(3);
    let state = supertrend_series(&bars, &config(TrendSmoothing::Ratchet));
    assert!(state.band.iter().all(Option::is_none));
    assert!(state.direction.iter().all(Option::is_none));
}
