//! Full-pipeline scenarios over in-memory bar stores

use chrono::{Duration, TimeZone, Utc};
use pivotrix::config::ScanConfig;
use pivotrix::indicators::structure::SupertrendConfig;
use pivotrix::indicators::volatility::AtrKind;
use pivotrix::indicators::{compute_frame, WindowConfig};
use pivotrix::models::bars::{Bar, BarSeries};
use pivotrix::models::frame::TrendLabel;
use pivotrix::models::signal::{ScanStatus, Side};
use pivotrix::services::bar_store::{BarStore, MemoryBarStore};
use pivotrix::signals::engine::SignalEngine;
use pivotrix::signals::levels::LevelPolicy;
use pivotrix::signals::RuleSetKind;
use std::sync::Arc;

fn bar(i: usize, open: f64, high: f64, low: f64, close: f64) -> Bar {
    let timestamp =
        Utc.with_ymd_and_hms(2024, 3, 15, 9, 15, 0).unwrap() + Duration::minutes(15 * i as i64);
    Bar::new(timestamp, open, high, low, close, 1000.0)
}

/// 25 15-minute bars in a clean uptrend, with one deep low wick at bar
/// 12 that confirms a pivot-low five bars later.
fn uptrend_bars() -> Vec<Bar> {
    (0..25)
        .map(|i| {
            let close = 100.0 + i as f64;
            let low = if i == 12 { close - 7.0 } else { close - 1.0 };
            bar(i, close - 0.5, close + 1.0, low, close)
        })
        .collect()
}

fn pivot_config() -> ScanConfig {
    ScanConfig {
        windows: WindowConfig {
            ema_fast: 3,
            ema_medium: 5,
            ema_slow: 8,
            rsi_short: 3,
            rsi_long: 5,
            atr_period: 5,
            atr_kind: AtrKind::Simple,
            pivot_half_width: 5,
        },
        trend: SupertrendConfig {
            period: 5,
            ..SupertrendConfig::default()
        },
        rule_set: RuleSetKind::PivotMaAlignment,
        levels: LevelPolicy::VolatilityScaled {
            multipliers: [1.0, 2.0, 3.0],
        },
        ..ScanConfig::pivot_ma_alignment()
    }
}

#[tokio::test]
async fn uptrend_pivot_scenario() {
    let config = pivot_config();
    let series = BarSeries::new("RELIANCE", uptrend_bars()).unwrap();

    // The moving averages align upward once the spans are satisfied.
    let frame = compute_frame(&series, &config.windows, &config.trend);
    assert_eq!(frame.trend_label[0], Some(TrendLabel::NoTrend));
    assert_eq!(frame.trend_label[12], Some(TrendLabel::Up));
    assert_eq!(frame.pivot_low[12], Some(true));

    let mut store = MemoryBarStore::new();
    store.insert("RELIANCE", uptrend_bars());
    let store: Arc<dyn BarStore> = Arc::new(store);

    let report = SignalEngine::run_signal_scan(&config, &store).await;
    assert_eq!(report.status, ScanStatus::Success);
    assert_eq!(report.count, 1);

    let signal = &report.signals[0];
    assert_eq!(signal.side, Side::Buy);
    assert_eq!(signal.symbol, "RELIANCE");
    // Entry at the signal bar's high; targets scaled by the 5-period ATR
    // (window 2,2,2,2,8 -> 3.2).
    assert_eq!(signal.entry_price, 113.0);
    assert_eq!(signal.target1, 116.2);
    assert_eq!(signal.target2, 119.4);
    assert_eq!(signal.target3, 122.6);
    assert_eq!(signal.stop_loss, 109.8);
    assert_eq!(signal.snapshot.atr, Some(3.2));
}

#[tokio::test]
async fn series_shorter_than_windows_yields_empty_error_report() {
    let mut store = MemoryBarStore::new();
    store.insert("TINY", uptrend_bars().into_iter().take(5).collect());
    let store: Arc<dyn BarStore> = Arc::new(store);

    let config = ScanConfig::momentum_breakout();
    let report = SignalEngine::run_signal_scan(&config, &store).await;
    assert_eq!(report.status, ScanStatus::Error);
    assert_eq!(report.message, "No signals generated.");
    assert_eq!(report.count, 0);
}

#[tokio::test]
async fn empty_store_reports_missing_data() {
    let store: Arc<dyn BarStore> = Arc::new(MemoryBarStore::new());
    let report = SignalEngine::run_signal_scan(&ScanConfig::default(), &store).await;
    assert_eq!(report.status, ScanStatus::Error);
    assert_eq!(report.message, "No CSV files found.");
}

#[tokio::test]
async fn malformed_instrument_is_isolated() {
    let mut store = MemoryBarStore::new();
    store.insert("RELIANCE", uptrend_bars());
    let mut broken = uptrend_bars();
    broken[3].close = f64::NAN;
    store.insert("BROKEN", broken);
    let store: Arc<dyn BarStore> = Arc::new(store);

    let report = SignalEngine::run_signal_scan(&pivot_config(), &store).await;
    assert_eq!(report.status, ScanStatus::Success);
    assert!(report.signals.iter().all(|s| s.symbol == "RELIANCE"));
}

#[tokio::test]
async fn repeated_runs_are_identical() {
    let mut store = MemoryBarStore::new();
    store.insert("AAA", uptrend_bars());
    let mut shifted = uptrend_bars();
    for b in &mut shifted {
        b.open += 10.0;
        b.high += 10.0;
        b.low += 10.0;
        b.close += 10.0;
    }
    store.insert("BBB", shifted);
    let store: Arc<dyn BarStore> = Arc::new(store);

    let config = pivot_config();
    let first = SignalEngine::run_signal_scan(&config, &store).await;
    let second = SignalEngine::run_signal_scan(&config, &store).await;
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
    assert_eq!(first.count, 2);
}
