//! Per-bar signal evaluation for one instrument.

use crate::config::ScanConfig;
use crate::models::bars::{Bar, BarSeries};
use crate::models::frame::IndicatorFrame;
use crate::models::signal::{IndicatorSnapshot, Side, Signal};
use crate::signals::conditions::{side_matches, SignalCondition};

/// Evaluate one bar against a rule set.
///
/// Buy takes priority when both sides match; the conjunctive rule sets
/// never produce that in practice, but exclusivity is enforced here
/// rather than assumed.
pub fn evaluate_bar(
    rules: &[SignalCondition],
    bars: &[Bar],
    frame: &IndicatorFrame,
    i: usize,
) -> Option<Side> {
    if side_matches(rules, Side::Buy, bars, frame, i) {
        Some(Side::Buy)
    } else if side_matches(rules, Side::Sell, bars, frame, i) {
        Some(Side::Sell)
    } else {
        None
    }
}

/// Scan a whole series, producing at most one signal per bar.
pub fn scan_series(series: &BarSeries, frame: &IndicatorFrame, config: &ScanConfig) -> Vec<Signal> {
    let rules = config
        .rule_set
        .rules(config.rsi_buy_threshold, config.rsi_sell_threshold);
    let bars = series.bars();

    let mut signals = Vec::new();
    for (i, bar) in bars.iter().enumerate() {
        let Some(side) = evaluate_bar(&rules, bars, frame, i) else {
            continue;
        };
        let Some(levels) = config.levels.derive(side, bar, frame.atr[i]) else {
            continue;
        };

        signals.push(Signal {
            symbol: series.symbol().to_string(),
            timestamp: bar.timestamp,
            side,
            entry_price: levels.entry,
            target1: levels.target1,
            target2: levels.target2,
            target3: levels.target3,
            stop_loss: levels.stop_loss,
            snapshot: IndicatorSnapshot {
                open: bar.open,
                high: bar.high,
                low: bar.low,
                close: bar.close,
                ema_fast: frame.ema_fast[i],
                ema_medium: frame.ema_medium[i],
                ema_slow: frame.ema_slow[i],
                rsi_short: frame.rsi_short[i],
                atr: frame.atr[i],
                trend_band: frame.trend_band[i],
                trend_direction: frame.trend_direction[i],
            },
        });
    }
    signals
}
