//! Declarative per-bar signal conditions.
//!
//! A rule set is a conjunctive list of conditions evaluated for the buy
//! side; every condition knows its own sell-side mirror, so one list
//! covers both sides. A condition whose required indicator cell is
//! undefined does not hold.

use crate::models::bars::Bar;
use crate::models::frame::{IndicatorFrame, TrendDirection, TrendLabel};
use crate::models::signal::Side;
use serde::{Deserialize, Serialize};

/// One predicate over a bar and its indicator row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum SignalCondition {
    /// The last `count` candles are bullish (Buy) / bearish (Sell).
    ConsecutiveCandles { count: usize },
    /// Close breaks above the previous high (Buy) / below the previous
    /// low (Sell).
    RangeBreakout,
    /// Close above the fast EMA (Buy) / below it (Sell).
    CloseVsFastEma,
    /// Moving-average alignment label is `Up` (Buy) / `Down` (Sell).
    TrendLabelAligned,
    /// Supertrend direction is bullish (Buy) / bearish (Sell).
    TrendStateAligned,
    /// Short RSI beyond the high threshold (Buy) / low threshold (Sell).
    RsiExtreme { high: f64, low: f64 },
    /// A pivot-low is confirmed at this bar (Buy) / pivot-high (Sell).
    PivotConfirmed,
    /// Fast EMA above the medium EMA (Buy) / below it (Sell).
    EmaAlignment,
}

impl SignalCondition {
    pub fn holds(&self, side: Side, bars: &[Bar], frame: &IndicatorFrame, i: usize) -> bool {
        let bar = &bars[i];
        match self {
            SignalCondition::ConsecutiveCandles { count } => {
                if *count == 0 || i + 1 < *count {
                    return false;
                }
                bars[i + 1 - count..=i].iter().all(|b| match side {
                    Side::Buy => b.is_bullish(),
                    Side::Sell => b.is_bearish(),
                })
            }
            SignalCondition::RangeBreakout => {
                if i == 0 {
                    return false;
                }
                match side {
                    Side::Buy => bar.close > bars[i - 1].high,
                    Side::Sell => bar.close < bars[i - 1].low,
                }
            }
            SignalCondition::CloseVsFastEma => match (side, frame.ema_fast[i]) {
                (Side::Buy, Some(ema)) => bar.close > ema,
                (Side::Sell, Some(ema)) => bar.close < ema,
                _ => false,
            },
            SignalCondition::TrendLabelAligned => match side {
                Side::Buy => frame.trend_label[i] == Some(TrendLabel::Up),
                Side::Sell => frame.trend_label[i] == Some(TrendLabel::Down),
            },
            SignalCondition::TrendStateAligned => match side {
                Side::Buy => frame.trend_direction[i] == Some(TrendDirection::Bullish),
                Side::Sell => frame.trend_direction[i] == Some(TrendDirection::Bearish),
            },
            SignalCondition::RsiExtreme { high, low } => match (side, frame.rsi_short[i]) {
                (Side::Buy, Some(rsi)) => rsi > *high,
                (Side::Sell, Some(rsi)) => rsi < *low,
                _ => false,
            },
            SignalCondition::PivotConfirmed => match side {
                Side::Buy => frame.pivot_low[i] == Some(true),
                Side::Sell => frame.pivot_high[i] == Some(true),
            },
            SignalCondition::EmaAlignment => {
                match (side, frame.ema_fast[i], frame.ema_medium[i]) {
                    (Side::Buy, Some(fast), Some(medium)) => fast > medium,
                    (Side::Sell, Some(fast), Some(medium)) => fast < medium,
                    _ => false,
                }
            }
        }
    }
}

/// Every condition in `rules` holds for `side` at bar `i`.
pub fn side_matches(
    rules: &[SignalCondition],
    side: Side,
    bars: &[Bar],
    frame: &IndicatorFrame,
    i: usize,
) -> bool {
    rules.iter().all(|rule| rule.holds(side, bars, frame, i))
}

/// Named condition-set variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum RuleSetKind {
    /// Candle pattern + breakout + fast-EMA side + label + RSI extreme.
    MomentumBreakout,
    /// Pivot confirmation gated by the Supertrend direction.
    PivotTrend,
    /// Pivot confirmation gated by fast/medium EMA alignment.
    PivotMaAlignment,
}

impl RuleSetKind {
    pub fn rules(&self, rsi_high: f64, rsi_low: f64) -> Vec<SignalCondition> {
        match self {
            RuleSetKind::MomentumBreakout => vec![
                SignalCondition::ConsecutiveCandles { count: 2 },
                SignalCondition::RangeBreakout,
                SignalCondition::CloseVsFastEma,
                SignalCondition::TrendLabelAligned,
                SignalCondition::RsiExtreme {
                    high: rsi_high,
                    low: rsi_low,
                },
            ],
            RuleSetKind::PivotTrend => vec![
                SignalCondition::PivotConfirmed,
                SignalCondition::TrendStateAligned,
            ],
            RuleSetKind::PivotMaAlignment => vec![
                SignalCondition::PivotConfirmed,
                SignalCondition::EmaAlignment,
            ],
        }
    }
}
