//! Indicator columns aligned index-for-index with a bar series.

use serde::{Deserialize, Serialize};

/// Discrete Supertrend direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum TrendDirection {
    Bullish,
    Bearish,
}

impl TrendDirection {
    pub fn flipped(self) -> Self {
        match self {
            TrendDirection::Bullish => TrendDirection::Bearish,
            TrendDirection::Bearish => TrendDirection::Bullish,
        }
    }
}

/// Coarse moving-average alignment label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendLabel {
    Up,
    Down,
    #[serde(rename = "No Trend")]
    NoTrend,
}

/// Parallel indicator columns for one instrument.
///
/// Every column has the same length as the bar series it was computed
/// from. A cell that lacks enough history (or, for the centered pivot
/// flags, enough neighbors) is `None`, never a sentinel number.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorFrame {
    pub ema_fast: Vec<Option<f64>>,
    pub ema_medium: Vec<Option<f64>>,
    pub ema_slow: Vec<Option<f64>>,
    pub rsi_short: Vec<Option<f64>>,
    pub rsi_long: Vec<Option<f64>>,
    pub atr: Vec<Option<f64>>,
    pub pivot_high: Vec<Option<bool>>,
    pub pivot_low: Vec<Option<bool>>,
    pub trend_band: Vec<Option<f64>>,
    pub trend_direction: Vec<Option<TrendDirection>>,
    pub trend_label: Vec<Option<TrendLabel>>,
}

impl IndicatorFrame {
    pub fn len(&self) -> usize {
        self.ema_fast.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ema_fast.is_empty()
    }
}
