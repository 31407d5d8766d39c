//! OHLCV bars and the validated per-instrument series.

use crate::error::ScanError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One OHLCV observation for a fixed time interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Bar {
    pub fn new(
        timestamp: DateTime<Utc>,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
    ) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Midpoint of the bar's range, the Supertrend anchor price.
    pub fn hl2(&self) -> f64 {
        (self.high + self.low) / 2.0
    }

    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }

    pub fn is_bearish(&self) -> bool {
        self.close < self.open
    }

    fn all_finite(&self) -> bool {
        self.open.is_finite()
            && self.high.is_finite()
            && self.low.is_finite()
            && self.close.is_finite()
            && self.volume.is_finite()
    }
}

/// Time-ordered OHLCV bars for one instrument.
///
/// Construction validates the series contract: every field finite, and
/// timestamps strictly increasing. A violating series is rejected rather
/// than reordered; the caller decides whether to skip the instrument.
#[derive(Debug, Clone)]
pub struct BarSeries {
    symbol: String,
    bars: Vec<Bar>,
}

impl BarSeries {
    pub fn new(symbol: impl Into<String>, bars: Vec<Bar>) -> Result<Self, ScanError> {
        let symbol = symbol.into();
        for (index, bar) in bars.iter().enumerate() {
            if !bar.all_finite() {
                return Err(ScanError::MalformedBar {
                    symbol: symbol.clone(),
                    index,
                    reason: "non-finite field".to_string(),
                });
            }
            if index > 0 && bar.timestamp <= bars[index - 1].timestamp {
                return Err(ScanError::MalformedBar {
                    symbol: symbol.clone(),
                    index,
                    reason: format!(
                        "timestamp {} does not increase over {}",
                        bar.timestamp,
                        bars[index - 1].timestamp
                    ),
                });
            }
        }
        Ok(Self { symbol, bars })
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    pub fn highs(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.high).collect()
    }

    pub fn lows(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.low).collect()
    }
}
