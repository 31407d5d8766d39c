//! Signal records and the batch report handed to the transport layer.

use crate::models::frame::TrendDirection;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Signal side. `Buy` orders before `Sell`, which is also the
/// alphabetical batch ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Buy => "Buy",
            Side::Sell => "Sell",
        }
    }
}

/// Indicator values captured at the signal bar, for downstream display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub ema_fast: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub ema_medium: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub ema_slow: Option<f64>,
    #[serde(rename = "rsi", skip_serializing_if = "Option::is_none", default)]
    pub rsi_short: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub atr: Option<f64>,
    #[serde(
        rename = "supertrend",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub trend_band: Option<f64>,
    #[serde(
        rename = "supertrend_direction",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub trend_direction: Option<TrendDirection>,
}

/// One actionable Buy/Sell record for a single bar of a single instrument.
///
/// Price fields are already rounded to two decimals by the level policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub symbol: String,
    #[serde(rename = "date", with = "timestamp_format")]
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "signal")]
    pub side: Side,
    pub entry_price: f64,
    pub target1: f64,
    pub target2: f64,
    pub target3: f64,
    pub stop_loss: f64,
    #[serde(flatten)]
    pub snapshot: IndicatorSnapshot,
}

/// Batch status: `success` when at least one signal survived filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanStatus {
    Success,
    Error,
}

/// The aggregator's output envelope, serialized as-is by the HTTP layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanReport {
    pub status: ScanStatus,
    pub message: String,
    pub signals: Vec<Signal>,
    pub count: usize,
}

impl ScanReport {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ScanStatus::Error,
            message: message.into(),
            signals: Vec::new(),
            count: 0,
        }
    }

    pub fn success(message: impl Into<String>, signals: Vec<Signal>) -> Self {
        let count = signals.len();
        Self {
            status: ScanStatus::Success,
            message: message.into(),
            signals,
            count,
        }
    }
}

/// Serialize timestamps in the flat `YYYY-MM-DD HH:MM:SS` shape the
/// downstream consumers expect.
pub mod timestamp_format {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{self, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S>(timestamp: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&timestamp.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        let naive = NaiveDateTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)?;
        Ok(naive.and_utc())
    }
}
