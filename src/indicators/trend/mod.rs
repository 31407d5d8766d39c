//! Trend-following indicators.

pub mod ema;

pub use ema::{ema_series, trend_labels};
