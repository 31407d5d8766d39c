//! Volatility measures.

pub mod atr;

pub use atr::{atr_series, true_range_series, AtrKind};
