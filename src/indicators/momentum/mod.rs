//! Momentum oscillators.

pub mod rsi;

pub use rsi::rsi_series;
