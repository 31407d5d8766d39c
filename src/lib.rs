//! Pivotrix signal engine
//!
//! Computes technical indicators over per-instrument OHLCV bar series and
//! turns them into discrete Buy/Sell signals with entry, target and
//! stop-loss levels. The HTTP layer exposes one scan endpoint per strategy
//! variant; bar data is read through an injected [`services::BarStore`].

pub mod common;
pub mod config;
pub mod core;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod services;
pub mod signals;
