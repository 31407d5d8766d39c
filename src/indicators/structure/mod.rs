//! Market-structure indicators: pivots and the Supertrend state machine.

pub mod pivot;
pub mod supertrend;

pub use pivot::{pivot_high_series, pivot_low_series};
pub use supertrend::{supertrend_series, SupertrendConfig, TrendSmoothing, TrendState};
