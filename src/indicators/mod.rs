//! Indicator engine: rolling-window columns aligned to a bar series.

pub mod frame;

pub mod momentum;
pub mod structure;
pub mod trend;
pub mod volatility;

pub use frame::{compute_frame, WindowConfig};
