//! Signal generation: per-bar rules, price levels, batch aggregation.

pub mod aggregation;
pub mod conditions;
pub mod engine;
pub mod generator;
pub mod levels;

pub use aggregation::aggregate;
pub use conditions::{RuleSetKind, SignalCondition};
pub use engine::SignalEngine;
pub use levels::LevelPolicy;
