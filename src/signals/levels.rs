//! Entry/target/stop derivation for a signal bar.

use crate::common::math::round2;
use crate::models::bars::Bar;
use crate::models::signal::Side;
use serde::{Deserialize, Serialize};

/// How targets and the stop are scaled away from the entry price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum LevelPolicy {
    /// `target_j = entry ± k_j · ATR`; the stop mirrors the smallest
    /// target multiplier. Needs a defined ATR at the signal bar.
    VolatilityScaled { multipliers: [f64; 3] },
    /// Fixed percentage offsets from entry, per side; the stop mirrors
    /// the first offset.
    PercentageScaled {
        long_offsets: [f64; 3],
        short_offsets: [f64; 3],
    },
}

impl LevelPolicy {
    /// Stock percentage ladder: 0.50% / 0.92% / 1.79% long,
    /// 0.50% / 1.12% / 2.12% short.
    pub fn percentage_defaults() -> Self {
        LevelPolicy::PercentageScaled {
            long_offsets: [0.0050, 0.0092, 0.0179],
            short_offsets: [0.0050, 0.0112, 0.0212],
        }
    }

    /// Price levels for a signal of `side` at `bar`, rounded to two
    /// decimals. `None` when the policy's inputs are undefined.
    pub fn derive(&self, side: Side, bar: &Bar, atr: Option<f64>) -> Option<PriceLevels> {
        let entry = match side {
            Side::Buy => bar.high,
            Side::Sell => bar.low,
        };
        let sign = match side {
            Side::Buy => 1.0,
            Side::Sell => -1.0,
        };

        let (targets, stop) = match self {
            LevelPolicy::VolatilityScaled { multipliers } => {
                let atr = atr?;
                let targets = multipliers.map(|k| entry + sign * k * atr);
                (targets, entry - sign * multipliers[0] * atr)
            }
            LevelPolicy::PercentageScaled {
                long_offsets,
                short_offsets,
            } => {
                let offsets = match side {
                    Side::Buy => long_offsets,
                    Side::Sell => short_offsets,
                };
                let targets = offsets.map(|p| entry * (1.0 + sign * p));
                (targets, entry * (1.0 - sign * offsets[0]))
            }
        };

        Some(PriceLevels {
            entry: round2(entry),
            target1: round2(targets[0]),
            target2: round2(targets[1]),
            target3: round2(targets[2]),
            stop_loss: round2(stop),
        })
    }
}

/// Derived price levels for one signal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceLevels {
    pub entry: f64,
    pub target1: f64,
    pub target2: f64,
    pub target3: f64,
    pub stop_loss: f64,
}
