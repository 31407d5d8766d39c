//! Environment and scan configuration.

use crate::indicators::structure::SupertrendConfig;
use crate::indicators::WindowConfig;
use crate::signals::conditions::RuleSetKind;
use crate::signals::levels::LevelPolicy;
use serde::{Deserialize, Serialize};
use std::env;

/// Deployment environment name, from `PIVOTRIX_ENV` or `ENVIRONMENT`.
pub fn get_environment() -> String {
    env::var("PIVOTRIX_ENV")
        .or_else(|_| env::var("ENVIRONMENT"))
        .unwrap_or_else(|_| "sandbox".to_string())
}

/// Full configuration for one scan run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanConfig {
    pub windows: WindowConfig,
    pub trend: SupertrendConfig,
    pub rule_set: RuleSetKind,
    pub rsi_buy_threshold: f64,
    pub rsi_sell_threshold: f64,
    pub levels: LevelPolicy,
    pub max_parallel_scans: usize,
}

impl ScanConfig {
    /// Candle/breakout variant with momentum confirmation.
    pub fn momentum_breakout() -> Self {
        Self {
            windows: WindowConfig::default(),
            trend: SupertrendConfig::default(),
            rule_set: RuleSetKind::MomentumBreakout,
            rsi_buy_threshold: 80.0,
            rsi_sell_threshold: 20.0,
            levels: LevelPolicy::VolatilityScaled {
                multipliers: [1.5, 2.5, 3.5],
            },
            max_parallel_scans: default_parallelism(),
        }
    }

    /// Pivot variant gated by the Supertrend direction.
    pub fn pivot_trend() -> Self {
        Self {
            rule_set: RuleSetKind::PivotTrend,
            levels: LevelPolicy::VolatilityScaled {
                multipliers: [1.0, 2.0, 3.0],
            },
            ..Self::momentum_breakout()
        }
    }

    /// Pivot variant gated by fast/medium EMA alignment.
    pub fn pivot_ma_alignment() -> Self {
        Self {
            rule_set: RuleSetKind::PivotMaAlignment,
            ..Self::pivot_trend()
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::momentum_breakout()
    }
}

fn default_parallelism() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
}
