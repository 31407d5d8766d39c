//! Assembles the full indicator frame for one bar series.

use crate::indicators::momentum::rsi_series;
use crate::indicators::structure::{supertrend_series, SupertrendConfig};
use crate::indicators::trend::{ema_series, trend_labels};
use crate::indicators::volatility::{atr_series, AtrKind};
use crate::models::bars::BarSeries;
use crate::models::frame::IndicatorFrame;
use serde::{Deserialize, Serialize};

/// Window lengths for the rolling-window columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowConfig {
    pub ema_fast: usize,
    pub ema_medium: usize,
    pub ema_slow: usize,
    pub rsi_short: usize,
    pub rsi_long: usize,
    pub atr_period: usize,
    pub atr_kind: AtrKind,
    pub pivot_half_width: usize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            ema_fast: 13,
            ema_medium: 50,
            ema_slow: 200,
            rsi_short: 3,
            rsi_long: 13,
            atr_period: 14,
            atr_kind: AtrKind::Simple,
            pivot_half_width: 5,
        }
    }
}

/// Compute every indicator column for `series`.
///
/// Pure over the input: no cross-instrument state, and cells only depend
/// on bars at earlier or equal positions, except the centered pivot flags.
pub fn compute_frame(
    series: &BarSeries,
    windows: &WindowConfig,
    trend: &SupertrendConfig,
) -> IndicatorFrame {
    let closes = series.closes();
    let highs = series.highs();
    let lows = series.lows();

    let ema_fast = ema_series(&closes, windows.ema_fast);
    let ema_medium = ema_series(&closes, windows.ema_medium);
    let ema_slow = ema_series(&closes, windows.ema_slow);
    let trend_label = trend_labels(&ema_fast, &ema_medium, &ema_slow);
    let state = supertrend_series(series.bars(), trend);

    IndicatorFrame {
        rsi_short: rsi_series(&closes, windows.rsi_short),
        rsi_long: rsi_series(&closes, windows.rsi_long),
        atr: atr_series(series.bars(), windows.atr_period, windows.atr_kind),
        pivot_high: crate::indicators::structure::pivot_high_series(&highs, windows.pivot_half_width),
        pivot_low: crate::indicators::structure::pivot_low_series(&lows, windows.pivot_half_width),
        trend_band: state.band,
        trend_direction: state.direction,
        trend_label,
        ema_fast,
        ema_medium,
        ema_slow,
    }
}
