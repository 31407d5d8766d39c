//! ATR (Average True Range) column, simple and exponential variants.

use crate::common::math;
use crate::models::bars::Bar;
use serde::{Deserialize, Serialize};

/// Smoothing applied to the true-range series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum AtrKind {
    /// Rolling mean of TR over the period; defined from index `period - 1`.
    Simple,
    /// EMA recurrence over TR seeded at `TR[0]`; defined from index 0.
    Exponential,
}

/// True range per bar. `TR[0]` falls back to `high - low` since no
/// previous close exists.
pub fn true_range_series(bars: &[Bar]) -> Vec<f64> {
    bars.iter()
        .enumerate()
        .map(|(i, bar)| {
            if i == 0 {
                bar.high - bar.low
            } else {
                math::true_range(bar.high, bar.low, bars[i - 1].close)
            }
        })
        .collect()
}

/// ATR over `bars` with the given period and smoothing.
///
/// A period not shorter than the series yields an all-undefined column.
pub fn atr_series(bars: &[Bar], period: usize, kind: AtrKind) -> Vec<Option<f64>> {
    if period == 0 || period >= bars.len() {
        return vec![None; bars.len()];
    }

    let tr = true_range_series(bars);
    match kind {
        AtrKind::Simple => {
            let mut out = vec![None; bars.len()];
            for i in (period - 1)..bars.len() {
                out[i] = math::mean(&tr[i + 1 - period..=i]);
            }
            out
        }
        AtrKind::Exponential => {
            let alpha = math::ema_alpha(period);
            let mut out = Vec::with_capacity(bars.len());
            let mut previous = tr[0];
            out.push(Some(previous));
            for &value in &tr[1..] {
                previous = math::ema_step(previous, value, alpha);
                out.push(Some(previous));
            }
            out
        }
    }
}
