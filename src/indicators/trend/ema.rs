//! EMA (Exponential Moving Average) columns and the alignment label.

use crate::common::math;
use crate::models::frame::TrendLabel;

/// Recursive EMA over `values` with the given span.
///
/// Seeded at `values[0]` with no warm-up gap, so every cell is defined
/// once the span fits the series. A span of zero, or one not shorter than
/// the series, yields an all-undefined column.
pub fn ema_series(values: &[f64], span: usize) -> Vec<Option<f64>> {
    if span == 0 || span >= values.len() {
        return vec![None; values.len()];
    }

    let alpha = math::ema_alpha(span);
    let mut out = Vec::with_capacity(values.len());
    let mut previous = values[0];
    out.push(Some(previous));
    for &value in &values[1..] {
        previous = math::ema_step(previous, value, alpha);
        out.push(Some(previous));
    }
    out
}

/// Coarse trend label from fast/medium/slow EMA alignment.
///
/// `Up` when fast > medium > slow, `Down` when fast < medium < slow,
/// `NoTrend` otherwise. Undefined wherever any input EMA is undefined.
pub fn trend_labels(
    fast: &[Option<f64>],
    medium: &[Option<f64>],
    slow: &[Option<f64>],
) -> Vec<Option<TrendLabel>> {
    fast.iter()
        .zip(medium.iter())
        .zip(slow.iter())
        .map(|((f, m), s)| match (f, m, s) {
            (Some(f), Some(m), Some(s)) => {
                if f > m && m > s {
                    Some(TrendLabel::Up)
                } else if f < m && m < s {
                    Some(TrendLabel::Down)
                } else {
                    Some(TrendLabel::NoTrend)
                }
            }
            _ => None,
        })
        .collect()
}
