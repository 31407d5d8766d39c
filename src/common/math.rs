//! Small math primitives shared by the indicator modules.

/// Smoothing factor for an EMA of the given span: `2 / (span + 1)`.
pub fn ema_alpha(span: usize) -> f64 {
    2.0 / (span as f64 + 1.0)
}

/// One step of the EMA recurrence.
pub fn ema_step(previous: f64, value: f64, alpha: f64) -> f64 {
    alpha * value + (1.0 - alpha) * previous
}

/// Arithmetic mean of a slice. `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// True range of a bar given the previous close.
pub fn true_range(high: f64, low: f64, prev_close: f64) -> f64 {
    let hl = high - low;
    let hc = (high - prev_close).abs();
    let lc = (low - prev_close).abs();
    hl.max(hc).max(lc)
}

/// Round to two decimal places for presentation-facing price fields.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
