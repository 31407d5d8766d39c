//! RSI (Relative Strength Index) column.
//!
//! RSI = 100 - (100 / (1 + RS)), RS = average gain / average loss, with
//! plain rolling means of the close-to-close deltas.

/// RSI over `closes` with the given delta length.
///
/// A cell is defined once `length` deltas are available, i.e. from index
/// `length`. Bounded in [0, 100]: all-gain windows saturate at 100,
/// all-loss windows at 0. A length not shorter than the series yields an
/// all-undefined column.
pub fn rsi_series(closes: &[f64], length: usize) -> Vec<Option<f64>> {
    if length == 0 || length >= closes.len() {
        return vec![None; closes.len()];
    }

    let mut gains = vec![0.0; closes.len()];
    let mut losses = vec![0.0; closes.len()];
    for i in 1..closes.len() {
        let delta = closes[i] - closes[i - 1];
        if delta > 0.0 {
            gains[i] = delta;
        } else {
            losses[i] = -delta;
        }
    }

    let mut out = vec![None; closes.len()];
    for i in length..closes.len() {
        let window = (i - length + 1)..=i;
        let avg_gain: f64 = gains[window.clone()].iter().sum::<f64>() / length as f64;
        let avg_loss: f64 = losses[window].iter().sum::<f64>() / length as f64;

        let value = if avg_loss == 0.0 {
            100.0
        } else if avg_gain == 0.0 {
            0.0
        } else {
            let rs = avg_gain / avg_loss;
            100.0 - (100.0 / (1.0 + rs))
        };
        out[i] = Some(value);
    }
    out
}
