//! Centered rolling pivot-high / pivot-low flags.
//!
//! These are the one intentionally non-causal column: a pivot at `i` is
//! confirmed by `half_width` neighbors on each side, so the first and
//! last `half_width` positions of a series are undefined, never flagged.

/// Pivot-high flags: `high[i]` strictly above both immediate neighbors
/// and equal to the maximum of the centered `[i - n, i + n]` window.
pub fn pivot_high_series(highs: &[f64], half_width: usize) -> Vec<Option<bool>> {
    centered_extremum(highs, half_width, Extremum::Max)
}

/// Pivot-low flags, the mirror of [`pivot_high_series`] over lows.
pub fn pivot_low_series(lows: &[f64], half_width: usize) -> Vec<Option<bool>> {
    centered_extremum(lows, half_width, Extremum::Min)
}

enum Extremum {
    Max,
    Min,
}

fn centered_extremum(values: &[f64], half_width: usize, kind: Extremum) -> Vec<Option<bool>> {
    let len = values.len();
    if half_width == 0 || len < 2 * half_width + 1 {
        return vec![None; len];
    }

    let mut out = vec![None; len];
    for i in half_width..(len - half_width) {
        let window = &values[i - half_width..=i + half_width];
        let flag = match kind {
            Extremum::Max => {
                values[i] > values[i - 1]
                    && values[i] > values[i + 1]
                    && window.iter().all(|&v| v <= values[i])
            }
            Extremum::Min => {
                values[i] < values[i - 1]
                    && values[i] < values[i + 1]
                    && window.iter().all(|&v| v >= values[i])
            }
        };
        out[i] = Some(flag);
    }
    out
}
