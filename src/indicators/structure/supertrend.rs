//! Supertrend trend-state machine.
//!
//! A sequential recurrence over one instrument: each bar's band and
//! direction derive only from the previous bar's output and the current
//! bar's price and volatility. Implemented as a fold carrying an explicit
//! `(direction, band)` accumulator, so re-running over the same series is
//! reproducible bit-for-bit.

use crate::indicators::volatility::{atr_series, AtrKind};
use crate::models::bars::Bar;
use crate::models::frame::TrendDirection;
use serde::{Deserialize, Serialize};

/// How the recurrence revises the band while the trend persists.
///
/// Which rendition is authoritative differs between data vendors, so
/// each is a named, selectable variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum TrendSmoothing {
    /// Canonical rule: the band only tightens toward price while the
    /// trend persists and resets to the opposite basic band on a flip.
    Ratchet,
    /// Flip only when the close crosses the previous bar's *basic* outer
    /// band; carry band and direction otherwise, adjusting a carried band
    /// the bar price crosses through.
    BreakoutCarry,
    /// Ratchet whose flips require the flip condition to hold on two
    /// consecutive bars.
    Confirmed,
}

/// Supertrend parameters. The machine runs its own ATR so the band
/// period can differ from the frame-level ATR used for price targets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SupertrendConfig {
    pub period: usize,
    pub multiplier: f64,
    pub atr_kind: AtrKind,
    pub seed: TrendDirection,
    pub smoothing: TrendSmoothing,
}

impl Default for SupertrendConfig {
    fn default() -> Self {
        Self {
            period: 10,
            multiplier: 3.0,
            atr_kind: AtrKind::Simple,
            seed: TrendDirection::Bearish,
            smoothing: TrendSmoothing::Ratchet,
        }
    }
}

/// Band and direction columns aligned to the input series. Cells before
/// the first ATR-defined index are undefined.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendState {
    pub band: Vec<Option<f64>>,
    pub direction: Vec<Option<TrendDirection>>,
}

#[derive(Clone, Copy)]
struct Accumulator {
    direction: TrendDirection,
    band: f64,
    /// Ratchet flip condition held on the previous bar (Confirmed only).
    pending_flip: bool,
}

pub fn supertrend_series(bars: &[Bar], config: &SupertrendConfig) -> TrendState {
    let len = bars.len();
    let atr = atr_series(bars, config.period, config.atr_kind);

    let upper: Vec<Option<f64>> = bars
        .iter()
        .zip(atr.iter())
        .map(|(bar, a)| a.map(|a| bar.hl2() + config.multiplier * a))
        .collect();
    let lower: Vec<Option<f64>> = bars
        .iter()
        .zip(atr.iter())
        .map(|(bar, a)| a.map(|a| bar.hl2() - config.multiplier * a))
        .collect();

    let mut band = vec![None; len];
    let mut direction = vec![None; len];

    let Some(start) = atr.iter().position(Option::is_some) else {
        return TrendState { band, direction };
    };

    let seed_band = match config.seed {
        TrendDirection::Bullish => lower[start],
        TrendDirection::Bearish => upper[start],
    };
    let Some(seed_band) = seed_band else {
        return TrendState { band, direction };
    };

    let mut acc = Accumulator {
        direction: config.seed,
        band: seed_band,
        pending_flip: false,
    };
    band[start] = Some(acc.band);
    direction[start] = Some(acc.direction);

    for i in (start + 1)..len {
        // Bands are defined everywhere past `start` for both ATR kinds.
        let (Some(up), Some(lo)) = (upper[i], lower[i]) else {
            continue;
        };
        acc = match config.smoothing {
            TrendSmoothing::Ratchet => ratchet_step(&acc, bars[i].close, up, lo, false),
            TrendSmoothing::Confirmed => ratchet_step(&acc, bars[i].close, up, lo, true),
            TrendSmoothing::BreakoutCarry => {
                // Previous basic bands exist for every i > start.
                match (upper[i - 1], lower[i - 1]) {
                    (Some(prev_up), Some(prev_lo)) => {
                        breakout_carry_step(&acc, bars[i].close, up, lo, prev_up, prev_lo)
                    }
                    _ => acc,
                }
            }
        };
        band[i] = Some(acc.band);
        direction[i] = Some(acc.direction);
    }

    TrendState { band, direction }
}

fn ratchet_step(acc: &Accumulator, close: f64, upper: f64, lower: f64, confirmed: bool) -> Accumulator {
    let holds = match acc.direction {
        TrendDirection::Bullish => close > acc.band,
        TrendDirection::Bearish => close < acc.band,
    };

    if holds {
        let band = match acc.direction {
            TrendDirection::Bullish => lower.max(acc.band),
            TrendDirection::Bearish => upper.min(acc.band),
        };
        return Accumulator {
            direction: acc.direction,
            band,
            pending_flip: false,
        };
    }

    if confirmed && !acc.pending_flip {
        // First bar of a potential flip: carry the state, remember it.
        return Accumulator {
            direction: acc.direction,
            band: acc.band,
            pending_flip: true,
        };
    }

    let direction = acc.direction.flipped();
    let band = match direction {
        TrendDirection::Bullish => lower,
        TrendDirection::Bearish => upper,
    };
    Accumulator {
        direction,
        band,
        pending_flip: false,
    }
}

fn breakout_carry_step(
    acc: &Accumulator,
    close: f64,
    upper: f64,
    lower: f64,
    prev_upper: f64,
    prev_lower: f64,
) -> Accumulator {
    if close > prev_upper {
        return Accumulator {
            direction: TrendDirection::Bullish,
            band: lower,
            pending_flip: false,
        };
    }
    if close < prev_lower {
        return Accumulator {
            direction: TrendDirection::Bearish,
            band: upper,
            pending_flip: false,
        };
    }

    // Carry, then adjust a carried band the close has crossed through.
    let mut next = Accumulator {
        direction: acc.direction,
        band: acc.band,
        pending_flip: false,
    };
    if acc.band == prev_upper && close > next.band {
        next.direction = TrendDirection::Bullish;
        next.band = lower;
    } else if acc.band == prev_lower && close < next.band {
        next.direction = TrendDirection::Bearish;
        next.band = upper;
    }
    next
}
