//! Merge, filter and order per-instrument signals into the batch report.

use crate::models::signal::{ScanReport, Signal};

pub const NO_DATA_MESSAGE: &str = "No CSV files found.";
pub const NO_SIGNALS_MESSAGE: &str = "No signals generated.";

/// Collapse the merged per-instrument signals into a report.
///
/// Only signals from the most recent calendar date across all
/// instruments survive; the rest of the run's history is discarded.
/// Ordering is side then symbol then timestamp, so repeated runs over
/// the same data serialize identically. `any_processed` distinguishes
/// "no loadable data" from "data but no matches".
pub fn aggregate(mut signals: Vec<Signal>, any_processed: bool) -> ScanReport {
    if !any_processed {
        return ScanReport::error(NO_DATA_MESSAGE);
    }
    if signals.is_empty() {
        return ScanReport::error(NO_SIGNALS_MESSAGE);
    }

    let Some(latest_date) = signals.iter().map(|s| s.timestamp.date_naive()).max() else {
        return ScanReport::error(NO_SIGNALS_MESSAGE);
    };
    signals.retain(|s| s.timestamp.date_naive() == latest_date);

    signals.sort_by(|a, b| {
        (a.side, &a.symbol, a.timestamp).cmp(&(b.side, &b.symbol, b.timestamp))
    });
    signals.dedup_by(|a, b| {
        a.symbol == b.symbol && a.timestamp == b.timestamp && a.side == b.side
    });

    let message = format!("Found {} signals", signals.len());
    ScanReport::success(message, signals)
}
