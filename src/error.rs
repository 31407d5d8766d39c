//! Engine error taxonomy
//!
//! Per-instrument failures (malformed bars, unreadable files) are recovered
//! locally by the scan loop; only the total absence of processable data or
//! of matching signals surfaces in the batch report. Nothing here is fatal
//! to the host process.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    /// No instrument could be loaded at all.
    #[error("no bar data available")]
    DataUnavailable,

    /// A symbol was requested that the store does not know.
    #[error("symbol not found: {0}")]
    SymbolNotFound(String),

    /// A bar violates the series contract (non-finite field or
    /// non-monotonic timestamp). The offending instrument is skipped.
    #[error("malformed bar for {symbol} at index {index}: {reason}")]
    MalformedBar {
        symbol: String,
        index: usize,
        reason: String,
    },

    #[error("invalid timestamp {value:?}: {reason}")]
    InvalidTimestamp { value: String, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}
