//! Flat tabular export of a signal batch.
//!
//! The column set and two-decimal formatting are a compatibility
//! contract with existing downstream consumers of the scan output.

use crate::error::ScanError;
use crate::models::signal::Signal;
use std::io::Write;

const HEADER: [&str; 14] = [
    "symbol",
    "date",
    "open",
    "high",
    "low",
    "close",
    "signal",
    "rsi",
    "atr",
    "entry_price",
    "target1",
    "target2",
    "target3",
    "stop_loss",
];

pub fn write_csv<W: Write>(signals: &[Signal], writer: W) -> Result<(), ScanError> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(HEADER)?;
    for signal in signals {
        out.write_record([
            signal.symbol.clone(),
            signal.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            fixed(signal.snapshot.open),
            fixed(signal.snapshot.high),
            fixed(signal.snapshot.low),
            fixed(signal.snapshot.close),
            signal.side.as_str().to_string(),
            optional(signal.snapshot.rsi_short),
            optional(signal.snapshot.atr),
            fixed(signal.entry_price),
            fixed(signal.target1),
            fixed(signal.target2),
            fixed(signal.target3),
            fixed(signal.stop_loss),
        ])?;
    }
    out.flush()?;
    Ok(())
}

fn fixed(value: f64) -> String {
    format!("{value:.2}")
}

fn optional(value: Option<f64>) -> String {
    value.map(fixed).unwrap_or_default()
}
