//! Bar supply interface and its implementations.
//!
//! The engine never walks the filesystem itself: it is handed a store
//! that enumerates the instrument universe and loads one validated
//! series per symbol.

use crate::error::ScanError;
use crate::models::bars::{Bar, BarSeries};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;

#[async_trait]
pub trait BarStore: Send + Sync {
    /// Enumerate available instrument symbols.
    async fn list_symbols(&self) -> Result<Vec<String>, ScanError>;

    /// Load the bar series for one symbol, validated.
    async fn load(&self, symbol: &str) -> Result<BarSeries, ScanError>;
}

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Deserialize)]
struct CsvBarRow {
    date: String,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: f64,
}

impl CsvBarRow {
    fn into_bar(self) -> Result<Bar, ScanError> {
        let naive = NaiveDateTime::parse_from_str(&self.date, TIMESTAMP_FORMAT).map_err(|e| {
            ScanError::InvalidTimestamp {
                value: self.date.clone(),
                reason: e.to_string(),
            }
        })?;
        Ok(Bar::new(
            naive.and_utc(),
            self.open,
            self.high,
            self.low,
            self.close,
            self.volume,
        ))
    }
}

/// Directory of `<SYMBOL>.csv` files with header
/// `date,open,high,low,close,volume`.
pub struct CsvBarStore {
    dir: PathBuf,
}

impl CsvBarStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl BarStore for CsvBarStore {
    async fn list_symbols(&self) -> Result<Vec<String>, ScanError> {
        let mut symbols = Vec::new();
        for entry in std::fs::read_dir(&self.dir)? {
            let path = entry?.path();
            let is_csv = path.extension().and_then(|e| e.to_str()) == Some("csv");
            if is_csv {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    symbols.push(stem.to_string());
                }
            }
        }
        symbols.sort();
        Ok(symbols)
    }

    async fn load(&self, symbol: &str) -> Result<BarSeries, ScanError> {
        let path = self.dir.join(format!("{symbol}.csv"));
        if !path.is_file() {
            return Err(ScanError::SymbolNotFound(symbol.to_string()));
        }

        let mut reader = csv::Reader::from_path(&path)?;
        let mut bars = Vec::new();
        for row in reader.deserialize::<CsvBarRow>() {
            bars.push(row?.into_bar()?);
        }
        BarSeries::new(symbol, bars)
    }
}

/// In-memory store, mainly for tests and embedding.
///
/// Bars are validated on load, so a seeded malformed series exercises
/// the same rejection path as a malformed file.
#[derive(Debug, Default)]
pub struct MemoryBarStore {
    bars: HashMap<String, Vec<Bar>>,
}

impl MemoryBarStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, symbol: impl Into<String>, bars: Vec<Bar>) {
        self.bars.insert(symbol.into(), bars);
    }
}

#[async_trait]
impl BarStore for MemoryBarStore {
    async fn list_symbols(&self) -> Result<Vec<String>, ScanError> {
        let mut symbols: Vec<String> = self.bars.keys().cloned().collect();
        symbols.sort();
        Ok(symbols)
    }

    async fn load(&self, symbol: &str) -> Result<BarSeries, ScanError> {
        let bars = self
            .bars
            .get(symbol)
            .cloned()
            .ok_or_else(|| ScanError::SymbolNotFound(symbol.to_string()))?;
        BarSeries::new(symbol, bars)
    }
}
