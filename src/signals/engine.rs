//! Scan orchestration across the instrument universe.

use crate::config::ScanConfig;
use crate::indicators::compute_frame;
use crate::models::bars::BarSeries;
use crate::models::signal::{ScanReport, Signal};
use crate::services::bar_store::BarStore;
use crate::signals::aggregation::aggregate;
use crate::signals::generator::scan_series;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, error, warn};

pub struct SignalEngine;

impl SignalEngine {
    /// Pure per-instrument pipeline: indicator frame, then per-bar rules.
    pub fn scan_symbol(series: &BarSeries, config: &ScanConfig) -> Vec<Signal> {
        let frame = compute_frame(series, &config.windows, &config.trend);
        scan_series(series, &frame, config)
    }

    /// Run the full scan: every symbol the store knows, bounded fan-out,
    /// merged into one report.
    ///
    /// Instruments are independent, so each is scanned on its own
    /// blocking task; a per-instrument failure is logged and skipped
    /// without aborting the batch.
    pub async fn run_signal_scan(config: &ScanConfig, store: &Arc<dyn BarStore>) -> ScanReport {
        let mut symbols = match store.list_symbols().await {
            Ok(symbols) => symbols,
            Err(e) => {
                warn!(error = %e, "failed to list instruments");
                return aggregate(Vec::new(), false);
            }
        };
        symbols.sort();
        if symbols.is_empty() {
            return aggregate(Vec::new(), false);
        }

        let semaphore = Arc::new(Semaphore::new(config.max_parallel_scans.max(1)));
        let mut tasks = JoinSet::new();
        for symbol in symbols {
            let store = store.clone();
            let config = config.clone();
            let semaphore = semaphore.clone();
            tasks.spawn(async move {
                let _permit = semaphore.acquire_owned().await.ok()?;
                let series = match store.load(&symbol).await {
                    Ok(series) => series,
                    Err(e) => {
                        warn!(symbol = %symbol, error = %e, "skipping instrument");
                        return None;
                    }
                };
                debug!(symbol = %symbol, bars = series.len(), "scanning instrument");
                match tokio::task::spawn_blocking(move || Self::scan_symbol(&series, &config))
                    .await
                {
                    Ok(signals) => Some(signals),
                    Err(e) => {
                        error!(symbol = %symbol, error = %e, "scan task failed");
                        None
                    }
                }
            });
        }

        let mut merged = Vec::new();
        let mut any_processed = false;
        while let Some(joined) = tasks.join_next().await {
            if let Ok(Some(signals)) = joined {
                any_processed = true;
                merged.extend(signals);
            }
        }

        aggregate(merged, any_processed)
    }
}
