//! Pivotrix API Server
//!
//! Serves intraday signal scans over HTTP. Bar data is read from a CSV
//! directory maintained by the data-acquisition collaborator.

use dotenvy::dotenv;
use pivotrix::core::http::{start_server, AppState};
use pivotrix::logging;
use pivotrix::services::bar_store::CsvBarStore;
use std::env;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let data_dir = env::var("DATA_DIR").unwrap_or_else(|_| "data/nfo/15m".to_string());

    let environment = pivotrix::config::get_environment();
    info!("Starting Pivotrix API Server");
    info!(environment = %environment, "Environment");
    info!(data_dir = %data_dir, "Bar data directory");

    let store = Arc::new(CsvBarStore::new(data_dir));
    let state = AppState::new(store);

    let server_handle = tokio::spawn(async move {
        if let Err(e) = start_server(port, state).await {
            error!(error = %e, "HTTP server error");
        }
    });

    info!("API server started, waiting for shutdown signal...");
    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down API server...");
        }
        _ = server_handle => {
            error!("HTTP server stopped");
        }
    }

    Ok(())
}
