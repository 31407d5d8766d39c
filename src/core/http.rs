//! HTTP endpoint server using Axum.

use axum::{extract::State, response::Json, routing::get, Router};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::config::ScanConfig;
use crate::models::signal::ScanReport;
use crate::services::bar_store::BarStore;
use crate::signals::engine::SignalEngine;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn BarStore>,
    pub pivot_config: ScanConfig,
    pub emarsi_config: ScanConfig,
    pub start_time: Arc<Instant>,
}

impl AppState {
    pub fn new(store: Arc<dyn BarStore>) -> Self {
        Self {
            store,
            pivot_config: ScanConfig::pivot_ma_alignment(),
            emarsi_config: ScanConfig::momentum_breakout(),
            start_time: Arc::new(Instant::now()),
        }
    }
}

async fn root() -> Json<Value> {
    Json(json!({ "message": "Welcome to the Pivotrix signal engine!" }))
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Json(json!({
        "status": "healthy",
        "uptime_seconds": uptime_seconds,
        "service": "pivotrix-signal-engine"
    }))
}

/// Intraday pivot scan: pivot confirmation gated by EMA alignment.
async fn intraday_pivot_signals(State(state): State<AppState>) -> Json<ScanReport> {
    let report = SignalEngine::run_signal_scan(&state.pivot_config, &state.store).await;
    info!(
        status = ?report.status,
        count = report.count,
        "pivot scan completed"
    );
    Json(report)
}

/// Intraday EMA/RSI scan: candle pattern, breakout and momentum gates.
async fn intraday_emarsi_signals(State(state): State<AppState>) -> Json<ScanReport> {
    let report = SignalEngine::run_signal_scan(&state.emarsi_config, &state.store).await;
    info!(
        status = ?report.status,
        count = report.count,
        "emarsi scan completed"
    );
    Json(report)
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/intraday-pivot-signals", get(intraday_pivot_signals))
        .route("/intraday-emarsi-signals", get(intraday_emarsi_signals))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn start_server(
    port: u16,
    state: AppState,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!(port = port, "HTTP server listening on 0.0.0.0:{}", port);
    axum::serve(listener, app).await?;
    Ok(())
}
