// =============================================================================
// Meridian Signal Scanner — Main Entry Point
// =============================================================================
//
// A stateless analysis service: each request fetches fresh OHLCV history per
// ticker, recomputes the full indicator table, and scores the latest row.
// Nothing is persisted between requests except the hot-reloadable
// configuration file.
// =============================================================================

// ── Module declarations ──────────────────────────────────────────────────────
mod analysis;
mod api;
mod app_state;
mod config;
mod errors;
mod indicators;
mod market_data;
mod pipeline;
mod provider;
mod scoring;
mod types;

use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::app_state::AppState;
use crate::config::AnalyzerConfig;
use crate::provider::YahooClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // ── 1. Environment & config ──────────────────────────────────────────
    let _ = dotenv::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("╔══════════════════════════════════════════════════════════╗");
    info!("║        Meridian Signal Scanner — Starting Up             ║");
    info!("╚══════════════════════════════════════════════════════════╝");

    let config_path =
        std::env::var("MERIDIAN_CONFIG").unwrap_or_else(|_| "analyzer_config.json".to_string());

    let config = AnalyzerConfig::load(&config_path).unwrap_or_else(|e| {
        warn!(error = %e, "failed to load config, using defaults");
        AnalyzerConfig::default()
    });

    info!(
        range = %config.history_range,
        interval = %config.history_interval,
        min_bars = config.min_history_bars,
        workers = config.max_concurrent_fetches,
        rules = config.scoring.rules.len(),
        "analyzer configured"
    );

    // ── 2. Build shared state ────────────────────────────────────────────
    let state = Arc::new(AppState::new(config, &config_path, YahooClient::new()));

    // ── 3. Start the API server ──────────────────────────────────────────
    let bind_addr =
        std::env::var("MERIDIAN_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3001".into());

    let app = api::rest::router(state);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| anyhow::anyhow!("failed to bind {bind_addr}: {e}"))?;
    info!(addr = %bind_addr, "API server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Meridian Signal Scanner shut down complete.");
    Ok(())
}

/// Resolve when Ctrl+C arrives so axum can drain in-flight requests.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        return;
    }
    warn!("Shutdown signal received — stopping gracefully");
}
