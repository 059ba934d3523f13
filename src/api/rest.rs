// =============================================================================
// REST API Endpoints — Axum 0.7
// =============================================================================
//
// All endpoints live under `/api/v1/`. No authentication is in scope; CORS
// is configured permissively for development.
//
//   POST /api/v1/analyze         analyze a list of tickers
//   GET  /api/v1/health          liveness + state version
//   GET  /api/v1/scoring-config  current scoring rule table
//   POST /api/v1/scoring-config  replace the rule table at runtime
// =============================================================================

use std::sync::Arc;

use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};
use uuid::Uuid;

use crate::app_state::AppState;
use crate::pipeline;
use crate::scoring::ScoringConfig;
use crate::types::TickerReport;

// =============================================================================
// Router construction
// =============================================================================

/// Build the full REST API router with CORS middleware and shared state.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/v1/analyze", post(analyze))
        .route("/api/v1/health", get(health))
        .route("/api/v1/scoring-config", get(get_scoring_config))
        .route("/api/v1/scoring-config", post(set_scoring_config))
        .layer(cors)
        .with_state(state)
}

// =============================================================================
// Health
// =============================================================================

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    state_version: u64,
    server_time: i64,
}

async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        state_version: state.current_state_version(),
        server_time: chrono::Utc::now().timestamp_millis(),
    })
}

// =============================================================================
// Analyze
// =============================================================================

#[derive(Deserialize)]
struct AnalyzeRequest {
    tickers: Vec<String>,
}

#[derive(Serialize)]
struct AnalyzeResponse {
    analysis: Vec<TickerReport>,
}

async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, (StatusCode, Json<serde_json::Value>)> {
    // The only batch-level failure: a malformed ticker list.
    let tickers: Vec<String> = req
        .tickers
        .iter()
        .map(|t| t.trim().to_uppercase())
        .collect();
    if tickers.is_empty() || tickers.iter().any(String::is_empty) {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({
                "error": "tickers must be a non-empty list of non-blank symbols",
            })),
        ));
    }

    let request_id = Uuid::new_v4();
    info!(%request_id, count = tickers.len(), "analyze request received");

    // Clone the config out of the lock before any await point.
    let config = state.config.read().clone();

    let analysis = pipeline::analyze_tickers(&state.provider, &config, &tickers).await;

    let failures = analysis
        .iter()
        .filter(|r| matches!(r, TickerReport::Failure(_)))
        .count();
    info!(%request_id, total = analysis.len(), failures, "analyze request complete");

    Ok(Json(AnalyzeResponse { analysis }))
}

// =============================================================================
// Scoring configuration (hot-reloadable)
// =============================================================================

async fn get_scoring_config(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.config.read().scoring.clone())
}

async fn set_scoring_config(
    State(state): State<Arc<AppState>>,
    Json(update): Json<ScoringConfig>,
) -> Result<impl IntoResponse, (StatusCode, Json<serde_json::Value>)> {
    if update.rules.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": "scoring config must keep at least one rule" })),
        ));
    }
    if update.sell_threshold >= update.buy_threshold {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({
                "error": "sell_threshold must be below buy_threshold",
            })),
        ));
    }

    let config_snapshot = {
        let mut config = state.config.write();
        config.scoring = update;
        config.clone()
    };

    // Persist best-effort; the in-memory table is already live.
    if let Err(e) = config_snapshot.save(&state.config_path) {
        warn!(error = %e, "failed to save scoring config to disk");
    }

    state.increment_version();
    info!(
        rules = config_snapshot.scoring.rules.len(),
        buy = config_snapshot.scoring.buy_threshold,
        sell = config_snapshot.scoring.sell_threshold,
        "scoring config updated"
    );

    Ok(Json(config_snapshot.scoring))
}
