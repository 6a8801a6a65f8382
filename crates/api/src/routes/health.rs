//! Health Routes

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;

use crate::AppState;

/// Liveness response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: u64,
    pub uptime_seconds: u64,
}

/// Liveness check: answers whenever the process is up
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp,
        uptime_seconds: state.start_time.elapsed().as_secs(),
    })
}

/// Readiness check: 503 until a model is loaded
pub async fn ready(State(state): State<AppState>) -> Response {
    if state.service.is_ready() {
        Json(json!({
            "status": "ready",
            "model_version": state.service.model_version()
        }))
        .into_response()
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "not ready",
                "reason": "Model not loaded"
            })),
        )
            .into_response()
    }
}

/// Counter snapshot, gated by configuration
pub async fn metrics(State(state): State<AppState>) -> Response {
    if !state.settings.metrics_enabled {
        return (
            StatusCode::FORBIDDEN,
            Json(json!({ "error": "Metrics disabled" })),
        )
            .into_response();
    }

    Json(state.metrics.snapshot()).into_response()
}
