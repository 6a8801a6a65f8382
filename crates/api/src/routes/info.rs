//! Service Info Routes

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

use crate::{AppState, API_VERSION};

/// Service summary served at the root path
pub async fn service_info(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "service": "Customer Churn Prediction API",
        "version": state.settings.model_version,
        "api_version": API_VERSION,
        "endpoints": {
            "predict": format!("/api/{API_VERSION}/predict"),
            "health": "/health",
            "ready": "/ready",
            "metrics": "/metrics"
        }
    }))
}

/// Fallback for unknown routes
pub async fn not_found() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "success": false,
            "error": "Endpoint not found"
        })),
    )
}
