//! HTTP Error Mapping

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::{error, warn};

use crate::service::PredictError;

impl IntoResponse for PredictError {
    fn into_response(self) -> Response {
        match self {
            PredictError::ModelUnavailable => {
                error!("prediction requested before a model was loaded");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(json!({
                        "success": false,
                        "error": "Model not available"
                    })),
                )
                    .into_response()
            }
            PredictError::MalformedBody => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "success": false,
                    "error": "Invalid request format"
                })),
            )
                .into_response(),
            PredictError::Validation(err) => {
                warn!(issues = err.issues.len(), "record rejected by validation");
                let details: Vec<_> = err
                    .issues
                    .iter()
                    .map(|issue| {
                        json!({
                            "field": issue.field(),
                            "message": issue.to_string()
                        })
                    })
                    .collect();
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "success": false,
                        "error": "Invalid input",
                        "details": details
                    })),
                )
                    .into_response()
            }
            PredictError::Scoring(err) => {
                // The wire gets an opaque correlation id, never the cause.
                let error_id = uuid::Uuid::new_v4();
                error!(%error_id, error = %err, "scoring failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "success": false,
                        "error": "Prediction failed",
                        "error_id": error_id.to_string()
                    })),
                )
                    .into_response()
            }
        }
    }
}
