//! Prediction Routes

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::service::PredictError;
use crate::AppState;

/// Score one customer record.
///
/// The body is taken as a raw JSON value so every record can flow through
/// the field-level validator; a rejected extraction is handed to the
/// pipeline as a missing payload rather than bypassing its accounting.
pub async fn predict(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, PredictError> {
    let payload = body.ok().map(|Json(value)| value);
    let result = state.service.predict(payload.as_ref())?;

    Ok(Json(json!({
        "success": true,
        "model_version": state.service.model_version(),
        "result": result
    })))
}
