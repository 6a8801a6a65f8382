//! End-to-end tests against the HTTP surface.
//!
//! Each test dispatches requests through the full router with an in-process
//! model, so status codes, envelopes, and counter accounting are exercised
//! exactly as a client would see them.

use std::sync::Arc;

use api::{create_router, AppState, Settings};
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use churn_model::{GbdtModel, Node, Score, ScoreError, Scorer, Tree};
use serde_json::{json, Value};
use tower::ServiceExt;

/// Single-split forest over the tenure feature: short-tenure customers
/// score high, established ones low.
fn tenure_model() -> GbdtModel {
    GbdtModel::new(
        21,
        0.0,
        vec![Tree::new(vec![
            Node::split(1, 6.5, 1, 2),
            Node::leaf(2.0),
            Node::leaf(-1.2),
        ])],
    )
}

struct FailingScorer;

impl Scorer for FailingScorer {
    fn predict(&self, _features: &[f64]) -> Result<Score, ScoreError> {
        Err(ScoreError::DimensionMismatch {
            expected: 21,
            actual: 7,
        })
    }
}

fn app_with(settings: Settings, scorer: Option<Arc<dyn Scorer>>) -> Router {
    create_router(AppState::new(settings, scorer))
}

fn ready_app() -> Router {
    app_with(Settings::default(), Some(Arc::new(tenure_model())))
}

fn not_ready_app() -> Router {
    app_with(Settings::default(), None)
}

fn valid_payload() -> Value {
    json!({
        "age": 35,
        "tenure_months": 12,
        "monthly_charges": 65.0,
        "total_charges": 780.0,
        "support_tickets": 2,
        "login_frequency": 20,
        "feature_usage": 0.7,
        "gender_encoded": 1,
        "location_encoded": 0,
        "contract_type_encoded": 1,
        "internet_service_encoded": 1,
        "payment_method_encoded": 0,
        "has_tech_support": 1,
        "has_device_protection": 1
    })
}

async fn get(app: Router, path: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post_predict(app: Router, body: String) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/predict")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_health_is_alive() {
    let (status, body) = get(ready_app(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert!(body["uptime_seconds"].is_u64());
    assert!(body["timestamp"].as_u64().unwrap() > 0);
}

#[tokio::test]
async fn test_ready_with_model_loaded() {
    let (status, body) = get(ready_app(), "/ready").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
    assert_eq!(body["model_version"], "1.0.0");
}

#[tokio::test]
async fn test_ready_reports_missing_model() {
    let (status, body) = get(not_ready_app(), "/ready").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "not ready");
    assert_eq!(body["reason"], "Model not loaded");
}

#[tokio::test]
async fn test_predict_established_customer_low_risk() {
    let (status, body) = post_predict(ready_app(), valid_payload().to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["model_version"], "1.0.0");
    assert_eq!(body["result"]["churn_prediction"], 0);
    assert_eq!(body["result"]["churn_probability"].as_f64().unwrap(), 0.2315);
    assert_eq!(body["result"]["risk_level"], "Low");
}

#[tokio::test]
async fn test_predict_short_tenure_flags_churn() {
    let mut payload = valid_payload();
    payload["tenure_months"] = json!(3);
    payload["total_charges"] = json!(195.0);

    let (status, body) = post_predict(ready_app(), payload.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["churn_prediction"], 1);
    assert_eq!(body["result"]["churn_probability"].as_f64().unwrap(), 0.8808);
    assert_eq!(body["result"]["risk_level"], "High");
}

#[tokio::test]
async fn test_missing_field_named_in_details() {
    let mut payload = valid_payload();
    payload.as_object_mut().unwrap().remove("tenure_months");

    let (status, body) = post_predict(ready_app(), payload.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"], "Invalid input");

    let details = body["details"].as_array().unwrap();
    assert_eq!(details.len(), 1);
    assert_eq!(details[0]["field"], "tenure_months");
    assert_eq!(details[0]["message"], "required field is missing");
}

#[tokio::test]
async fn test_all_offending_fields_reported() {
    // One out-of-range field plus thirteen missing ones.
    let (status, body) = post_predict(ready_app(), json!({ "age": -5 }).to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let details = body["details"].as_array().unwrap();
    assert_eq!(details.len(), 14);

    let fields: Vec<&str> = details
        .iter()
        .map(|d| d["field"].as_str().unwrap())
        .collect();
    assert!(fields.contains(&"age"));
    assert!(fields.contains(&"monthly_charges"));
    assert!(fields.contains(&"has_device_protection"));
}

#[tokio::test]
async fn test_malformed_body_rejected() {
    let (status, body) = post_predict(ready_app(), "{not json".to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"], "Invalid request format");
}

#[tokio::test]
async fn test_missing_content_type_rejected() {
    let response = ready_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/predict")
                .body(Body::from(valid_payload().to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], "Invalid request format");
}

#[tokio::test]
async fn test_predict_unavailable_before_load() {
    let (status, body) = post_predict(not_ready_app(), valid_payload().to_string()).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"], "Model not available");
}

#[tokio::test]
async fn test_scoring_failure_returns_opaque_error() {
    let app = app_with(Settings::default(), Some(Arc::new(FailingScorer)));
    let (status, body) = post_predict(app, valid_payload().to_string()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"], "Prediction failed");
    assert!(!body["error_id"].as_str().unwrap().is_empty());
    // The cause stays in the logs, not on the wire.
    assert!(!body.to_string().contains("dimension"));
}

#[tokio::test]
async fn test_unknown_route_envelope() {
    let (status, body) = get(ready_app(), "/api/v1/nope").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"], "Endpoint not found");
}

#[tokio::test]
async fn test_root_lists_endpoints() {
    let (status, body) = get(ready_app(), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["service"], "Customer Churn Prediction API");
    assert_eq!(body["endpoints"]["predict"], "/api/v1/predict");
    assert_eq!(body["endpoints"]["health"], "/health");
    assert_eq!(body["endpoints"]["ready"], "/ready");
    assert_eq!(body["endpoints"]["metrics"], "/metrics");
}

#[tokio::test]
async fn test_metrics_accumulate_across_requests() {
    let app = ready_app();

    let mut high = valid_payload();
    high["tenure_months"] = json!(2);

    post_predict(app.clone(), valid_payload().to_string()).await;
    post_predict(app.clone(), high.to_string()).await;
    post_predict(app.clone(), json!({ "age": 35 }).to_string()).await;
    post_predict(app.clone(), "oops".to_string()).await;

    let (status, body) = get(app, "/metrics").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_requests"], 4);
    assert_eq!(body["successful_predictions"], 2);
    assert_eq!(body["failed_predictions"], 1);
    assert_eq!(body["errors"], 1);
    assert_eq!(body["predictions_by_risk"]["low"], 1);
    assert_eq!(body["predictions_by_risk"]["medium"], 0);
    assert_eq!(body["predictions_by_risk"]["high"], 1);
}

#[tokio::test]
async fn test_metrics_disabled_returns_forbidden() {
    let settings = Settings {
        metrics_enabled: false,
        ..Settings::default()
    };
    let app = app_with(settings, Some(Arc::new(tenure_model())));

    let (status, body) = get(app, "/metrics").await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "Metrics disabled");
}
