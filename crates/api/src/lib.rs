//! Churn Prediction API Server
//!
//! REST serving layer: validates customer payloads, runs them through the
//! feature pipeline and model, and exposes health/readiness/metrics probes.

use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use churn_model::{GbdtModel, Scorer};
use feature_engine::FEATURE_DIMENSION;

mod error;
mod metrics;
mod routes;
mod service;
mod settings;

pub use metrics::{MetricsSnapshot, RiskCounts, ServiceMetrics};
pub use service::{PredictError, PredictionResult, PredictionService};
pub use settings::Settings;

/// API version segment used in routed paths
pub const API_VERSION: &str = "v1";

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Prediction pipeline
    pub service: Arc<PredictionService>,
    /// Request counters, shared with the service
    pub metrics: Arc<ServiceMetrics>,
    /// Runtime settings
    pub settings: Arc<Settings>,
    /// Start time
    pub start_time: Instant,
}

impl AppState {
    /// Create application state around an optional scoring backend.
    ///
    /// `None` produces a process that serves traffic but reports not-ready
    /// and rejects predictions with 503.
    pub fn new(settings: Settings, scorer: Option<Arc<dyn Scorer>>) -> Self {
        let metrics = Arc::new(ServiceMetrics::new());
        let service = Arc::new(PredictionService::new(
            scorer,
            settings.risk_thresholds(),
            settings.model_version.clone(),
            Arc::clone(&metrics),
        ));

        Self {
            service,
            metrics,
            settings: Arc::new(settings),
            start_time: Instant::now(),
        }
    }
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::info::service_info))
        .route("/health", get(routes::health::health))
        .route("/ready", get(routes::health::ready))
        .route("/metrics", get(routes::health::metrics))
        .route(
            &format!("/api/{API_VERSION}/predict"),
            post(routes::predict::predict),
        )
        .fallback(routes::info::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Load the model artifact named in settings.
///
/// A failed load is logged and yields `None`: the process keeps serving
/// but stays not-ready until restarted with a usable artifact.
pub fn load_scorer(settings: &Settings) -> Option<Arc<dyn Scorer>> {
    match GbdtModel::load(&settings.model_path) {
        Ok(model) => {
            if model.feature_count != FEATURE_DIMENSION {
                error!(
                    expected = FEATURE_DIMENSION,
                    found = model.feature_count,
                    path = %settings.model_path,
                    "model feature count does not match the derived feature dimension"
                );
                return None;
            }

            info!(
                path = %settings.model_path,
                trees = model.num_trees(),
                threshold = model.decision_threshold,
                "model loaded"
            );
            Some(Arc::new(model))
        }
        Err(err) => {
            error!(
                path = %settings.model_path,
                error = %err,
                "failed to load model, serving as not-ready"
            );
            None
        }
    }
}

/// Initialize logging
pub fn init_logging(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Run the server
pub async fn run_server(settings: Settings) -> anyhow::Result<()> {
    let addr = format!("{}:{}", settings.host, settings.port);
    let scorer = load_scorer(&settings);
    let state = AppState::new(settings, scorer);
    let app = create_router(state);

    info!("Starting churn API server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app).await.context("server exited")?;

    Ok(())
}
