//! Prediction Pipeline

use std::sync::Arc;

use churn_model::{RiskLevel, RiskThresholds, ScoreError, Scorer};
use feature_engine::FeatureDeriver;
use record_validator::{RecordValidator, ValidationError};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::info;

use crate::metrics::ServiceMetrics;

/// Errors surfaced by the prediction pipeline
#[derive(Debug, Error)]
pub enum PredictError {
    /// No scoring backend is loaded
    #[error("model not available")]
    ModelUnavailable,

    /// Request body failed JSON parsing
    #[error("request body is not a JSON document")]
    MalformedBody,

    /// Record rejected by the shape contract
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Scoring backend failure
    #[error("scoring failed: {0}")]
    Scoring(#[from] ScoreError),
}

/// Scored outcome for one customer record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionResult {
    pub churn_prediction: u8,
    pub churn_probability: f64,
    pub risk_level: RiskLevel,
}

/// Orchestrates one request through validate, derive, score, and bucket.
///
/// Holds no request state; every step either advances or short-circuits
/// with an error that carries its own counter accounting.
pub struct PredictionService {
    scorer: Option<Arc<dyn Scorer>>,
    validator: RecordValidator,
    deriver: FeatureDeriver,
    thresholds: RiskThresholds,
    model_version: String,
    metrics: Arc<ServiceMetrics>,
}

impl PredictionService {
    /// Create a service around an optional scoring backend
    pub fn new(
        scorer: Option<Arc<dyn Scorer>>,
        thresholds: RiskThresholds,
        model_version: String,
        metrics: Arc<ServiceMetrics>,
    ) -> Self {
        Self {
            scorer,
            validator: RecordValidator::new(),
            deriver: FeatureDeriver::new(),
            thresholds,
            model_version,
            metrics,
        }
    }

    /// Whether a model is loaded and predictions can be served
    pub fn is_ready(&self) -> bool {
        self.scorer.is_some()
    }

    /// Version tag of the served model
    pub fn model_version(&self) -> &str {
        &self.model_version
    }

    /// Run one payload through the pipeline.
    ///
    /// `None` marks a body that failed JSON parsing; it still counts toward
    /// the request totals. Counter accounting: unparseable bodies and
    /// not-ready rejections count as errors, validation and scoring
    /// failures as failed predictions.
    pub fn predict(&self, payload: Option<&Value>) -> Result<PredictionResult, PredictError> {
        self.metrics.record_request();

        let Some(scorer) = &self.scorer else {
            self.metrics.record_error();
            return Err(PredictError::ModelUnavailable);
        };

        let Some(payload) = payload else {
            self.metrics.record_error();
            return Err(PredictError::MalformedBody);
        };

        let record = match self.validator.validate(payload) {
            Ok(record) => record,
            Err(err) => {
                self.metrics.record_failed_prediction();
                return Err(PredictError::Validation(err));
            }
        };

        let features = self.deriver.derive(&record);
        let score = match scorer.predict(features.as_slice()) {
            Ok(score) => score,
            Err(err) => {
                self.metrics.record_failed_prediction();
                return Err(PredictError::Scoring(err));
            }
        };

        let risk_level = RiskLevel::from_probability(score.probability, &self.thresholds);
        self.metrics.record_success(risk_level);

        info!(
            churn_prediction = score.label,
            risk_level = risk_level.as_str(),
            "prediction successful"
        );

        // Rounded for the wire; the label and bucket come from the raw value.
        Ok(PredictionResult {
            churn_prediction: score.label,
            churn_probability: round4(score.probability),
            risk_level,
        })
    }
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
