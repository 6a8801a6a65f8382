//! Service Metrics
//!
//! Explicitly owned request counters, injected where they are needed
//! instead of living in process-wide globals. Counters only ever increase.

use std::sync::atomic::{AtomicU64, Ordering};

use churn_model::RiskLevel;
use serde::Serialize;

/// Monotonic per-process counters for the prediction pipeline
#[derive(Debug, Default)]
pub struct ServiceMetrics {
    total_requests: AtomicU64,
    successful_predictions: AtomicU64,
    failed_predictions: AtomicU64,
    errors: AtomicU64,
    low_risk: AtomicU64,
    medium_risk: AtomicU64,
    high_risk: AtomicU64,
}

impl ServiceMetrics {
    /// Create zeroed counters
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one inbound prediction request
    pub fn record_request(&self) {
        self.total_requests.fetch_add(1, Ordering::Relaxed);
    }

    /// Count a completed prediction and its risk bucket
    pub fn record_success(&self, risk: RiskLevel) {
        self.successful_predictions.fetch_add(1, Ordering::Relaxed);
        let bucket = match risk {
            RiskLevel::Low => &self.low_risk,
            RiskLevel::Medium => &self.medium_risk,
            RiskLevel::High => &self.high_risk,
        };
        bucket.fetch_add(1, Ordering::Relaxed);
    }

    /// Count a prediction rejected by validation or failed in scoring
    pub fn record_failed_prediction(&self) {
        self.failed_predictions.fetch_add(1, Ordering::Relaxed);
    }

    /// Count a request that never reached the pipeline
    pub fn record_error(&self) {
        self.errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Read a consistent-enough snapshot of all counters
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            total_requests: self.total_requests.load(Ordering::Relaxed),
            successful_predictions: self.successful_predictions.load(Ordering::Relaxed),
            failed_predictions: self.failed_predictions.load(Ordering::Relaxed),
            errors: self.errors.load(Ordering::Relaxed),
            predictions_by_risk: RiskCounts {
                low: self.low_risk.load(Ordering::Relaxed),
                medium: self.medium_risk.load(Ordering::Relaxed),
                high: self.high_risk.load(Ordering::Relaxed),
            },
        }
    }
}

/// Point-in-time counter values
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub total_requests: u64,
    pub successful_predictions: u64,
    pub failed_predictions: u64,
    pub errors: u64,
    pub predictions_by_risk: RiskCounts,
}

/// Successful predictions broken down by risk bucket
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskCounts {
    pub low: u64,
    pub medium: u64,
    pub high: u64,
}
