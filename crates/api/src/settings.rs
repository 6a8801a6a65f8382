//! Runtime Configuration

use churn_model::RiskThresholds;
use config::{Config, ConfigError, Environment};
use serde::Deserialize;

/// Service settings, sourced from `CHURN_*` environment variables
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Path of the model artifact JSON
    #[serde(default = "default_model_path")]
    pub model_path: String,
    /// Version tag echoed in prediction responses
    #[serde(default = "default_model_version")]
    pub model_version: String,
    /// Log filter directive (e.g. "info" or "api=debug")
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Bind address
    #[serde(default = "default_host")]
    pub host: String,
    /// Bind port
    #[serde(default = "default_port")]
    pub port: u16,
    /// Runtime worker threads
    #[serde(default = "default_workers")]
    pub workers: usize,
    /// Whether /metrics is exposed
    #[serde(default = "default_metrics_enabled")]
    pub metrics_enabled: bool,
    /// Probability at or above which risk is Medium
    #[serde(default = "default_risk_medium")]
    pub risk_medium: f64,
    /// Probability at or above which risk is High
    #[serde(default = "default_risk_high")]
    pub risk_high: f64,
}

impl Settings {
    /// Load settings from the environment
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(Environment::with_prefix("CHURN").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Risk bucketing boundaries
    pub fn risk_thresholds(&self) -> RiskThresholds {
        RiskThresholds {
            medium: self.risk_medium,
            high: self.risk_high,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            model_path: default_model_path(),
            model_version: default_model_version(),
            log_level: default_log_level(),
            host: default_host(),
            port: default_port(),
            workers: default_workers(),
            metrics_enabled: default_metrics_enabled(),
            risk_medium: default_risk_medium(),
            risk_high: default_risk_high(),
        }
    }
}

fn default_model_path() -> String {
    "models/churn_model.json".to_string()
}

fn default_model_version() -> String {
    "1.0.0".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_workers() -> usize {
    4
}

fn default_metrics_enabled() -> bool {
    true
}

fn default_risk_medium() -> f64 {
    0.3
}

fn default_risk_high() -> f64 {
    0.7
}
