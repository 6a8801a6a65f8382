//! Model Error Types

use thiserror::Error;

/// Errors while loading or persisting a model artifact
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// Artifact file missing or unreadable
    #[error("failed to read model artifact: {0}")]
    Io(#[from] std::io::Error),

    /// Artifact bytes are not the expected JSON document
    #[error("model artifact is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Artifact was written by an unsupported format version
    #[error("unsupported artifact format version: {found}")]
    IncompatibleVersion { found: u32 },

    /// Artifact decoded but the ensemble is structurally unusable
    #[error("invalid model structure: {0}")]
    Invalid(String),
}

/// Errors while scoring a feature vector
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// Feature vector length does not match the model
    #[error("feature vector has {actual} values, model expects {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Feature vector contains NaN or infinity
    #[error("feature vector contains a non-finite value at index {index}")]
    NonFiniteFeature { index: usize },
}
