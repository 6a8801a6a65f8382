//! GBDT Model Artifact

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ArtifactError, ScoreError};
use crate::tree::Tree;

/// Artifact format version this build can read
pub const FORMAT_VERSION: u32 = 1;

/// Outcome of scoring one feature vector
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Score {
    /// Binary churn label: 1 when probability reaches the decision threshold
    pub label: u8,
    /// Churn probability in [0, 1]
    pub probability: f64,
}

/// A loaded model that scores one feature vector at a time.
///
/// Implementations must be safe to share across request tasks: scoring
/// takes `&self` and mutates nothing.
pub trait Scorer: Send + Sync {
    fn predict(&self, features: &[f64]) -> Result<Score, ScoreError>;
}

/// Boosted-tree ensemble loaded from a JSON artifact.
///
/// Immutable after load. The margin is `base_score` plus the sum of leaf
/// contributions across trees, squashed to a probability by the logistic
/// function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GbdtModel {
    /// Artifact format version
    pub format_version: u32,

    /// Number of features each tree may index into
    pub feature_count: usize,

    /// Additive prior margin
    pub base_score: f64,

    /// Probability at or above which the label is 1
    #[serde(default = "default_decision_threshold")]
    pub decision_threshold: f64,

    /// Decision trees in the ensemble
    pub trees: Vec<Tree>,
}

fn default_decision_threshold() -> f64 {
    0.5
}

impl GbdtModel {
    /// Create a new model with the default decision threshold
    pub fn new(feature_count: usize, base_score: f64, trees: Vec<Tree>) -> Self {
        Self {
            format_version: FORMAT_VERSION,
            feature_count,
            base_score,
            decision_threshold: default_decision_threshold(),
            trees,
        }
    }

    /// Validate model structure
    pub fn validate(&self) -> Result<(), ArtifactError> {
        if self.feature_count == 0 {
            return Err(ArtifactError::Invalid(
                "model declares zero features".to_string(),
            ));
        }
        if !self.base_score.is_finite() {
            return Err(ArtifactError::Invalid(
                "base score is non-finite".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.decision_threshold) {
            return Err(ArtifactError::Invalid(format!(
                "decision threshold {} is outside [0, 1]",
                self.decision_threshold
            )));
        }
        if self.trees.is_empty() {
            return Err(ArtifactError::Invalid("ensemble has no trees".to_string()));
        }

        for (i, tree) in self.trees.iter().enumerate() {
            tree.validate(self.feature_count)
                .map_err(|e| ArtifactError::Invalid(format!("tree {i}: {e}")))?;
        }

        Ok(())
    }

    /// Load and validate a model from a JSON artifact file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ArtifactError> {
        let json = fs::read_to_string(path)?;
        let model: GbdtModel = serde_json::from_str(&json)?;

        if model.format_version != FORMAT_VERSION {
            return Err(ArtifactError::IncompatibleVersion {
                found: model.format_version,
            });
        }
        model.validate()?;

        Ok(model)
    }

    /// Save the model as a JSON artifact file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ArtifactError> {
        let json = serde_json::to_string(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Raw additive margin before the logistic squash
    pub fn margin(&self, features: &[f64]) -> f64 {
        let mut margin = self.base_score;
        for tree in &self.trees {
            margin += tree.evaluate(features);
        }
        margin
    }

    /// Number of trees in the ensemble
    pub fn num_trees(&self) -> usize {
        self.trees.len()
    }
}

impl Scorer for GbdtModel {
    fn predict(&self, features: &[f64]) -> Result<Score, ScoreError> {
        if features.len() != self.feature_count {
            return Err(ScoreError::DimensionMismatch {
                expected: self.feature_count,
                actual: features.len(),
            });
        }
        if let Some(index) = features.iter().position(|v| !v.is_finite()) {
            return Err(ScoreError::NonFiniteFeature { index });
        }

        let probability = sigmoid(self.margin(features));
        let label = u8::from(probability >= self.decision_threshold);

        Ok(Score { label, probability })
    }
}

/// Logistic squash; saturates to 0.0 / 1.0 at extreme margins
fn sigmoid(margin: f64) -> f64 {
    1.0 / (1.0 + (-margin).exp())
}
