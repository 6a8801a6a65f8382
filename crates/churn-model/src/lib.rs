//! Churn Model Artifact and Scoring
//!
//! Loads an immutable boosted-tree artifact from disk and scores feature
//! vectors against it. The `Scorer` trait is the narrow seam the serving
//! layer depends on, keeping the backing model format swappable.

mod error;
mod model;
mod risk;
mod tree;

pub use error::{ArtifactError, ScoreError};
pub use model::{GbdtModel, Score, Scorer, FORMAT_VERSION};
pub use risk::{RiskLevel, RiskThresholds};
pub use tree::{Node, Tree};
