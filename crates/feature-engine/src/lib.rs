//! Feature Engineering Engine
//!
//! Derives the model's engineered feature vector from validated customer
//! records.

mod deriver;
mod features;

pub use deriver::{FeatureDeriver, HIGH_VALUE_MONTHLY_CHARGES, NEW_CUSTOMER_MONTHS};
pub use features::{FeatureVector, FEATURE_DIMENSION, FEATURE_NAMES};
