//! Feature Vector Assembly

use serde::{Deserialize, Serialize};

/// Number of features in the vector (14 raw + 7 engineered)
pub const FEATURE_DIMENSION: usize = 21;

/// Feature names in model column order
pub const FEATURE_NAMES: [&str; FEATURE_DIMENSION] = [
    "age",
    "tenure_months",
    "monthly_charges",
    "total_charges",
    "support_tickets",
    "login_frequency",
    "feature_usage",
    "gender_encoded",
    "location_encoded",
    "contract_type_encoded",
    "internet_service_encoded",
    "payment_method_encoded",
    "charges_per_month",
    "support_per_month",
    "login_per_month",
    "is_new_customer",
    "is_high_value",
    "has_tech_support",
    "has_device_protection",
    "tenure_charges_interaction",
    "support_value_ratio",
];

/// Feature vector for model scoring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Feature values in `FEATURE_NAMES` order
    pub values: Vec<f64>,
}

impl FeatureVector {
    /// Values as a slice for the scoring backend
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Look up a single feature by name
    pub fn get(&self, name: &str) -> Option<f64> {
        let index = FEATURE_NAMES.iter().position(|n| *n == name)?;
        self.values.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_match_dimension() {
        assert_eq!(FEATURE_NAMES.len(), FEATURE_DIMENSION);
    }

    #[test]
    fn test_lookup_by_name() {
        let vector = FeatureVector {
            values: (0..FEATURE_DIMENSION).map(|i| i as f64).collect(),
        };
        assert_eq!(vector.get("age"), Some(0.0));
        assert_eq!(vector.get("charges_per_month"), Some(12.0));
        assert_eq!(vector.get("support_value_ratio"), Some(20.0));
        assert_eq!(vector.get("no_such_feature"), None);
    }

    #[test]
    fn test_artifact_column_order() {
        // Trained artifacts index their splits against this exact layout.
        assert_eq!(FEATURE_NAMES[11], "payment_method_encoded");
        assert_eq!(FEATURE_NAMES[12], "charges_per_month");
        assert_eq!(FEATURE_NAMES[13], "support_per_month");
        assert_eq!(FEATURE_NAMES[14], "login_per_month");
        assert_eq!(FEATURE_NAMES[15], "is_new_customer");
        assert_eq!(FEATURE_NAMES[16], "is_high_value");
        assert_eq!(FEATURE_NAMES[17], "has_tech_support");
        assert_eq!(FEATURE_NAMES[18], "has_device_protection");
        assert_eq!(FEATURE_NAMES[19], "tenure_charges_interaction");
        assert_eq!(FEATURE_NAMES[20], "support_value_ratio");
    }
}
