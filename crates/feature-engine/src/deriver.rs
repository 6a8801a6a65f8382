//! Feature Derivation

use record_validator::CustomerRecord;

use crate::features::{FeatureVector, FEATURE_DIMENSION};

/// Tenure below which an account counts as new
pub const NEW_CUSTOMER_MONTHS: u32 = 6;

/// Monthly charge at or above which an account counts as high value
pub const HIGH_VALUE_MONTHLY_CHARGES: f64 = 80.0;

/// Derives the engineered feature vector from a validated record.
///
/// Total and pure: every valid record maps to exactly one vector, with no
/// failure path and no side effects.
#[derive(Debug, Default)]
pub struct FeatureDeriver;

impl FeatureDeriver {
    /// Create a new deriver
    pub fn new() -> Self {
        Self
    }

    /// Derive the feature vector for one record.
    ///
    /// Zero-tenure accounts are treated as one month old, so the per-month
    /// rates equal the raw totals instead of dividing by zero. The same
    /// one-unit floor guards `support_value_ratio` when monthly charges
    /// are zero.
    pub fn derive(&self, record: &CustomerRecord) -> FeatureVector {
        let tenure = f64::from(record.tenure_months);
        let tickets = f64::from(record.support_tickets);
        let logins = f64::from(record.login_frequency);
        let months = tenure.max(1.0);
        let charges_floor = record.monthly_charges.max(1.0);

        let mut values = Vec::with_capacity(FEATURE_DIMENSION);
        values.push(f64::from(record.age));
        values.push(tenure);
        values.push(record.monthly_charges);
        values.push(record.total_charges);
        values.push(tickets);
        values.push(logins);
        values.push(record.feature_usage);
        values.push(f64::from(record.gender_encoded));
        values.push(f64::from(record.location_encoded));
        values.push(f64::from(record.contract_type_encoded));
        values.push(f64::from(record.internet_service_encoded));
        values.push(f64::from(record.payment_method_encoded));
        values.push(record.total_charges / months);
        values.push(tickets / months);
        values.push(logins / months);
        values.push(if record.tenure_months < NEW_CUSTOMER_MONTHS {
            1.0
        } else {
            0.0
        });
        values.push(if record.monthly_charges >= HIGH_VALUE_MONTHLY_CHARGES {
            1.0
        } else {
            0.0
        });
        values.push(f64::from(record.has_tech_support));
        values.push(f64::from(record.has_device_protection));
        values.push(tenure * record.monthly_charges);
        values.push(tickets / charges_floor);

        FeatureVector { values }
    }
}
