//! Validated Customer Record

use serde::{Deserialize, Serialize};

/// One customer as received on the wire, after validation.
///
/// Immutable once built; dropped when the response is produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub age: u32,
    pub tenure_months: u32,
    pub monthly_charges: f64,
    pub total_charges: f64,
    pub support_tickets: u32,
    pub login_frequency: u32,
    pub feature_usage: f64,
    pub gender_encoded: u8,
    pub location_encoded: u8,
    pub contract_type_encoded: u8,
    pub internet_service_encoded: u8,
    pub payment_method_encoded: u8,
    pub has_tech_support: u8,
    pub has_device_protection: u8,
}

impl CustomerRecord {
    /// Assemble a record from values extracted in `CUSTOMER_FIELDS` order.
    pub(crate) fn from_schema_values(values: &[f64; 14]) -> Self {
        Self {
            age: values[0] as u32,
            tenure_months: values[1] as u32,
            monthly_charges: values[2],
            total_charges: values[3],
            support_tickets: values[4] as u32,
            login_frequency: values[5] as u32,
            feature_usage: values[6],
            gender_encoded: values[7] as u8,
            location_encoded: values[8] as u8,
            contract_type_encoded: values[9] as u8,
            internet_service_encoded: values[10] as u8,
            payment_method_encoded: values[11] as u8,
            has_tech_support: values[12] as u8,
            has_device_protection: values[13] as u8,
        }
    }
}
