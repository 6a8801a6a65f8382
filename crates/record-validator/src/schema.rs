//! Declared Record Shape

/// Declared type of a wire field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Whole number; integral floats such as `35.0` are accepted
    Integer,
    /// Any JSON number
    Float,
}

impl FieldKind {
    /// Human-readable type name used in error detail
    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::Integer => "integer",
            FieldKind::Float => "number",
        }
    }
}

/// Contract for one field of the prediction request
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Wire name of the field
    pub name: &'static str,
    /// Declared type
    pub kind: FieldKind,
    /// Smallest accepted value (inclusive)
    pub min: f64,
    /// Largest accepted value (inclusive)
    pub max: f64,
}

impl FieldSpec {
    /// Declare an integer field
    pub const fn integer(name: &'static str, min: f64, max: f64) -> Self {
        Self {
            name,
            kind: FieldKind::Integer,
            min,
            max,
        }
    }

    /// Declare a float field
    pub const fn float(name: &'static str, min: f64, max: f64) -> Self {
        Self {
            name,
            kind: FieldKind::Float,
            min,
            max,
        }
    }
}

/// The record shape accepted by the prediction endpoint.
///
/// Field order here is the order issues are reported in and the order
/// `CustomerRecord` is assembled from.
pub const CUSTOMER_FIELDS: [FieldSpec; 14] = [
    FieldSpec::integer("age", 18.0, 100.0),
    FieldSpec::integer("tenure_months", 0.0, 120.0),
    FieldSpec::float("monthly_charges", 0.0, 1000.0),
    FieldSpec::float("total_charges", 0.0, f64::INFINITY),
    FieldSpec::integer("support_tickets", 0.0, 100.0),
    FieldSpec::integer("login_frequency", 0.0, 1000.0),
    FieldSpec::float("feature_usage", 0.0, 1.0),
    FieldSpec::integer("gender_encoded", 0.0, 1.0),
    FieldSpec::integer("location_encoded", 0.0, 2.0),
    FieldSpec::integer("contract_type_encoded", 0.0, 2.0),
    FieldSpec::integer("internet_service_encoded", 0.0, 2.0),
    FieldSpec::integer("payment_method_encoded", 0.0, 2.0),
    FieldSpec::integer("has_tech_support", 0.0, 1.0),
    FieldSpec::integer("has_device_protection", 0.0, 1.0),
];
