//! Record Validator

use serde_json::{Map, Value};

use crate::error::{FieldIssue, ValidationError};
use crate::record::CustomerRecord;
use crate::schema::{FieldKind, FieldSpec, CUSTOMER_FIELDS};

/// Validates raw JSON payloads against the declared record shape.
///
/// Collects every offending field before failing, so a client sees the
/// whole list of problems at once. Unknown extra fields are ignored.
#[derive(Debug, Default)]
pub struct RecordValidator;

impl RecordValidator {
    /// Create a new validator
    pub fn new() -> Self {
        Self
    }

    /// Validate a payload and build the customer record from it.
    ///
    /// Nothing downstream runs on invalid input; this is the only place a
    /// `CustomerRecord` is constructed from the wire.
    pub fn validate(&self, payload: &Value) -> Result<CustomerRecord, ValidationError> {
        let Some(map) = payload.as_object() else {
            return Err(ValidationError::single(FieldIssue::NotAnObject));
        };

        let mut issues = Vec::new();
        let mut values = [0.0f64; CUSTOMER_FIELDS.len()];

        for (slot, spec) in values.iter_mut().zip(CUSTOMER_FIELDS.iter()) {
            match check_field(map, spec) {
                Ok(value) => *slot = value,
                Err(issue) => issues.push(issue),
            }
        }

        if !issues.is_empty() {
            return Err(ValidationError::new(issues));
        }

        Ok(CustomerRecord::from_schema_values(&values))
    }
}

/// Check one field against its spec, returning the numeric value
fn check_field(map: &Map<String, Value>, spec: &FieldSpec) -> Result<f64, FieldIssue> {
    let raw = map
        .get(spec.name)
        .ok_or(FieldIssue::Missing { field: spec.name })?;

    let value = match spec.kind {
        FieldKind::Integer => match raw.as_i64() {
            Some(whole) => Some(whole as f64),
            // Integral floats like 35.0 pass; 35.5 does not.
            None => raw.as_f64().filter(|v| v.fract() == 0.0),
        },
        FieldKind::Float => raw.as_f64(),
    };

    let Some(value) = value else {
        return Err(FieldIssue::WrongType {
            field: spec.name,
            expected: spec.kind.name(),
            actual: json_type_name(raw),
        });
    };

    if value < spec.min || value > spec.max {
        return Err(FieldIssue::OutOfRange {
            field: spec.name,
            value,
            min: spec.min,
            max: spec.max,
        });
    }

    Ok(value)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
