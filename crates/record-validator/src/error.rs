//! Validation Error Types

use thiserror::Error;

/// A single problem with one field of the request payload
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldIssue {
    /// Required field absent from the payload
    #[error("required field is missing")]
    Missing { field: &'static str },

    /// Field present but not of the declared type
    #[error("expected {expected}, got {actual}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
        actual: &'static str,
    },

    /// Value out of allowed range
    #[error("value {value} is out of range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Payload is not a JSON object at all
    #[error("request body must be a JSON object")]
    NotAnObject,
}

impl FieldIssue {
    /// Name of the offending field
    pub fn field(&self) -> &'static str {
        match self {
            FieldIssue::Missing { field } => field,
            FieldIssue::WrongType { field, .. } => field,
            FieldIssue::OutOfRange { field, .. } => field,
            FieldIssue::NotAnObject => "payload",
        }
    }
}

/// Validation failure carrying every offending field, in schema order
#[derive(Debug, Clone, PartialEq, Error)]
#[error("record failed validation with {} issue(s)", .issues.len())]
pub struct ValidationError {
    pub issues: Vec<FieldIssue>,
}

impl ValidationError {
    /// Create an error from collected field issues
    pub fn new(issues: Vec<FieldIssue>) -> Self {
        Self { issues }
    }

    /// Create an error with a single issue
    pub fn single(issue: FieldIssue) -> Self {
        Self {
            issues: vec![issue],
        }
    }

    /// Whether a given field is among the offenders
    pub fn names_field(&self, field: &str) -> bool {
        self.issues.iter().any(|issue| issue.field() == field)
    }
}
