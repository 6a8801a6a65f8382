//! Customer Record Validation
//!
//! Checks inbound prediction payloads against a statically declared record
//! shape before anything downstream touches them.

mod error;
mod record;
mod schema;
mod validator;

pub use error::{FieldIssue, ValidationError};
pub use record::CustomerRecord;
pub use schema::{FieldKind, FieldSpec, CUSTOMER_FIELDS};
pub use validator::RecordValidator;
