//! # Validation Errors
//!
//! Structured validation failures for declaration input. The offending
//! field names are carried on the error so callers can surface them.

use thiserror::Error;

/// Validation failure for a gift declaration submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// One or more required fields are absent or blank.
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    /// A field is present but carries an unusable value.
    #[error("invalid field {field}: {reason}")]
    InvalidField { field: String, reason: String },
}

impl ValidationError {
    /// The names of the fields this error concerns.
    pub fn fields(&self) -> Vec<&str> {
        match self {
            Self::MissingFields(fields) => fields.iter().map(String::as_str).collect(),
            Self::InvalidField { field, .. } => vec![field.as_str()],
        }
    }
}
