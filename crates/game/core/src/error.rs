//! Error types for attr-core.
//!
//! Calculation itself never fails: every error here is raised while coercing
//! loosely-typed input (scenario literals, CSV cells) into the numeric fields a
//! [`crate::Character`] is built from.
//!
//! # Design Principles
//!
//! - **Fail before calculation**: coercion happens in the constructor step
//! - **Rich Context**: errors carry the field name and the offending value
//! - **Stable codes**: [`FieldError::error_code`] is safe to match in reports and tests

/// Failure to turn an input value into the numeric type a field requires.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum FieldError {
    /// The value is not a number of the expected kind.
    ///
    /// Examples: `level = "abc"`, `level = "10.5"`, `base_attack = ""`
    #[error("invalid {field} value '{value}': {reason}")]
    NotNumeric {
        field: &'static str,
        value: String,
        reason: String,
    },

    /// The value is numeric but does not fit the field's integer range.
    #[error("{field} value {value} is out of range")]
    OutOfRange { field: &'static str, value: String },
}

impl FieldError {
    /// Name of the field that failed to coerce.
    pub fn field(&self) -> &'static str {
        match self {
            Self::NotNumeric { field, .. } | Self::OutOfRange { field, .. } => field,
        }
    }

    /// Returns a static string identifier for this error variant.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotNumeric { .. } => "FIELD_NOT_NUMERIC",
            Self::OutOfRange { .. } => "FIELD_OUT_OF_RANGE",
        }
    }
}
