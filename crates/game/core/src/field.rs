//! Loosely-typed numeric input and its coercion rules.
//!
//! Scenario literals and CSV cells arrive as integers, reals or raw text.
//! [`NumericField`] keeps the value as supplied so that it can be echoed into
//! reports verbatim, and coerces it only when a [`crate::Character`] is built.
//!
//! Coercion rules:
//! - **Level** (`to_level`): integers pass through, reals truncate toward zero,
//!   text must be an integer literal (surrounding whitespace ignored).
//! - **Stats** (`to_real`): integers and reals convert, text must parse as a float.

use core::fmt;
use core::num::IntErrorKind;

use crate::error::FieldError;

/// A scalar input value prior to numeric coercion.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum NumericField {
    Integer(i64),
    Real(f64),
    Text(String),
}

impl NumericField {
    /// Coerce into a character level.
    pub fn to_level(&self, field: &'static str) -> Result<i32, FieldError> {
        match self {
            Self::Integer(value) => i32::try_from(*value).map_err(|_| FieldError::OutOfRange {
                field,
                value: value.to_string(),
            }),
            Self::Real(value) => {
                if !value.is_finite() {
                    return Err(FieldError::NotNumeric {
                        field,
                        value: value.to_string(),
                        reason: "not a finite number".to_string(),
                    });
                }
                let truncated = value.trunc();
                if truncated < f64::from(i32::MIN) || truncated > f64::from(i32::MAX) {
                    return Err(FieldError::OutOfRange {
                        field,
                        value: value.to_string(),
                    });
                }
                Ok(truncated as i32)
            }
            Self::Text(text) => text.trim().parse::<i32>().map_err(|e| match e.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => FieldError::OutOfRange {
                    field,
                    value: text.clone(),
                },
                _ => FieldError::NotNumeric {
                    field,
                    value: text.clone(),
                    reason: e.to_string(),
                },
            }),
        }
    }

    /// Coerce into a real-valued stat.
    pub fn to_real(&self, field: &'static str) -> Result<f64, FieldError> {
        match self {
            Self::Integer(value) => Ok(*value as f64),
            Self::Real(value) => Ok(*value),
            Self::Text(text) => text
                .trim()
                .parse::<f64>()
                .map_err(|e| FieldError::NotNumeric {
                    field,
                    value: text.clone(),
                    reason: e.to_string(),
                }),
        }
    }
}

impl fmt::Display for NumericField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Real(value) => write!(f, "{value}"),
            Self::Text(text) => write!(f, "{text:?}"),
        }
    }
}

impl From<i32> for NumericField {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<i64> for NumericField {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for NumericField {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl From<&str> for NumericField {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for NumericField {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}
