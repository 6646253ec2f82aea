//! Validation error types for measurement input.

use std::fmt;

use thiserror::Error;

/// One of the four measured quantities of a package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Width in centimeters
    Width,
    /// Height in centimeters
    Height,
    /// Length in centimeters
    Length,
    /// Mass in kilograms
    Mass,
}

impl Field {
    /// All fields in positional order.
    pub const ALL: [Field; 4] = [Field::Width, Field::Height, Field::Length, Field::Mass];

    /// Lowercase field name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Width => "width",
            Field::Height => "height",
            Field::Length => "length",
            Field::Mass => "mass",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised when a raw input cannot become part of a [`Measurement`].
///
/// Every variant names the offending [`Field`] so callers can surface an
/// actionable message.
///
/// [`Measurement`]: super::Measurement
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// No value was supplied (null, `None`, or absent).
    #[error("invalid input: {field} is missing")]
    Missing {
        /// The field that was missing
        field: Field,
    },

    /// The value is not a number or numeric text (boolean, array, object).
    #[error("invalid input: {field} must be a number, got {kind}")]
    NotNumeric {
        /// The field that was rejected
        field: Field,
        /// Kind of value that was supplied
        kind: &'static str,
    },

    /// Text that does not parse as a number.
    #[error("invalid input: {field} is not a valid number: {text:?}")]
    Unparseable {
        /// The field that was rejected
        field: Field,
        /// The original text
        text: String,
    },

    /// NaN or an infinity.
    #[error("invalid input: {field} must be finite, got {value}")]
    NotFinite {
        /// The field that was rejected
        field: Field,
        /// The offending value
        value: f64,
    },

    /// Zero or a negative number.
    #[error("invalid input: {field} must be greater than zero, got {value}")]
    NotPositive {
        /// The field that was rejected
        field: Field,
        /// The offending value
        value: f64,
    },
}

impl ValidationError {
    /// The field that failed validation.
    pub fn field(&self) -> Field {
        match self {
            ValidationError::Missing { field }
            | ValidationError::NotNumeric { field, .. }
            | ValidationError::Unparseable { field, .. }
            | ValidationError::NotFinite { field, .. }
            | ValidationError::NotPositive { field, .. } => *field,
        }
    }

    /// Error kind shared by every variant.
    pub fn kind(&self) -> &'static str {
        "invalid input"
    }
}
