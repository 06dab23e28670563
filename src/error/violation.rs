//! Violation kinds and their structured parameters.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Typed shape a raw value was asserted to have.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    String,
    Integer,
    Float,
    Boolean,
    Array,
}

impl ValueKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Boolean => "boolean",
            Self::Array => "array",
        }
    }

    /// Name with its indefinite article, for messages.
    pub fn described(&self) -> &'static str {
        match self {
            Self::String => "a string",
            Self::Integer => "an integer",
            Self::Float => "a float",
            Self::Boolean => "a boolean",
            Self::Array => "an array",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a failed check found wrong, with the parameters it checked against.
///
/// A violation knows nothing about the field it belongs to; the engine pairs
/// it with a [`PropertyPath`](crate::core::PropertyPath) when recording a
/// [`FieldError`](super::FieldError). The `Display` text is a short,
/// path-free form meant for logs. User-facing text comes from a
/// [`MessageRenderer`](super::MessageRenderer).
#[derive(Debug, Clone, Error, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    #[error("value is empty")]
    Empty,

    #[error("length {actual} outside [{min}, {max}]")]
    LengthOutOfRange {
        min: usize,
        max: usize,
        actual: usize,
    },

    #[error("\"{value}\" does not match /{pattern}/")]
    PatternMismatch { value: String, pattern: String },

    #[error("\"{value}\" is not an email address")]
    InvalidEmail { value: String },

    #[error("email domain \"{domain}\" does not resolve")]
    UnresolvableEmailDomain { value: String, domain: String },

    #[error("\"{value}\" is not a UUID")]
    InvalidUuid { value: String },

    #[error("expected {expected}, found {found}")]
    UnexpectedType {
        expected: ValueKind,
        found: String,
    },

    #[error("\"{value}\" does not match date format \"{format}\"")]
    InvalidDate { value: String, format: String },

    #[error("{message}")]
    Custom { code: String, message: String },
}

impl Violation {
    pub fn unexpected_type(expected: ValueKind, found: impl Into<String>) -> Self {
        Self::UnexpectedType {
            expected,
            found: found.into(),
        }
    }

    pub fn custom(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Custom {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Stable machine-readable code for this kind of violation.
    pub fn code(&self) -> &str {
        match self {
            Self::Empty => "empty",
            Self::LengthOutOfRange { .. } => "length_out_of_range",
            Self::PatternMismatch { .. } => "pattern_mismatch",
            Self::InvalidEmail { .. } => "invalid_email",
            Self::UnresolvableEmailDomain { .. } => "unresolvable_email_domain",
            Self::InvalidUuid { .. } => "invalid_uuid",
            Self::UnexpectedType { expected, .. } => match expected {
                ValueKind::String => "not_string",
                ValueKind::Integer => "not_integer",
                ValueKind::Float => "not_float",
                ValueKind::Boolean => "not_boolean",
                ValueKind::Array => "not_array",
            },
            Self::InvalidDate { .. } => "invalid_date",
            Self::Custom { code, .. } => code,
        }
    }
}
