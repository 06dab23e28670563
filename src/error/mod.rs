//! Error model.
//!
//! Two kinds of error ever reach a resolver's caller:
//!
//! - [`StructuralMappingError`]: a required key is missing. Raised at once.
//! - [`AggregateValidationError`]: one or more values failed their checks.
//!   Raised once, after every field has been checked.
//!
//! Both normalize to an ordered list of [`NormalizedError`] records that
//! callers map onto their own wire format.

mod aggregate;
mod field;
mod mapping;
mod render;
mod violation;

pub use aggregate::AggregateValidationError;
pub use field::FieldError;
pub use mapping::StructuralMappingError;
pub use render::{DefaultRenderer, MessageRenderer};
pub use violation::{ValueKind, Violation};

use crate::core::ROOT;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Transport-agnostic `{path, message}` record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedError {
    pub path: String,
    pub message: String,
}

impl NormalizedError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Outcome of a failed resolution.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ResolveError {
    #[error(transparent)]
    Mapping(#[from] StructuralMappingError),

    #[error(transparent)]
    Validation(#[from] AggregateValidationError),

    /// The resolver could not build its command although nothing was
    /// recorded against the input. Always a resolver bug.
    #[error("Resolver for {command} built no command without recording a violation")]
    Incomplete { command: &'static str },
}

impl ResolveError {
    pub fn normalize(&self) -> Vec<NormalizedError> {
        self.normalize_with(&DefaultRenderer)
    }

    pub fn normalize_with(&self, renderer: &dyn MessageRenderer) -> Vec<NormalizedError> {
        match self {
            Self::Mapping(e) => e.normalize_with(renderer),
            Self::Validation(e) => e.normalize_with(renderer),
            Self::Incomplete { .. } => vec![NormalizedError::new(ROOT, self.to_string())],
        }
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, Self::Mapping(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::InputSource;

    #[test]
    fn resolve_error_forwards_normalization() {
        let error: ResolveError =
            StructuralMappingError::missing_key("email", InputSource::Body).into();

        assert!(error.is_mapping());
        assert_eq!(
            error.normalize(),
            vec![NormalizedError::new(
                "root",
                "mapping does not contain an element with key \"email\""
            )]
        );
    }

    #[test]
    fn incomplete_resolution_reports_at_root() {
        let error = ResolveError::Incomplete {
            command: "RegisterUserCommand",
        };

        let normalized = error.normalize();
        assert_eq!(normalized.len(), 1);
        assert_eq!(normalized[0].path, "root");
        assert!(normalized[0].message.contains("RegisterUserCommand"));
    }
}
