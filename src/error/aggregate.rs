//! The single error raised when a resolution collected field failures.

use super::field::FieldError;
use super::render::{DefaultRenderer, MessageRenderer};
use super::NormalizedError;
use thiserror::Error;

/// Every field failure collected during one resolution, in the order the
/// checks ran. Never empty.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("{} field(s) failed validation", .errors.len())]
pub struct AggregateValidationError {
    errors: Vec<FieldError>,
}

impl AggregateValidationError {
    /// Returns `None` when there is nothing to report.
    pub fn from_errors(errors: Vec<FieldError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self { errors })
        }
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }

    pub fn normalize(&self) -> Vec<NormalizedError> {
        self.normalize_with(&DefaultRenderer)
    }

    pub fn normalize_with(&self, renderer: &dyn MessageRenderer) -> Vec<NormalizedError> {
        self.errors
            .iter()
            .map(|e| NormalizedError::new(e.property_path().as_str(), e.render_with(renderer)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Violation;

    #[test]
    fn refuses_to_wrap_nothing() {
        assert!(AggregateValidationError::from_errors(Vec::new()).is_none());
    }

    #[test]
    fn normalize_preserves_order() {
        let error = AggregateValidationError::from_errors(vec![
            FieldError::new("email", Violation::Empty),
            FieldError::new(
                "firstName",
                Violation::LengthOutOfRange {
                    min: 1,
                    max: 50,
                    actual: 0,
                },
            ),
        ])
        .unwrap();

        let normalized = error.normalize();
        assert_eq!(error.error_count(), 2);
        assert_eq!(normalized[0].path, "email");
        assert!(normalized[0].message.ends_with("must not be empty."));
        assert_eq!(normalized[1].path, "firstName");
        assert!(normalized[1]
            .message
            .contains("length must be between 1 and 50"));
        assert_eq!(error.to_string(), "2 field(s) failed validation");
    }
}
