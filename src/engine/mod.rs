//! Validation engine.
//!
//! The engine runs checks against one resolution attempt and records their
//! failures in a [`ValidationSession`] instead of returning them, so every
//! check scheduled for a resolution runs even after earlier ones failed.
//!
//! The engine itself is stateless. The session is passed in explicitly by
//! `&mut` and consumed by the guard, which turns "anything recorded" into a
//! single [`AggregateValidationError`].
//!
//! # Example
//!
//! ```rust
//! use intake::core::PropertyPath;
//! use intake::engine::{ValidationEngine, ValidationSession};
//! use intake::validators::{LengthBetween, NotEmpty};
//!
//! let engine = ValidationEngine::new();
//! let mut session = ValidationSession::new();
//! let path = PropertyPath::new("firstName");
//!
//! let name = engine.validate(&mut session, &path, String::new(), &NotEmpty, None);
//! let name = engine.validate(&mut session, &path, name, &LengthBetween::new(1, 50), None);
//!
//! assert_eq!(name, "");
//! assert_eq!(session.error_count(), 2);
//! assert!(engine.guard_against_any_validation_error(session).is_err());
//! ```

mod session;

pub use session::ValidationSession;

use crate::core::PropertyPath;
use crate::error::{AggregateValidationError, FieldError, Violation};
use crate::validators::FieldValidator;
use stillwater::validation::Validation;
use tracing::debug;

/// Runs checks and routes their failures into a session.
#[derive(Clone, Copy, Debug, Default)]
pub struct ValidationEngine;

impl ValidationEngine {
    pub fn new() -> Self {
        Self
    }

    /// Run `check`, recording its failure instead of returning it.
    ///
    /// Returns the checked value on success and `None` on failure.
    pub fn validate_field_value<T, F>(&self, session: &mut ValidationSession, check: F) -> Option<T>
    where
        F: FnOnce() -> Validation<T, FieldError>,
    {
        session.note_check();
        match check() {
            Validation::Success(value) => Some(value),
            Validation::Failure(error) => {
                debug!(
                    path = %error.property_path(),
                    code = error.code(),
                    "field validation failed"
                );
                session.record(error);
                None
            }
        }
    }

    /// Like [`validate_field_value`](Self::validate_field_value) for checks
    /// that can also fail for reasons unrelated to the input.
    ///
    /// Such an error is returned unchanged and nothing is recorded.
    pub fn try_validate_field_value<T, E, F>(
        &self,
        session: &mut ValidationSession,
        check: F,
    ) -> Result<Option<T>, E>
    where
        F: FnOnce() -> Result<Validation<T, FieldError>, E>,
    {
        let outcome = check()?;
        Ok(self.validate_field_value(session, || outcome))
    }

    /// Validate-and-assign: run `validator` on `value` and hand the value back.
    ///
    /// The value comes back normalized by the validator whether or not the
    /// check passed; a failure is recorded under `path`, using `message`
    /// instead of the rendered template when given.
    pub fn validate<T, V>(
        &self,
        session: &mut ValidationSession,
        path: &PropertyPath,
        value: T,
        validator: &V,
        message: Option<&str>,
    ) -> T
    where
        V: FieldValidator<T> + ?Sized,
    {
        let value = validator.normalize(value);
        self.validate_field_value(session, || {
            at_path(validator.check(&value), path, message)
        });
        value
    }

    /// Close the session: fail with every recorded error, or pass if none.
    pub fn guard_against_any_validation_error(
        &self,
        session: ValidationSession,
    ) -> Result<(), AggregateValidationError> {
        let checks_run = session.checks_run();
        match AggregateValidationError::from_errors(session.into_errors()) {
            Some(error) => {
                debug!(
                    errors = error.error_count(),
                    checks_run, "validation session closed with errors"
                );
                Err(error)
            }
            None => Ok(()),
        }
    }
}

/// Attach `path` (and an optional fixed message) to a check's violation.
pub(crate) fn at_path<T>(
    outcome: Validation<T, Violation>,
    path: &PropertyPath,
    message: Option<&str>,
) -> Validation<T, FieldError> {
    match outcome {
        Validation::Success(value) => Validation::Success(value),
        Validation::Failure(violation) => {
            let error = FieldError::new(path.clone(), violation);
            Validation::Failure(match message {
                Some(message) => error.with_message(message),
                None => error,
            })
        }
    }
}
