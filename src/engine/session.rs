//! Per-resolution accumulator of field errors.

use crate::error::FieldError;

/// Ordered, append-only record of the failures found during one resolution.
///
/// A session is created for exactly one resolve call and consumed by
/// [`ValidationEngine::guard_against_any_validation_error`](super::ValidationEngine::guard_against_any_validation_error).
/// Sessions are not `Clone`, so nothing recorded in one resolution can reach
/// another.
#[derive(Debug, Default)]
pub struct ValidationSession {
    errors: Vec<FieldError>,
    checks_run: usize,
}

impl ValidationSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn note_check(&mut self) {
        self.checks_run += 1;
    }

    pub(crate) fn record(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    /// Errors recorded so far, in the order the checks ran.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Number of checks attempted, passed or failed.
    pub fn checks_run(&self) -> usize {
        self.checks_run
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    pub(crate) fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }
}
