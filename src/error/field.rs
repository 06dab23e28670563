//! A single recorded field failure.

use super::render::{DefaultRenderer, MessageRenderer};
use super::violation::Violation;
use crate::core::PropertyPath;
use std::fmt;

/// One failed check, recorded against the field it was run on.
///
/// The message is rendered on demand from the violation unless the caller
/// supplied one when scheduling the check.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldError {
    property_path: PropertyPath,
    violation: Violation,
    message: Option<String>,
}

impl FieldError {
    pub fn new(property_path: impl Into<PropertyPath>, violation: Violation) -> Self {
        Self {
            property_path: property_path.into(),
            violation,
            message: None,
        }
    }

    /// Replace the rendered message with a fixed one.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn property_path(&self) -> &PropertyPath {
        &self.property_path
    }

    pub fn violation(&self) -> &Violation {
        &self.violation
    }

    pub fn code(&self) -> &str {
        self.violation.code()
    }

    /// Message rendered with [`DefaultRenderer`].
    pub fn message(&self) -> String {
        self.render_with(&DefaultRenderer)
    }

    /// Message rendered with `renderer`; a caller-supplied message wins.
    pub fn render_with(&self, renderer: &dyn MessageRenderer) -> String {
        match &self.message {
            Some(message) => message.clone(),
            None => renderer.render(&self.property_path, &self.violation),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.property_path, self.message())
    }
}

impl std::error::Error for FieldError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caller_message_overrides_template() {
        let error = FieldError::new("email", Violation::Empty).with_message("Email is required");

        assert_eq!(error.message(), "Email is required");
        assert_eq!(error.code(), "empty");
    }

    #[test]
    fn template_message_mentions_path() {
        let error = FieldError::new("lastName", Violation::Empty);

        assert_eq!(error.message(), "Value for \"lastName\" must not be empty.");
        assert_eq!(
            error.to_string(),
            "lastName: Value for \"lastName\" must not be empty."
        );
    }
}
