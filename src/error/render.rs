//! Rendering violations into user-facing messages.

use super::violation::Violation;
use crate::core::{InputSource, PropertyPath};

/// Turns structured errors into text.
///
/// Validation logic never formats messages itself, so presentation can be
/// swapped by passing a different renderer to `normalize_with`.
pub trait MessageRenderer: Send + Sync {
    /// Message for a violation recorded against `path`.
    fn render(&self, path: &PropertyPath, violation: &Violation) -> String;

    /// Message for a key missing from the input.
    fn missing_key(&self, key: &str, _source: InputSource) -> String {
        format!("mapping does not contain an element with key \"{key}\"")
    }
}

/// Plain English templates parameterized by path and check parameters.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultRenderer;

impl MessageRenderer for DefaultRenderer {
    fn render(&self, path: &PropertyPath, violation: &Violation) -> String {
        match violation {
            Violation::Empty => format!("Value for \"{path}\" must not be empty."),
            Violation::LengthOutOfRange { min, max, actual } => format!(
                "Value for \"{path}\" length must be between {min} and {max}, {actual} given."
            ),
            Violation::PatternMismatch { value, pattern } => {
                format!("Value \"{value}\" not valid against regex \"{pattern}\".")
            }
            Violation::InvalidEmail { value } => {
                format!("Value \"{value}\" for \"{path}\" is not a valid email address.")
            }
            Violation::UnresolvableEmailDomain { domain, .. } => {
                format!("Email domain \"{domain}\" for \"{path}\" does not exist.")
            }
            Violation::InvalidUuid { value } => {
                format!("Value \"{value}\" for \"{path}\" is not a valid UUID.")
            }
            Violation::UnexpectedType { expected, found } => format!(
                "Value for \"{path}\" must be {}, {found} given.",
                expected.described()
            ),
            Violation::InvalidDate { value, format } => format!(
                "Value \"{value}\" for \"{path}\" does not match date format \"{format}\"."
            ),
            Violation::Custom { message, .. } => message.clone(),
        }
    }
}
