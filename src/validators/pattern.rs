//! Regular expression check.

use super::{verdict, FieldValidator};
use crate::error::Violation;
use regex::Regex;
use stillwater::validation::Validation;

/// Value must match a regular expression.
///
/// The pattern is compiled once, here, so a bad pattern is a construction
/// error rather than something discovered while validating input.
///
/// # Example
///
/// ```rust
/// use intake::validators::{FieldValidator, MatchesRegex};
///
/// let slug = MatchesRegex::new("^[a-z0-9]+$").unwrap();
///
/// assert!(slug.check(&"abc123".to_string()).is_success());
/// assert!(slug.check(&"abc!".to_string()).is_failure());
/// assert!(MatchesRegex::new("(unclosed").is_err());
/// ```
#[derive(Clone, Debug)]
pub struct MatchesRegex {
    regex: Regex,
}

impl MatchesRegex {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

impl From<Regex> for MatchesRegex {
    fn from(regex: Regex) -> Self {
        Self { regex }
    }
}

impl FieldValidator<String> for MatchesRegex {
    fn check(&self, value: &String) -> Validation<(), Violation> {
        verdict(self.regex.is_match(value), || Violation::PatternMismatch {
            value: value.clone(),
            pattern: self.pattern().to_string(),
        })
    }
}
