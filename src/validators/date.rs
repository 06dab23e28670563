//! Date format check.

use super::{verdict, FieldValidator};
use crate::error::Violation;
use chrono::{NaiveDate, NaiveDateTime};
use stillwater::validation::Validation;

/// Value must parse with a chrono format string, as a date or a date-time.
///
/// # Example
///
/// ```rust
/// use intake::validators::{FieldValidator, MatchesDateFormat};
///
/// let birthday = MatchesDateFormat::new("%Y-%m-%d");
///
/// assert!(birthday.check(&"1942-01-08".to_string()).is_success());
/// assert!(birthday.check(&"08/01/1942".to_string()).is_failure());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchesDateFormat {
    format: String,
}

impl MatchesDateFormat {
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
        }
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    fn parses(&self, value: &str) -> bool {
        NaiveDateTime::parse_from_str(value, &self.format).is_ok()
            || NaiveDate::parse_from_str(value, &self.format).is_ok()
    }
}

impl FieldValidator<String> for MatchesDateFormat {
    fn check(&self, value: &String) -> Validation<(), Violation> {
        verdict(self.parses(value), || Violation::InvalidDate {
            value: value.clone(),
            format: self.format.clone(),
        })
    }
}
