//! String and collection size checks.

use super::{verdict, FieldValidator};
use crate::core::json_type_name;
use crate::error::{ValueKind, Violation};
use serde_json::Value;
use stillwater::validation::Validation;

/// Length must fall within `[min, max]`, inclusive.
///
/// Strings are measured in characters, arrays in items.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LengthBetween {
    min: usize,
    max: usize,
}

impl LengthBetween {
    pub fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    fn check_len(&self, actual: usize) -> Validation<(), Violation> {
        verdict((self.min..=self.max).contains(&actual), || {
            Violation::LengthOutOfRange {
                min: self.min,
                max: self.max,
                actual,
            }
        })
    }
}

impl FieldValidator<String> for LengthBetween {
    fn check(&self, value: &String) -> Validation<(), Violation> {
        self.check_len(value.chars().count())
    }
}

impl FieldValidator<Vec<Value>> for LengthBetween {
    fn check(&self, value: &Vec<Value>) -> Validation<(), Violation> {
        self.check_len(value.len())
    }
}

/// Value must not be empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NotEmpty;

impl FieldValidator<String> for NotEmpty {
    fn check(&self, value: &String) -> Validation<(), Violation> {
        verdict(!value.is_empty(), || Violation::Empty)
    }
}

impl FieldValidator<Vec<Value>> for NotEmpty {
    fn check(&self, value: &Vec<Value>) -> Validation<(), Violation> {
        verdict(!value.is_empty(), || Violation::Empty)
    }
}

/// Strips surrounding whitespace. Never fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Trim;

impl FieldValidator<String> for Trim {
    fn check(&self, _value: &String) -> Validation<(), Violation> {
        Validation::Success(())
    }

    fn normalize(&self, value: String) -> String {
        let trimmed = value.trim();
        if trimmed.len() == value.len() {
            value
        } else {
            trimmed.to_string()
        }
    }
}

/// Raw value must be a JSON string.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IsString;

impl FieldValidator<Value> for IsString {
    fn check(&self, value: &Value) -> Validation<(), Violation> {
        verdict(value.is_string(), || {
            Violation::unexpected_type(ValueKind::String, json_type_name(value))
        })
    }
}
