//! Source-specific lookup and type assertion of raw values.

use crate::core::{json_type_name, InputSource, RawInput};
use crate::error::{ValueKind, Violation};
use serde_json::Value;
use std::fmt::Debug;
use stillwater::validation::Validation;

/// Pulls a value out of one location of the input and asserts its type.
///
/// `locate` returning `None` means the key is structurally missing. The
/// `assert_*` methods perform the cheap type check that turns a raw value
/// into a typed one; their failures are recorded like any other field
/// failure. The provided implementations accept only the matching JSON
/// type; sources whose values arrive as text override them.
pub trait ValueAsserter: Debug + Send + Sync {
    fn source(&self) -> InputSource;

    fn locate<'a>(&self, input: &'a RawInput, key: &str) -> Option<&'a Value>;

    fn assert_string(&self, value: &Value) -> Validation<String, Violation> {
        match value {
            Value::String(s) => Validation::Success(s.clone()),
            other => mismatch(ValueKind::String, other),
        }
    }

    fn assert_integer(&self, value: &Value) -> Validation<i64, Violation> {
        match value.as_i64() {
            Some(n) => Validation::Success(n),
            None => mismatch(ValueKind::Integer, value),
        }
    }

    fn assert_float(&self, value: &Value) -> Validation<f64, Violation> {
        match value.as_f64() {
            Some(n) => Validation::Success(n),
            None => mismatch(ValueKind::Float, value),
        }
    }

    fn assert_boolean(&self, value: &Value) -> Validation<bool, Violation> {
        match value.as_bool() {
            Some(b) => Validation::Success(b),
            None => mismatch(ValueKind::Boolean, value),
        }
    }

    fn assert_array(&self, value: &Value) -> Validation<Vec<Value>, Violation> {
        match value {
            Value::Array(items) => Validation::Success(items.clone()),
            other => mismatch(ValueKind::Array, other),
        }
    }
}

fn mismatch<T>(expected: ValueKind, found: &Value) -> Validation<T, Violation> {
    Validation::Failure(Violation::unexpected_type(expected, json_type_name(found)))
}

/// Reads keys straight off the top level of the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlatRecordAsserter {
    source: InputSource,
}

impl FlatRecordAsserter {
    pub fn new(source: InputSource) -> Self {
        Self { source }
    }
}

impl ValueAsserter for FlatRecordAsserter {
    fn source(&self) -> InputSource {
        self.source
    }

    fn locate<'a>(&self, input: &'a RawInput, key: &str) -> Option<&'a Value> {
        input.get(key)
    }
}

/// Reads keys from a nested object, e.g. `input["attributes"][key]`.
///
/// A missing or non-object section makes every key missing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionAsserter {
    source: InputSource,
    section: String,
}

impl SectionAsserter {
    pub fn new(source: InputSource, section: impl Into<String>) -> Self {
        Self {
            source,
            section: section.into(),
        }
    }

    /// Section named after the source itself (`"body"`, `"attributes"`, `"query"`).
    pub fn named_after(source: InputSource) -> Self {
        Self::new(source, source.name())
    }
}

impl ValueAsserter for SectionAsserter {
    fn source(&self) -> InputSource {
        self.source
    }

    fn locate<'a>(&self, input: &'a RawInput, key: &str) -> Option<&'a Value> {
        input.section(&self.section).and_then(|s| s.get(key))
    }
}

/// Query-string values: everything arrives as text, so numbers and
/// booleans are also accepted in their textual form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryAsserter {
    section: Option<String>,
}

impl QueryAsserter {
    /// Look keys up at the top level of the input.
    pub fn new() -> Self {
        Self { section: None }
    }

    /// Look keys up inside a nested object.
    pub fn in_section(section: impl Into<String>) -> Self {
        Self {
            section: Some(section.into()),
        }
    }
}

impl Default for QueryAsserter {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueAsserter for QueryAsserter {
    fn source(&self) -> InputSource {
        InputSource::Query
    }

    fn locate<'a>(&self, input: &'a RawInput, key: &str) -> Option<&'a Value> {
        match &self.section {
            Some(section) => input.section(section).and_then(|s| s.get(key)),
            None => input.get(key),
        }
    }

    fn assert_integer(&self, value: &Value) -> Validation<i64, Violation> {
        match value {
            Value::String(text) => match text.trim().parse() {
                Ok(n) => Validation::Success(n),
                Err(_) => mismatch(ValueKind::Integer, value),
            },
            other => FlatRecordAsserter::new(InputSource::Query).assert_integer(other),
        }
    }

    fn assert_float(&self, value: &Value) -> Validation<f64, Violation> {
        match value {
            Value::String(text) => match text.trim().parse::<f64>() {
                Ok(n) if n.is_finite() => Validation::Success(n),
                _ => mismatch(ValueKind::Float, value),
            },
            other => FlatRecordAsserter::new(InputSource::Query).assert_float(other),
        }
    }

    fn assert_boolean(&self, value: &Value) -> Validation<bool, Violation> {
        match value {
            Value::String(text) => match text.trim() {
                "true" | "1" => Validation::Success(true),
                "false" | "0" => Validation::Success(false),
                _ => mismatch(ValueKind::Boolean, value),
            },
            other => FlatRecordAsserter::new(InputSource::Query).assert_boolean(other),
        }
    }
}
