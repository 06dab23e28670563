//! Raw, untrusted input records.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;

/// Location inside a request that an asserter pulls values from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputSource {
    /// Parsed request body
    Body,
    /// Routing attributes (path parameters and the like)
    Attributes,
    /// Query string parameters
    Query,
}

impl InputSource {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Attributes => "attributes",
            Self::Query => "query",
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors raised while building a [`RawInput`].
#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("Raw input must be a JSON object, got {found}")]
    NotAnObject { found: &'static str },
}

/// Untyped mapping from field name to value, as produced by whatever parsed
/// the request.
///
/// `RawInput` is never validated on its own: resolvers read from it through
/// asserters and report what they find.
///
/// # Example
///
/// ```rust
/// use intake::core::RawInput;
/// use serde_json::json;
///
/// let input = RawInput::from_value(json!({ "firstName": "Stephen" })).unwrap();
/// assert!(input.contains_key("firstName"));
/// assert!(!input.contains_key("lastName"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawInput {
    fields: Map<String, Value>,
}

impl RawInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a JSON value, which must be an object.
    pub fn from_value(value: Value) -> Result<Self, InputError> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(InputError::NotAnObject {
                found: json_type_name(&other),
            }),
        }
    }

    /// Return a copy with `key` set to `value`.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Look up a nested object stored under `section`.
    pub fn section(&self, section: &str) -> Option<&Map<String, Value>> {
        self.fields.get(section).and_then(Value::as_object)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

impl From<Map<String, Value>> for RawInput {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for RawInput {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl TryFrom<Value> for RawInput {
    type Error = InputError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

/// JSON type name used in messages.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "float",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
