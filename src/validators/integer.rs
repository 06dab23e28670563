//! Integer check over raw values.

use super::{verdict, FieldValidator};
use crate::core::json_type_name;
use crate::error::{ValueKind, Violation};
use serde_json::Value;
use stillwater::validation::Validation;

/// Raw value must be a JSON integer. Numeric strings and floats with a zero
/// fraction are rejected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IsInteger;

impl FieldValidator<Value> for IsInteger {
    fn check(&self, value: &Value) -> Validation<(), Violation> {
        verdict(value.is_i64() || value.is_u64(), || {
            Violation::unexpected_type(ValueKind::Integer, json_type_name(value))
        })
    }
}
