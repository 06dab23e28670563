//! Array check over raw values.

use super::{verdict, FieldValidator};
use crate::core::json_type_name;
use crate::error::{ValueKind, Violation};
use serde_json::Value;
use stillwater::validation::Validation;

/// Raw value must be a JSON array. Objects are not array-like.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IsArray;

impl FieldValidator<Value> for IsArray {
    fn check(&self, value: &Value) -> Validation<(), Violation> {
        verdict(value.is_array(), || {
            Violation::unexpected_type(ValueKind::Array, json_type_name(value))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn arrays_pass_including_empty_ones() {
        assert!(IsArray.check(&json!([])).is_success());
        assert!(IsArray.check(&json!([1, "two"])).is_success());
    }

    #[test]
    fn objects_and_scalars_fail() {
        match IsArray.check(&json!({ "0": "a" })) {
            Validation::Failure(violation) => {
                assert_eq!(violation.to_string(), "expected array, found object")
            }
            Validation::Success(_) => panic!("Expected object to be rejected"),
        }
        assert!(IsArray.check(&json!("[]")).is_failure());
    }
}
