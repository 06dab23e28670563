//! Float check over raw values.

use super::{verdict, FieldValidator};
use crate::core::json_type_name;
use crate::error::{ValueKind, Violation};
use serde_json::Value;
use stillwater::validation::Validation;

/// Raw value must be a JSON number. Integers count as floats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IsFloat;

impl FieldValidator<Value> for IsFloat {
    fn check(&self, value: &Value) -> Validation<(), Violation> {
        verdict(value.is_number(), || {
            Violation::unexpected_type(ValueKind::Float, json_type_name(value))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_any_number() {
        assert!(IsFloat.check(&json!(1.5)).is_success());
        assert!(IsFloat.check(&json!(2)).is_success());
    }

    #[test]
    fn rejects_numeric_text() {
        assert!(IsFloat.check(&json!("1.5")).is_failure());
    }
}
