//! Boolean check over raw values.

use super::{verdict, FieldValidator};
use crate::core::json_type_name;
use crate::error::{ValueKind, Violation};
use serde_json::Value;
use stillwater::validation::Validation;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IsBoolean;

impl FieldValidator<Value> for IsBoolean {
    fn check(&self, value: &Value) -> Validation<(), Violation> {
        verdict(value.is_boolean(), || {
            Violation::unexpected_type(ValueKind::Boolean, json_type_name(value))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn only_json_booleans_pass() {
        assert!(IsBoolean.check(&json!(true)).is_success());
        assert!(IsBoolean.check(&json!(false)).is_success());
        assert!(IsBoolean.check(&json!("true")).is_failure());
        assert!(IsBoolean.check(&json!(1)).is_failure());
    }
}
