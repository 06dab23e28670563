//! Identifier shape check.

use super::{verdict, FieldValidator};
use crate::error::Violation;
use stillwater::validation::Validation;
use uuid::Uuid;

/// Value must be shaped like a UUID.
///
/// Hyphenated, simple, braced and URN forms are all accepted. Only the shape
/// is checked; whether the identifier refers to anything is not.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WellFormedUuid;

impl FieldValidator<String> for WellFormedUuid {
    fn check(&self, value: &String) -> Validation<(), Violation> {
        verdict(Uuid::parse_str(value).is_ok(), || Violation::InvalidUuid {
            value: value.clone(),
        })
    }
}
