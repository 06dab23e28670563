//! Generic field validators.
//!
//! Every validator implements [`FieldValidator`] for the value types it
//! understands. Validators are pure predicates: they never record anything
//! themselves. The [`ValidationEngine`](crate::engine::ValidationEngine)
//! decides what happens to a failed check, which keeps each family
//! independent and lets a resolver compose exactly the ones it needs.
//!
//! | module | validators |
//! |---|---|
//! | `string` | [`LengthBetween`], [`NotEmpty`], [`Trim`], [`IsString`] |
//! | `pattern` | [`MatchesRegex`] |
//! | `email` | [`EmailAddress`] |
//! | `identifier` | [`WellFormedUuid`] |
//! | `integer` | [`IsInteger`] |
//! | `float` | [`IsFloat`] |
//! | `boolean` | [`IsBoolean`] |
//! | `array` | [`IsArray`] |
//! | `date` | [`MatchesDateFormat`] |

mod array;
mod boolean;
mod date;
mod email;
mod float;
mod identifier;
mod integer;
mod pattern;
mod string;

pub use array::IsArray;
pub use boolean::IsBoolean;
pub use date::MatchesDateFormat;
pub use email::{AcceptAllDomains, DomainResolver, EmailAddress, SystemDomainResolver};
pub use float::IsFloat;
pub use identifier::WellFormedUuid;
pub use integer::IsInteger;
pub use pattern::MatchesRegex;
pub use string::{IsString, LengthBetween, NotEmpty, Trim};

use crate::error::Violation;
use stillwater::validation::Validation;

/// A check over one field value.
///
/// `check` must be pure. `normalize` runs before `check` and may rewrite the
/// value (e.g. trimming); the default leaves it untouched.
pub trait FieldValidator<T>: Send + Sync {
    fn check(&self, value: &T) -> Validation<(), Violation>;

    fn normalize(&self, value: T) -> T {
        value
    }
}

/// Validator built from a closure.
///
/// # Example
///
/// ```rust
/// use intake::error::Violation;
/// use intake::validators::{from_fn, FieldValidator};
/// use stillwater::validation::Validation;
///
/// let even = from_fn(|n: &i64| {
///     if n % 2 == 0 {
///         Validation::Success(())
///     } else {
///         Validation::Failure(Violation::custom("odd", "must be even"))
///     }
/// });
///
/// assert!(even.check(&4).is_success());
/// assert!(even.check(&3).is_failure());
/// ```
pub fn from_fn<T, F>(check: F) -> FnValidator<F>
where
    F: Fn(&T) -> Validation<(), Violation> + Send + Sync,
{
    FnValidator { check }
}

/// See [`from_fn`].
#[derive(Clone, Copy, Debug)]
pub struct FnValidator<F> {
    check: F,
}

impl<T, F> FieldValidator<T> for FnValidator<F>
where
    F: Fn(&T) -> Validation<(), Violation> + Send + Sync,
{
    fn check(&self, value: &T) -> Validation<(), Violation> {
        (self.check)(value)
    }
}

/// Pass when `ok`, otherwise fail with the violation `on_failure` builds.
pub(crate) fn verdict<F>(ok: bool, on_failure: F) -> Validation<(), Violation>
where
    F: FnOnce() -> Violation,
{
    if ok {
        Validation::Success(())
    } else {
        Validation::Failure(on_failure())
    }
}
