//! Per-field pipeline: type assertion followed by validators.

use super::asserter::ValueAsserter;
use super::Resolution;
use crate::core::PropertyPath;
use crate::engine::at_path;
use crate::error::Violation;
use crate::validators::FieldValidator;
use serde_json::Value;
use stillwater::validation::Validation;

/// A value found in the input, not yet asserted to any type.
pub struct RawField<'r, 'a> {
    pub(super) resolution: &'r mut Resolution<'a>,
    pub(super) asserter: &'a dyn ValueAsserter,
    pub(super) path: PropertyPath,
    pub(super) value: &'a Value,
}

impl<'r, 'a> RawField<'r, 'a> {
    pub fn path(&self) -> &PropertyPath {
        &self.path
    }

    pub fn string(self) -> FieldPipeline<'r, 'a, String> {
        self.assert(|a, v| a.assert_string(v))
    }

    pub fn integer(self) -> FieldPipeline<'r, 'a, i64> {
        self.assert(|a, v| a.assert_integer(v))
    }

    pub fn float(self) -> FieldPipeline<'r, 'a, f64> {
        self.assert(|a, v| a.assert_float(v))
    }

    pub fn boolean(self) -> FieldPipeline<'r, 'a, bool> {
        self.assert(|a, v| a.assert_boolean(v))
    }

    pub fn array(self) -> FieldPipeline<'r, 'a, Vec<Value>> {
        self.assert(|a, v| a.assert_array(v))
    }

    /// Skip the type assertion and validate the raw value.
    pub fn raw(self) -> FieldPipeline<'r, 'a, Value> {
        FieldPipeline {
            resolution: self.resolution,
            path: self.path,
            value: Some(self.value.clone()),
        }
    }

    fn assert<T, F>(self, assertion: F) -> FieldPipeline<'r, 'a, T>
    where
        F: FnOnce(&dyn ValueAsserter, &Value) -> Validation<T, Violation>,
    {
        let RawField {
            resolution,
            asserter,
            path,
            value,
        } = self;
        let typed = resolution
            .engine
            .validate_field_value(&mut resolution.session, || {
                at_path(assertion(asserter, value), &path, None)
            });
        FieldPipeline {
            resolution,
            path,
            value: typed,
        }
    }
}

/// A typed field value flowing through validators.
///
/// Every validator runs, whether or not an earlier one failed, and the value
/// is carried forward (normalized) either way. Only a failed type assertion
/// leaves the pipeline empty, in which case later validators have nothing to
/// check and are skipped.
pub struct FieldPipeline<'r, 'a, T> {
    resolution: &'r mut Resolution<'a>,
    path: PropertyPath,
    value: Option<T>,
}

impl<'r, 'a, T> FieldPipeline<'r, 'a, T> {
    /// Run `validator`, reporting failures with its rendered message.
    pub fn check<V>(self, validator: &V) -> Self
    where
        V: FieldValidator<T> + ?Sized,
    {
        self.run(validator, None)
    }

    /// Run `validator`, reporting failures with `message` instead.
    pub fn check_or<V>(self, validator: &V, message: &str) -> Self
    where
        V: FieldValidator<T> + ?Sized,
    {
        self.run(validator, Some(message))
    }

    /// Convert the value once it is known to be there.
    pub fn map<U, F>(self, f: F) -> FieldPipeline<'r, 'a, U>
    where
        F: FnOnce(T) -> U,
    {
        FieldPipeline {
            resolution: self.resolution,
            path: self.path,
            value: self.value.map(f),
        }
    }

    /// The (normalized) value, or `None` if its type assertion failed.
    pub fn value(self) -> Option<T> {
        self.value
    }

    fn run<V>(mut self, validator: &V, message: Option<&str>) -> Self
    where
        V: FieldValidator<T> + ?Sized,
    {
        if let Some(value) = self.value.take() {
            let resolution = &mut *self.resolution;
            self.value = Some(resolution.engine.validate(
                &mut resolution.session,
                &self.path,
                value,
                validator,
                message,
            ));
        }
        self
    }
}
