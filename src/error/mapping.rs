//! Fail-fast error for input missing a required key.

use super::render::{DefaultRenderer, MessageRenderer};
use super::NormalizedError;
use crate::core::{InputSource, PropertyPath};
use thiserror::Error;

/// A required key is absent from the input.
///
/// This is a contract violation by whoever built the input, not a problem
/// with a value, so it is raised immediately and always reported under the
/// `root` path.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("mapping does not contain an element with key \"{key}\"")]
pub struct StructuralMappingError {
    key: String,
    input_source: InputSource,
}

impl StructuralMappingError {
    pub fn missing_key(key: impl Into<String>, input_source: InputSource) -> Self {
        Self {
            key: key.into(),
            input_source,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn input_source(&self) -> InputSource {
        self.input_source
    }

    pub fn property_path(&self) -> PropertyPath {
        PropertyPath::root()
    }

    pub fn normalize(&self) -> Vec<NormalizedError> {
        self.normalize_with(&DefaultRenderer)
    }

    pub fn normalize_with(&self, renderer: &dyn MessageRenderer) -> Vec<NormalizedError> {
        vec![NormalizedError::new(
            self.property_path().as_str(),
            renderer.missing_key(&self.key, self.input_source),
        )]
    }
}
