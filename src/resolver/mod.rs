//! Command resolution.
//!
//! A resolver turns one [`RawInput`] into one command. It declares its
//! fields up front as [`FieldKey`]s and reads them in a fixed order through a
//! [`Resolution`], which owns the [`ValidationSession`] for that single call:
//!
//! 1. [`Resolution::new`] locates every declared key before anything is
//!    checked. The first missing one aborts with a
//!    [`StructuralMappingError`] and no validator runs.
//! 2. A present value is type-asserted by the asserter configured for its
//!    source, then run through the field's validators. Failures are
//!    recorded, not returned.
//! 3. [`Resolution::finish`] raises every recorded failure as one
//!    [`AggregateValidationError`](crate::error::AggregateValidationError),
//!    or builds the command if there were none.
//!
//! # Example
//!
//! ```rust
//! use intake::core::RawInput;
//! use intake::error::ResolveError;
//! use intake::resolver::{CommandResolver, FieldKey, Resolution, ResolverConfig};
//! use intake::validators::{LengthBetween, NotEmpty, Trim};
//!
//! #[derive(Debug)]
//! struct RenameCommand {
//!     name: String,
//! }
//!
//! struct RenameResolver {
//!     config: ResolverConfig,
//! }
//!
//! impl CommandResolver for RenameResolver {
//!     type Command = RenameCommand;
//!
//!     fn resolve(&self, input: &RawInput) -> Result<RenameCommand, ResolveError> {
//!         let mut resolution =
//!             Resolution::new(input, &self.config, &[FieldKey::body("name")])?;
//!         let name = resolution
//!             .body("name")?
//!             .string()
//!             .check(&Trim)
//!             .check(&NotEmpty)
//!             .check(&LengthBetween::new(1, 20))
//!             .value();
//!         resolution.finish(|| Some(RenameCommand { name: name? }))
//!     }
//! }
//!
//! let resolver = RenameResolver { config: ResolverConfig::default() };
//! let command = resolver.resolve(&RawInput::new().with("name", "  Ada ")).unwrap();
//! assert_eq!(command.name, "Ada");
//!
//! let error = resolver.resolve(&RawInput::new().with("name", "   ")).unwrap_err();
//! assert_eq!(error.normalize().len(), 2);
//! ```

mod asserter;
mod config;
mod field;

pub use asserter::{FlatRecordAsserter, QueryAsserter, SectionAsserter, ValueAsserter};
pub use config::{ResolverConfig, ResolverConfigBuilder};
pub use field::{FieldPipeline, RawField};

use crate::core::{InputSource, PropertyPath, RawInput};
use crate::engine::{ValidationEngine, ValidationSession};
use crate::error::{ResolveError, StructuralMappingError};
use std::any::type_name;
use tracing::{debug, trace};

/// Resolves raw input into one kind of command.
///
/// Implementations must be stateless across calls: every call builds its
/// own [`Resolution`].
pub trait CommandResolver: Send + Sync {
    type Command;

    fn resolve(&self, input: &RawInput) -> Result<Self::Command, ResolveError>;
}

/// A key a resolver reads and the source it reads it from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FieldKey<'k> {
    pub source: InputSource,
    pub key: &'k str,
}

impl<'k> FieldKey<'k> {
    pub const fn new(source: InputSource, key: &'k str) -> Self {
        Self { source, key }
    }

    pub const fn body(key: &'k str) -> Self {
        Self::new(InputSource::Body, key)
    }

    pub const fn attribute(key: &'k str) -> Self {
        Self::new(InputSource::Attributes, key)
    }

    pub const fn query(key: &'k str) -> Self {
        Self::new(InputSource::Query, key)
    }
}

/// State of a single resolve call.
pub struct Resolution<'a> {
    input: &'a RawInput,
    config: &'a ResolverConfig,
    engine: ValidationEngine,
    session: ValidationSession,
}

impl<'a> Resolution<'a> {
    /// Start resolving `input` with a fresh session.
    ///
    /// Every key in `declared` is located through its source's asserter
    /// first, in order. The first one missing is returned as a
    /// [`StructuralMappingError`] before any check has run.
    pub fn new(
        input: &'a RawInput,
        config: &'a ResolverConfig,
        declared: &[FieldKey<'_>],
    ) -> Result<Self, StructuralMappingError> {
        if let Some(missing) = declared
            .iter()
            .find(|field| config.asserter(field.source).locate(input, field.key).is_none())
        {
            return Err(missing_key(missing.source, missing.key));
        }

        Ok(Self {
            input,
            config,
            engine: ValidationEngine::new(),
            session: ValidationSession::new(),
        })
    }

    pub fn body(&mut self, key: &str) -> Result<RawField<'_, 'a>, StructuralMappingError> {
        self.field(InputSource::Body, key)
    }

    pub fn attribute(&mut self, key: &str) -> Result<RawField<'_, 'a>, StructuralMappingError> {
        self.field(InputSource::Attributes, key)
    }

    pub fn query(&mut self, key: &str) -> Result<RawField<'_, 'a>, StructuralMappingError> {
        self.field(InputSource::Query, key)
    }

    /// Locate `key` through the asserter configured for `source`.
    ///
    /// Declared keys are known to be present. An undeclared key that is
    /// missing still fails structurally, but only once earlier fields have
    /// been checked.
    pub fn field(
        &mut self,
        source: InputSource,
        key: &str,
    ) -> Result<RawField<'_, 'a>, StructuralMappingError> {
        let input: &'a RawInput = self.input;
        let config: &'a ResolverConfig = self.config;
        let asserter = config.asserter(source);

        match asserter.locate(input, key) {
            Some(value) => Ok(RawField {
                resolution: self,
                asserter,
                path: PropertyPath::new(key),
                value,
            }),
            None => Err(missing_key(source, key)),
        }
    }

    /// Failures recorded so far.
    pub fn session(&self) -> &ValidationSession {
        &self.session
    }

    /// Close the session and, if nothing failed, build the command.
    ///
    /// `build` runs only after the guard passed, so it never sees a value
    /// that failed a check. It returns `None` only if a field value is
    /// missing without a recorded failure, which is reported as
    /// [`ResolveError::Incomplete`].
    pub fn finish<C, F>(self, build: F) -> Result<C, ResolveError>
    where
        F: FnOnce() -> Option<C>,
    {
        let checks_run = self.session.checks_run();
        self.engine
            .guard_against_any_validation_error(self.session)?;

        match build() {
            Some(command) => {
                trace!(command = type_name::<C>(), checks_run, "command resolved");
                Ok(command)
            }
            None => Err(ResolveError::Incomplete {
                command: type_name::<C>(),
            }),
        }
    }
}

fn missing_key(source: InputSource, key: &str) -> StructuralMappingError {
    debug!(key, source = %source, "required key missing, resolution aborted");
    StructuralMappingError::missing_key(key, source)
}
