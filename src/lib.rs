//! Intake: resolve untrusted input into typed commands
//!
//! Intake reads a raw, untyped record (typically a parsed request body),
//! checks every field it declares, and either hands back a fully valid
//! command or reports every problem it found in a single error. Individual
//! field failures never stop the remaining checks; they are collected and
//! raised together at the end.
//!
//! # Core Concepts
//!
//! - **Validators**: Pure checks over one field value, composed per resolver
//! - **Engine**: Runs checks and records failures in a per-call session
//! - **Resolver**: Walks a command's fields and builds the command once the
//!   session is known to be clean
//! - **Errors**: A missing key fails before any value is checked; value
//!   failures are reported together; both normalize to `{path, message}`
//!   records
//!
//! # Example
//!
//! ```rust
//! use intake::core::RawInput;
//! use intake::error::ResolveError;
//! use intake::resolver::{CommandResolver, FieldKey, Resolution, ResolverConfig};
//! use intake::validators::{EmailAddress, LengthBetween, NotEmpty};
//! use serde_json::json;
//!
//! #[derive(Debug, PartialEq)]
//! struct SubscribeCommand {
//!     name: String,
//!     email: String,
//! }
//!
//! struct SubscribeResolver {
//!     config: ResolverConfig,
//!     email: EmailAddress,
//! }
//!
//! impl CommandResolver for SubscribeResolver {
//!     type Command = SubscribeCommand;
//!
//!     fn resolve(&self, input: &RawInput) -> Result<SubscribeCommand, ResolveError> {
//!         let mut resolution = Resolution::new(
//!             input,
//!             &self.config,
//!             &[FieldKey::body("name"), FieldKey::body("email")],
//!         )?;
//!         let name = resolution
//!             .body("name")?
//!             .string()
//!             .check(&LengthBetween::new(1, 50))
//!             .value();
//!         let email = resolution
//!             .body("email")?
//!             .string()
//!             .check(&NotEmpty)
//!             .check(&self.email)
//!             .value();
//!         resolution.finish(|| {
//!             Some(SubscribeCommand {
//!                 name: name?,
//!                 email: email?,
//!             })
//!         })
//!     }
//! }
//!
//! let resolver = SubscribeResolver {
//!     config: ResolverConfig::default(),
//!     email: EmailAddress::syntax_only(),
//! };
//!
//! let input = RawInput::from_value(json!({ "name": "", "email": "nobody" })).unwrap();
//! let error = resolver.resolve(&input).unwrap_err();
//!
//! let paths: Vec<_> = error.normalize().into_iter().map(|e| e.path).collect();
//! assert_eq!(paths, vec!["name", "email"]);
//! ```

pub mod core;
pub mod engine;
pub mod error;
pub mod resolver;
pub mod validators;

// Re-export commonly used types
pub use core::{InputSource, PropertyPath, RawInput};
pub use engine::{ValidationEngine, ValidationSession};
pub use error::{
    AggregateValidationError, FieldError, NormalizedError, ResolveError, StructuralMappingError,
    Violation,
};
pub use resolver::{CommandResolver, FieldKey, Resolution, ResolverConfig};
pub use validators::FieldValidator;
