//! Register-user command and resolver shared by the integration tests.

#![allow(dead_code)]

use intake::core::RawInput;
use intake::error::ResolveError;
use intake::resolver::{CommandResolver, FieldKey, Resolution, ResolverConfig};
use intake::validators::{EmailAddress, LengthBetween, NotEmpty, Trim};
use serde::Serialize;

pub const NAME_MAX: usize = 50;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegisterUserCommand {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl RegisterUserCommand {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }
}

pub const REGISTER_USER_FIELDS: [FieldKey<'static>; 3] = [
    FieldKey::body("firstName"),
    FieldKey::body("lastName"),
    FieldKey::body("email"),
];

pub struct RegisterUserCommandResolver {
    config: ResolverConfig,
    email: EmailAddress,
}

impl RegisterUserCommandResolver {
    pub fn new() -> Self {
        Self::with_config(ResolverConfig::default())
    }

    pub fn with_config(config: ResolverConfig) -> Self {
        Self {
            config,
            email: EmailAddress::syntax_only(),
        }
    }

    pub fn with_email(mut self, email: EmailAddress) -> Self {
        self.email = email;
        self
    }
}

impl CommandResolver for RegisterUserCommandResolver {
    type Command = RegisterUserCommand;

    fn resolve(&self, input: &RawInput) -> Result<RegisterUserCommand, ResolveError> {
        let mut resolution = Resolution::new(input, &self.config, &REGISTER_USER_FIELDS)?;
        let name_length = LengthBetween::new(1, NAME_MAX);

        let first_name = resolution
            .body("firstName")?
            .string()
            .check(&Trim)
            .check(&name_length)
            .value();
        let last_name = resolution
            .body("lastName")?
            .string()
            .check(&Trim)
            .check(&name_length)
            .value();
        let email = resolution
            .body("email")?
            .string()
            .check(&Trim)
            .check(&NotEmpty)
            .check(&self.email)
            .value();

        resolution.finish(|| {
            Some(RegisterUserCommand::new(first_name?, last_name?, email?))
        })
    }
}

pub fn input(first_name: &str, last_name: &str, email: &str) -> RawInput {
    RawInput::new()
        .with("firstName", first_name)
        .with("lastName", last_name)
        .with("email", email)
}
