//! Register User
//!
//! This example resolves a "register user" command from raw JSON input.
//!
//! Key concepts:
//! - Every field is checked, even after an earlier one failed
//! - All field failures come back together as one error
//! - A missing key is reported on its own, before any value is checked
//! - Errors normalize to `{path, message}` records for any transport
//!
//! Run with: cargo run --example register_user

use intake::core::RawInput;
use intake::error::ResolveError;
use intake::resolver::{CommandResolver, FieldKey, Resolution, ResolverConfig};
use intake::validators::{EmailAddress, LengthBetween, NotEmpty, Trim};
use serde_json::json;

struct RegisterUserCommand {
    first_name: String,
    last_name: String,
    email: String,
}

const REGISTER_USER_FIELDS: [FieldKey<'static>; 3] = [
    FieldKey::body("firstName"),
    FieldKey::body("lastName"),
    FieldKey::body("email"),
];

struct RegisterUserResolver {
    config: ResolverConfig,
    email: EmailAddress,
}

impl CommandResolver for RegisterUserResolver {
    type Command = RegisterUserCommand;

    fn resolve(&self, input: &RawInput) -> Result<RegisterUserCommand, ResolveError> {
        let mut resolution = Resolution::new(input, &self.config, &REGISTER_USER_FIELDS)?;
        let name_length = LengthBetween::new(1, 50);

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
            Some(RegisterUserCommand {
                first_name: first_name?,
                last_name: last_name?,
                email: email?,
            })
        })
    }
}

fn report(label: &str, resolver: &RegisterUserResolver, body: serde_json::Value) {
    println!("{label}");
    println!("  input: {body}");

    let input = match RawInput::from_value(body) {
        Ok(input) => input,
        Err(e) => {
            println!("  rejected before resolution: {e}\n");
            return;
        }
    };

    match resolver.resolve(&input) {
        Ok(command) => println!(
            "  resolved: {} {} <{}>\n",
            command.first_name, command.last_name, command.email
        ),
        Err(error) => {
            let kind = if error.is_mapping() {
                "structural"
            } else {
                "validation"
            };
            println!("  {kind} error: {error}");
            match serde_json::to_string_pretty(&error.normalize()) {
                Ok(json) => println!("{json}\n"),
                Err(e) => println!("  could not serialize errors: {e}\n"),
            }
        }
    }
}

fn main() {
    println!("=== Register User Example ===\n");

    let resolver = RegisterUserResolver {
        config: ResolverConfig::default(),
        email: EmailAddress::syntax_only(),
    };

    report(
        "Example 1: Valid input (whitespace is trimmed)",
        &resolver,
        json!({ "firstName": " Stephen ", "lastName": "Hawking", "email": "stephen@hawking.me" }),
    );

    report(
        "Example 2: One bad field",
        &resolver,
        json!({ "firstName": "Stephen", "lastName": "Hawking", "email": "stephen.hawking.me" }),
    );

    report(
        "Example 3: Several bad fields, reported together",
        &resolver,
        json!({ "firstName": "", "lastName": 42, "email": "" }),
    );

    report(
        "Example 4: Missing key, reported alone",
        &resolver,
        json!({ "firstName2": "Stephen", "lastName": "Hawking", "email": "a@b.com" }),
    );

    report(
        "Example 5: Not a record at all",
        &resolver,
        json!(["Stephen", "Hawking"]),
    );

    println!("Key Takeaways:");
    println!("- Field failures are collected, not thrown one at a time");
    println!("- Structural problems stop resolution immediately");
    println!("- A command is only built from values that passed every check");

    println!("\n=== Example Complete ===");
}
