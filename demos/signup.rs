//! Signup Validation Demo
//!
//! Assembles the validation composite for a signup form (name, email,
//! password, password confirmation) and runs it over a few value bags,
//! printing the per-field messages a UI would display.

use formcheck::{ValidationBuilder, ValidationComposite, Validator, ValueBag};
use log::LevelFilter;
use simplelog::{Config, SimpleLogger};

const FIELDS: [&str; 4] = ["name", "email", "password", "passwordConfirmation"];

fn make_signup_validation() -> ValidationComposite {
    ValidationComposite::build(
        ValidationBuilder::field("name")
            .required()
            .min(5)
            .build()
            .into_iter()
            .chain(ValidationBuilder::field("email").required().email().build())
            .chain(
                ValidationBuilder::field("password")
                    .required()
                    .min(5)
                    .build(),
            )
            .chain(
                ValidationBuilder::field("passwordConfirmation")
                    .required()
                    .same_as("password")
                    .build(),
            )
            .collect(),
    )
}

fn report(composite: &ValidationComposite, label: &str, values: &ValueBag) {
    println!("--- {label} ---");
    for field in FIELDS {
        let message = composite.validate(field, values);
        if message.is_empty() {
            println!("  {field}: ok");
        } else {
            println!("  {field}: {message}");
        }
    }
    let result = composite.validate_all(values);
    println!("  form valid: {}", result.is_valid());
}

fn main() {
    SimpleLogger::init(LevelFilter::Trace, Config::default()).unwrap();

    let composite = make_signup_validation();

    report(&composite, "empty form", &ValueBag::new());

    report(
        &composite,
        "partially filled",
        &ValueBag::new()
            .with("name", "ada")
            .with("email", "not-an-email")
            .with("password", "abc123")
            .with("passwordConfirmation", "abc124"),
    );

    report(
        &composite,
        "filled form",
        &ValueBag::new()
            .with("name", "ada lovelace")
            .with("email", "ada@example.com")
            .with("password", "abc123")
            .with("passwordConfirmation", "abc123"),
    );
}
