//! End-to-end signup form scenario: four fields, mixed chains, including
//! the confirm-password comparison.

use formcheck::{ValidationBuilder, ValidationComposite, Validator, ValueBag};

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

fn filled_values() -> ValueBag {
    ValueBag::new()
        .with("name", "alice")
        .with("email", "alice@example.com")
        .with("password", "abc123")
        .with("passwordConfirmation", "abc123")
}

#[test]
fn test_filled_form_is_valid() {
    let composite = make_signup_validation();
    let values = filled_values();

    for field in ["name", "email", "password", "passwordConfirmation"] {
        assert_eq!(composite.validate(field, &values), "", "field {field}");
    }
    assert!(composite.validate_all(&values).is_valid());
}

#[test]
fn test_mismatched_confirmation() {
    let composite = make_signup_validation();
    let mut values = filled_values();
    values.set("passwordConfirmation", "abc124");

    assert_eq!(
        composite.validate("passwordConfirmation", &values),
        "passwordConfirmation must match password"
    );
    // Changing the other side of the pair fails the same rule.
    let mut values = filled_values();
    values.set("password", "zzz999");
    assert!(!composite.validate("passwordConfirmation", &values).is_empty());
}

#[test]
fn test_empty_form_reports_every_field() {
    let composite = make_signup_validation();
    let result = composite.validate_all(&ValueBag::new());

    let fields: Vec<&str> = result.errors().iter().map(|e| e.field.as_str()).collect();
    assert_eq!(
        fields,
        ["name", "email", "password", "passwordConfirmation"]
    );
    // Every chain starts with required, so that is the error reported.
    assert!(result.errors().iter().all(|e| e.message.ends_with("is required")));
}

#[test]
fn test_form_valid_flag_derived_from_messages() {
    // The caller derives the overall flag from whether any field carries a
    // non-empty message.
    let composite = make_signup_validation();
    let mut values = filled_values();
    values.set("email", "nope");

    let any_error = ["name", "email", "password", "passwordConfirmation"]
        .iter()
        .any(|field| !composite.validate(field, &values).is_empty());
    assert!(any_error);
}
