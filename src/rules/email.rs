use regex::Regex;

use crate::result::{FieldError, FieldErrorKind};
use crate::rules::FieldValidation;
use crate::values::ValueBag;

/// Email address grammar: dot-atom or quoted local part, then a bracketed
/// IPv4 literal or a dotted domain with an alphabetic top-level label.
/// No network or DNS validation.
const EMAIL_PATTERN: &str = r#"^([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*|".+")@(\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\]|([a-zA-Z0-9-]+\.)+[a-zA-Z]{2,})$"#;

/// Requires the field to hold a syntactically valid email address.
///
/// An empty value passes; chain [`RequiredField`](super::RequiredField)
/// first to also reject empty input.
#[derive(Debug)]
pub struct EmailFormat {
    field: String,
    pattern: Regex,
}

impl EmailFormat {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            pattern: Regex::new(EMAIL_PATTERN).expect("email pattern is valid"),
        }
    }
}

impl FieldValidation for EmailFormat {
    fn field(&self) -> &str {
        &self.field
    }

    fn validate(&self, values: &ValueBag) -> Option<FieldError> {
        let value = values.get(&self.field);
        if value.is_empty() || self.pattern.is_match(value) {
            None
        } else {
            Some(FieldError::new(
                &self.field,
                FieldErrorKind::InvalidValue,
                format!("{} must be a valid email address", self.field),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(value: &str) -> Option<FieldError> {
        let rule = EmailFormat::new("email");
        let values = ValueBag::new().with("email", value);
        rule.validate(&values)
    }

    #[test]
    fn test_valid_addresses_pass() {
        assert!(check("user@example.com").is_none());
        assert!(check("first.last@sub.example.co").is_none());
        assert!(check("user-name@example-site.org").is_none());
    }

    #[test]
    fn test_invalid_addresses_fail() {
        assert_eq!(check("not-an-email").unwrap().kind, FieldErrorKind::InvalidValue);
        assert!(check("missing-domain@").is_some());
        assert!(check("@missing-local.com").is_some());
        assert!(check("two@@example.com").is_some());
    }

    #[test]
    fn test_domain_needs_a_dot() {
        assert!(check("user@localhost").is_some());
    }

    #[test]
    fn test_empty_value_passes() {
        assert!(check("").is_none());
    }
}
