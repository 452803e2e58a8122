use regex::Regex;

use crate::result::{FieldError, FieldErrorKind};
use crate::rules::FieldValidation;
use crate::values::ValueBag;

/// Requires the field to match a regex pattern.
///
/// An empty value passes, like [`EmailFormat`](super::EmailFormat).
/// An invalid pattern is a programmer error and panics at construction.
#[derive(Debug)]
pub struct Pattern {
    field: String,
    pattern: Regex,
}

impl Pattern {
    pub fn new(field: impl Into<String>, pattern: &str) -> Self {
        Self {
            field: field.into(),
            pattern: Regex::new(pattern).expect("invalid validation pattern"),
        }
    }
}

impl FieldValidation for Pattern {
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
                format!("{} has an invalid format", self.field),
            ))
        }
    }
}
