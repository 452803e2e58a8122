use crate::result::{FieldError, FieldErrorKind};
use crate::rules::FieldValidation;
use crate::values::ValueBag;

/// Requires a minimum length in characters, computed on the raw value.
///
/// An empty value fails too; put [`RequiredField`](super::RequiredField)
/// earlier in the chain if the required error should win.
#[derive(Debug)]
pub struct MinLength {
    field: String,
    min: usize,
}

impl MinLength {
    pub fn new(field: impl Into<String>, min: usize) -> Self {
        Self {
            field: field.into(),
            min,
        }
    }
}

impl FieldValidation for MinLength {
    fn field(&self) -> &str {
        &self.field
    }

    fn validate(&self, values: &ValueBag) -> Option<FieldError> {
        if values.get(&self.field).chars().count() < self.min {
            Some(FieldError::new(
                &self.field,
                FieldErrorKind::InvalidLength,
                format!("{} must be at least {} characters", self.field, self.min),
            ))
        } else {
            None
        }
    }
}

/// Requires a maximum length in characters.
#[derive(Debug)]
pub struct MaxLength {
    field: String,
    max: usize,
}

impl MaxLength {
    pub fn new(field: impl Into<String>, max: usize) -> Self {
        Self {
            field: field.into(),
            max,
        }
    }
}

impl FieldValidation for MaxLength {
    fn field(&self) -> &str {
        &self.field
    }

    fn validate(&self, values: &ValueBag) -> Option<FieldError> {
        if values.get(&self.field).chars().count() > self.max {
            Some(FieldError::new(
                &self.field,
                FieldErrorKind::InvalidLength,
                format!("{} must be at most {} characters", self.field, self.max),
            ))
        } else {
            None
        }
    }
}
