use crate::result::{FieldError, FieldErrorKind};
use crate::rules::FieldValidation;
use crate::values::ValueBag;

/// Requires the field to be non-empty after trimming whitespace.
#[derive(Debug)]
pub struct RequiredField {
    field: String,
}

impl RequiredField {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }
}

impl FieldValidation for RequiredField {
    fn field(&self) -> &str {
        &self.field
    }

    fn validate(&self, values: &ValueBag) -> Option<FieldError> {
        if values.get(&self.field).trim().is_empty() {
            Some(FieldError::new(
                &self.field,
                FieldErrorKind::Required,
                format!("{} is required", self.field),
            ))
        } else {
            None
        }
    }
}
