//! Fluent builder for per-field validation chains.

use crate::rules::{
    CompareFields, EmailFormat, FieldValidation, MaxLength, MinLength, Pattern, RequiredField,
};

/// Builder for the validation chain of a single field.
///
/// A chain is bound to exactly one field name for its entire lifetime;
/// validating another field means starting a new chain. Each selector
/// appends exactly one rule in call order, and order matters: evaluation
/// later short-circuits at the first failing rule.
///
/// # Example
///
/// ```
/// use formcheck::{FieldValidation, ValidationBuilder};
///
/// let chain = ValidationBuilder::field("password").required().min(5).build();
/// assert_eq!(chain.len(), 2);
/// assert!(chain.iter().all(|rule| rule.field() == "password"));
/// ```
pub struct ValidationBuilder {
    field: String,
    validations: Vec<Box<dyn FieldValidation>>,
}

impl ValidationBuilder {
    /// Start a chain bound to the given field name.
    pub fn field(name: impl Into<String>) -> Self {
        Self {
            field: name.into(),
            validations: Vec::new(),
        }
    }

    /// Require the field to be non-empty.
    pub fn required(mut self) -> Self {
        self.validations.push(Box::new(RequiredField::new(&self.field)));
        self
    }

    /// Require a minimum length in characters.
    pub fn min(mut self, len: usize) -> Self {
        self.validations.push(Box::new(MinLength::new(&self.field, len)));
        self
    }

    /// Require a maximum length in characters.
    pub fn max(mut self, len: usize) -> Self {
        self.validations.push(Box::new(MaxLength::new(&self.field, len)));
        self
    }

    /// Require a syntactically valid email address.
    pub fn email(mut self) -> Self {
        self.validations.push(Box::new(EmailFormat::new(&self.field)));
        self
    }

    /// Require the value to match a regex pattern.
    ///
    /// Panics at build time if the pattern itself is invalid.
    pub fn pattern(mut self, pattern: &str) -> Self {
        self.validations
            .push(Box::new(Pattern::new(&self.field, pattern)));
        self
    }

    /// Require the value to equal another field's value.
    pub fn same_as(mut self, other: impl Into<String>) -> Self {
        self.validations
            .push(Box::new(CompareFields::new(&self.field, other)));
        self
    }

    /// Finish the chain and return its rules in insertion order.
    ///
    /// No field values are validated at build time; the builder only
    /// assembles.
    pub fn build(self) -> Vec<Box<dyn FieldValidation>> {
        self.validations
    }
}
