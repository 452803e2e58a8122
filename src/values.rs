//! Snapshot of current form field values.

use std::collections::HashMap;

/// The set of field values presented to the validation core.
///
/// Owned and mutated by the caller; rules only read it during a `validate`
/// call and never retain it. Reading an absent field yields the empty
/// string, so a comparison rule whose target field is missing degrades to
/// comparing against `""` instead of failing.
#[derive(Debug, Clone, Default)]
pub struct ValueBag {
    values: HashMap<String, String>,
}

impl ValueBag {
    /// Create an empty value bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field's value, returning the bag for chaining.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Set a field's value in place.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.values.insert(field.into(), value.into());
    }

    /// Get a field's current value. Absent fields read as the empty string.
    pub fn get(&self, field: &str) -> &str {
        self.values.get(field).map_or("", String::as_str)
    }

    /// Check whether the bag holds a value for a field.
    pub fn contains(&self, field: &str) -> bool {
        self.values.contains_key(field)
    }
}

impl From<HashMap<String, String>> for ValueBag {
    fn from(values: HashMap<String, String>) -> Self {
        Self { values }
    }
}

impl<F: Into<String>, V: Into<String>> FromIterator<(F, V)> for ValueBag {
    fn from_iter<I: IntoIterator<Item = (F, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(f, v)| (f.into(), v.into()))
                .collect(),
        }
    }
}
