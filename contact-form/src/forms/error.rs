//! Form validation error types
//!
//! Validation findings are data, not failures: an [`ErrorSet`] holds at most
//! one [`FieldError`] per [`Field`] and iterates in field declaration order.

use std::collections::BTreeMap;

use serde::Serialize;

use super::field::Field;

/// A single validation error for a field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// The error message
    pub message: String,
    /// Error code for programmatic handling
    pub code: &'static str,
}

impl FieldError {
    /// Create a field error with a message and code
    #[must_use]
    pub fn new(message: impl Into<String>, code: &'static str) -> Self {
        Self {
            message: message.into(),
            code,
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Active validation errors keyed by field
///
/// # Examples
///
/// ```rust
/// use contact_form::forms::{ErrorSet, Field, FieldError};
///
/// let mut errors = ErrorSet::new();
/// errors.set(Field::Email, FieldError::new("email is required", "required"));
/// errors.set(Field::FirstName, FieldError::new("firstName is required", "required"));
///
/// assert_eq!(errors.len(), 2);
/// let order: Vec<_> = errors.iter().map(|(field, _)| field).collect();
/// assert_eq!(order, [Field::FirstName, Field::Email]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorSet {
    errors: BTreeMap<Field, FieldError>,
}

impl ErrorSet {
    /// Create a new empty error set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the error for a field, replacing any previous one
    pub fn set(&mut self, field: Field, error: FieldError) {
        self.errors.insert(field, error);
    }

    /// Remove the error for a field
    pub fn remove(&mut self, field: Field) -> Option<FieldError> {
        self.errors.remove(&field)
    }

    /// Set or clear a field's error in one step
    pub fn update(&mut self, field: Field, error: Option<FieldError>) {
        match error {
            Some(error) => self.set(field, error),
            None => {
                self.remove(field);
            }
        }
    }

    /// Check if there are any errors
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if there are no errors
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Check if a specific field has an error
    #[must_use]
    pub fn has_field_error(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    /// Get the error for a specific field
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    /// Get the message for a specific field
    #[must_use]
    pub fn message(&self, field: Field) -> Option<&str> {
        self.get(field).map(|error| error.message.as_str())
    }

    /// Number of fields with an error
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Clear all errors
    pub fn clear(&mut self) {
        self.errors.clear();
    }

    /// Iterate over errors in field declaration order
    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldError)> {
        self.errors.iter().map(|(field, error)| (*field, error))
    }
}

impl FromIterator<(Field, FieldError)> for ErrorSet {
    fn from_iter<I: IntoIterator<Item = (Field, FieldError)>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}
