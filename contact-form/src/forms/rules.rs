//! Validation rule set for the contact form
//!
//! Rules live in one ordered table of (field, predicate, message) entries.
//! For each field the first violated entry wins, so a field never carries
//! more than one message. Evaluation is pure: the same values always produce
//! the same [`ErrorSet`].

use validator::ValidateEmail;

use super::controller::FormValues;
use super::error::{ErrorSet, FieldError};
use super::field::Field;

/// Minimum first name length, counted in characters
pub const FIRST_NAME_MIN_LENGTH: usize = 5;

/// One entry of the rule table
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    /// Field the rule applies to
    pub field: Field,
    /// Machine-readable error code
    pub code: &'static str,
    /// Message shown when the rule is violated
    pub message: &'static str,
    violated: fn(&str) -> bool,
}

impl Rule {
    /// Returns the error for `value` if it violates this rule
    #[must_use]
    pub fn check(&self, value: &str) -> Option<FieldError> {
        (self.violated)(value).then(|| FieldError::new(self.message, self.code))
    }
}

const fn is_missing(value: &str) -> bool {
    value.is_empty()
}

fn is_too_short(value: &str) -> bool {
    value.chars().count() < FIRST_NAME_MIN_LENGTH
}

fn is_malformed_email(value: &str) -> bool {
    !is_valid_email(value)
}

/// Rule table, evaluated in order
pub const RULES: &[Rule] = &[
    Rule {
        field: Field::FirstName,
        code: "required",
        message: "firstName is required",
        violated: is_missing,
    },
    Rule {
        field: Field::FirstName,
        code: "min_length",
        message: "firstName must be at least 5 characters",
        violated: is_too_short,
    },
    Rule {
        field: Field::LastName,
        code: "required",
        message: "lastName is a required field",
        violated: is_missing,
    },
    Rule {
        field: Field::Email,
        code: "required",
        message: "email is required",
        violated: is_missing,
    },
    Rule {
        field: Field::Email,
        code: "email",
        message: "email must be a valid email address",
        violated: is_malformed_email,
    },
];

/// Checks the shape `local-part@domain` with a dot-separated domain
///
/// The address must pass the `validator` crate's email check and its domain
/// must contain at least two non-empty labels.
///
/// ```rust
/// use contact_form::forms::is_valid_email;
///
/// assert!(is_valid_email("revan@sith.org"));
/// assert!(!is_valid_email("Yoda"));
/// assert!(!is_valid_email("yoda@dagobah"));
/// ```
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    let Some((_, domain)) = value.rsplit_once('@') else {
        return false;
    };
    let dotted = domain.contains('.') && domain.split('.').all(|label| !label.is_empty());
    dotted && value.validate_email()
}

/// Validates a single field value
///
/// Returns the first violated rule's error, or `None` when the value is
/// valid. [`Field::Message`] has no rules and is always valid.
#[must_use]
pub fn validate_field(field: Field, value: &str) -> Option<FieldError> {
    RULES
        .iter()
        .filter(|rule| rule.field == field)
        .find_map(|rule| rule.check(value))
}

/// Validates every field and returns the errors of the failing ones
///
/// ```rust
/// use contact_form::forms::{validate, Field, FormValues};
///
/// let errors = validate(&FormValues::default());
/// assert_eq!(errors.len(), 3);
/// assert_eq!(errors.message(Field::LastName), Some("lastName is a required field"));
/// ```
#[must_use]
pub fn validate(values: &FormValues) -> ErrorSet {
    Field::ALL
        .into_iter()
        .filter_map(|field| validate_field(field, values.get(field)).map(|error| (field, error)))
        .collect()
}
