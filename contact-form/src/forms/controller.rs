//! Form controller: the contact form's state machine
//!
//! A [`ContactForm`] owns the current [`FormValues`], the current
//! [`ErrorSet`] and the last [`SubmittedValues`]. Field changes revalidate
//! one field; a submit either shows every failing required field or commits
//! the values to the summary and clears the inputs.

use serde::{Deserialize, Serialize};

use super::error::ErrorSet;
use super::field::Field;
use super::rules;

/// Current contents of the four inputs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormValues {
    /// First name input
    pub first_name: String,
    /// Last name input
    pub last_name: String,
    /// Email input
    pub email: String,
    /// Message textarea
    pub message: String,
}

impl FormValues {
    /// Value of a field
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// Replace the value of a field
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }
}

/// Snapshot of a valid submission, shown as a read-only summary
///
/// `message` is `None` when the message was empty at submission time; the
/// summary then renders no message element at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedValues {
    /// Submitted first name
    pub first_name: String,
    /// Submitted last name
    pub last_name: String,
    /// Submitted email
    pub email: String,
    /// Submitted message, if one was entered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<FormValues> for SubmittedValues {
    fn from(values: FormValues) -> Self {
        Self {
            first_name: values.first_name,
            last_name: values.last_name,
            email: values.email,
            message: Some(values.message).filter(|message| !message.is_empty()),
        }
    }
}

/// Where the controller sits in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormPhase {
    /// Collecting input; errors may be showing
    Editing,
    /// The last event was an accepted submission
    Submitted,
}

/// Result of a submit event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Required fields failed validation; nothing was committed
    Rejected {
        /// Number of error messages now showing
        errors: usize,
    },
    /// Values were committed to the summary and the inputs cleared
    Accepted,
}

impl SubmitOutcome {
    /// Whether the submission was committed
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// The contact form controller
///
/// # Examples
///
/// ```rust
/// use contact_form::forms::{ContactForm, Field, SubmitOutcome};
///
/// let mut form = ContactForm::new();
/// assert_eq!(form.on_submit(), SubmitOutcome::Rejected { errors: 3 });
///
/// form.on_field_change(Field::FirstName, "Darth");
/// form.on_field_change(Field::LastName, "Revan");
/// form.on_field_change(Field::Email, "revan@sith.org");
/// assert_eq!(form.on_submit(), SubmitOutcome::Accepted);
///
/// let summary = form.submitted().unwrap();
/// assert_eq!(summary.first_name, "Darth");
/// assert!(summary.message.is_none());
/// assert_eq!(form.values().first_name, "");
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ContactForm {
    values: FormValues,
    errors: ErrorSet,
    submitted: Option<SubmittedValues>,
    phase: FormPhase,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    /// Create an empty form in the editing phase
    #[must_use]
    pub fn new() -> Self {
        Self {
            values: FormValues::default(),
            errors: ErrorSet::new(),
            submitted: None,
            phase: FormPhase::Editing,
        }
    }

    /// Current input values
    #[must_use]
    pub const fn values(&self) -> &FormValues {
        &self.values
    }

    /// Currently displayed errors
    #[must_use]
    pub const fn errors(&self) -> &ErrorSet {
        &self.errors
    }

    /// Summary of the last accepted submission
    #[must_use]
    pub const fn submitted(&self) -> Option<&SubmittedValues> {
        self.submitted.as_ref()
    }

    /// Current lifecycle phase
    #[must_use]
    pub const fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Store a field's new value and revalidate that field only
    ///
    /// Other fields' errors and the submission summary are left untouched.
    pub fn on_field_change(&mut self, field: Field, value: impl Into<String>) {
        self.values.set(field, value);
        let error = rules::validate_field(field, self.values.get(field));
        self.errors.update(field, error);
        self.phase = FormPhase::Editing;
    }

    /// Validate every required field and commit the values if all pass
    ///
    /// On rejection the error set is replaced and the form returns to
    /// editing; values and the previous summary are kept. On
    /// acceptance the values become the new summary, the inputs are reset to
    /// empty strings and the error set is cleared.
    pub fn on_submit(&mut self) -> SubmitOutcome {
        let errors = rules::validate(&self.values);
        if errors.has_errors() {
            let count = errors.len();
            self.errors = errors;
            self.phase = FormPhase::Editing;
            return SubmitOutcome::Rejected { errors: count };
        }

        let values = std::mem::take(&mut self.values);
        self.submitted = Some(SubmittedValues::from(values));
        self.errors.clear();
        self.phase = FormPhase::Submitted;
        SubmitOutcome::Accepted
    }

    /// Consuming form of [`Self::on_field_change`]
    #[must_use]
    pub fn with_field(mut self, field: Field, value: impl Into<String>) -> Self {
        self.on_field_change(field, value);
        self
    }

    /// Consuming form of [`Self::on_submit`]
    #[must_use]
    pub fn submit(mut self) -> (Self, SubmitOutcome) {
        let outcome = self.on_submit();
        (self, outcome)
    }
}
