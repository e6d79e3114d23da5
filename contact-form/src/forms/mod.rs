//! Contact form validation, state and rendering
//!
//! This module holds the core of the application:
//! - [`rules`]: the pure validation rule set
//! - [`ContactForm`]: the controller reacting to field changes and submits
//! - [`FormBuilder`] / [`FormRenderer`]: HTML for the form, its error slots
//!   and the submission summary
//!
//! # Quick Start
//!
//! ```rust
//! use contact_form::forms::{ContactForm, Field, FormRenderOptions, FormRenderer};
//!
//! let mut form = ContactForm::new();
//! form.on_field_change(Field::Email, "Yoda");
//! assert_eq!(
//!     form.errors().message(Field::Email),
//!     Some("email must be a valid email address")
//! );
//!
//! let html = FormRenderer::render_component("/forms/demo", &form, &FormRenderOptions::default());
//! assert!(html.contains("email must be a valid email address"));
//! ```

mod builder;
mod controller;
mod error;
mod field;
mod render;
pub mod rules;

pub use builder::{FormBuilder, HtmxFormAttrs};
pub use controller::{ContactForm, FormPhase, FormValues, SubmitOutcome, SubmittedValues};
pub use error::{ErrorSet, FieldError};
pub use field::{Field, FieldKind, FormField, HtmxFieldAttrs, InputType, UnknownField};
pub use render::{FormRenderOptions, FormRenderer, COMPONENT_ID, SUMMARY_ID};
pub use rules::{is_valid_email, validate, validate_field};
