//! Form builder API with fluent interface
//!
//! Assembles the contact form's `<form>` element: which fields it shows,
//! their current values and errors, and the HTMX attributes that wire
//! field changes and submission back to the server.

use super::controller::FormValues;
use super::error::ErrorSet;
use super::field::{Field, FormField};
use super::render::{FormRenderOptions, FormRenderer};

/// Builder for the contact form element
///
/// # Examples
///
/// ```rust
/// use contact_form::forms::{Field, FormBuilder};
///
/// let html = FormBuilder::new("/forms/abc/submit", "POST")
///     .id("contact")
///     .fields(Field::ALL)
///     .live_validation("/forms/abc/fields")
///     .submit("Submit")
///     .htmx_post("/forms/abc/submit")
///     .htmx_target("#contact-form")
///     .htmx_swap("outerHTML")
///     .build();
///
/// assert!(html.contains(r#"hx-post="/forms/abc/fields/email""#));
/// ```
#[derive(Debug, Clone)]
pub struct FormBuilder<'a> {
    /// Form action URL
    pub(crate) action: String,
    /// HTTP method
    pub(crate) method: String,
    /// Form ID
    pub(crate) id: Option<String>,
    /// Form fields
    pub(crate) fields: Vec<FormField>,
    /// Current values
    pub(crate) values: Option<&'a FormValues>,
    /// Validation errors
    pub(crate) errors: Option<&'a ErrorSet>,
    /// Submit button text
    pub(crate) submit_text: Option<String>,
    /// HTMX attributes
    pub(crate) htmx: HtmxFormAttrs,
}

/// HTMX attributes for the form element
#[derive(Debug, Clone, Default)]
pub struct HtmxFormAttrs {
    /// hx-post URL
    pub post: Option<String>,
    /// hx-target selector
    pub target: Option<String>,
    /// hx-swap strategy
    pub swap: Option<String>,
}

impl<'a> FormBuilder<'a> {
    /// Create a new form builder with action and method
    #[must_use]
    pub fn new(action: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            method: method.into(),
            id: None,
            fields: Vec::new(),
            values: None,
            errors: None,
            submit_text: None,
            htmx: HtmxFormAttrs::default(),
        }
    }

    /// Set the form ID
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add a field with its default configuration
    #[must_use]
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field.form_field());
        self
    }

    /// Add several fields in order
    #[must_use]
    pub fn fields(self, fields: impl IntoIterator<Item = Field>) -> Self {
        fields.into_iter().fold(self, Self::field)
    }

    /// Set the values shown in the inputs
    #[must_use]
    pub const fn values(mut self, values: &'a FormValues) -> Self {
        self.values = Some(values);
        self
    }

    /// Set validation errors to display
    #[must_use]
    pub const fn errors(mut self, errors: &'a ErrorSet) -> Self {
        self.errors = Some(errors);
        self
    }

    /// Post each field to `{base}/{field}` when it changes
    ///
    /// The response replaces the field's error slot.
    #[must_use]
    pub fn live_validation(mut self, base: &str) -> Self {
        let base = base.trim_end_matches('/');
        for form_field in &mut self.fields {
            let field = form_field.field;
            form_field.htmx.post = Some(format!("{base}/{field}"));
            form_field.htmx.trigger = Some("change".into());
            form_field.htmx.target = Some(format!("#{}", field.error_slot_id()));
            form_field.htmx.swap = Some("outerHTML".into());
        }
        self
    }

    /// Set the submit button text
    #[must_use]
    pub fn submit(mut self, text: impl Into<String>) -> Self {
        self.submit_text = Some(text.into());
        self
    }

    /// Set hx-post attribute
    #[must_use]
    pub fn htmx_post(mut self, url: impl Into<String>) -> Self {
        self.htmx.post = Some(url.into());
        self
    }

    /// Set hx-target attribute
    #[must_use]
    pub fn htmx_target(mut self, selector: impl Into<String>) -> Self {
        self.htmx.target = Some(selector.into());
        self
    }

    /// Set hx-swap attribute
    #[must_use]
    pub fn htmx_swap(mut self, strategy: impl Into<String>) -> Self {
        self.htmx.swap = Some(strategy.into());
        self
    }

    /// Build the form HTML
    #[must_use]
    pub fn build(self) -> String {
        FormRenderer::render(&self)
    }

    /// Build the form HTML with custom rendering options
    #[must_use]
    pub fn build_with_options(self, options: &FormRenderOptions) -> String {
        FormRenderer::render_with_options(&self, options)
    }
}
