//! Form rendering to HTML
//!
//! Renders the contact form, its per-field error slots and the submission
//! summary to HTML strings with proper escaping.
//!
//! Every active error becomes exactly one element carrying
//! `data-testid="error"`, so the number of visible messages always equals
//! the size of the [`ErrorSet`](super::ErrorSet).

use std::fmt::Write;

use super::builder::FormBuilder;
use super::controller::{ContactForm, SubmittedValues};
use super::error::FieldError;
use super::field::{Field, FieldKind, FormField};

/// Options for customizing form rendering
#[derive(Debug, Clone)]
pub struct FormRenderOptions {
    /// CSS class for form groups (wrapper around label + input + errors)
    pub group_class: String,
    /// CSS class for labels
    pub label_class: String,
    /// CSS class for input elements
    pub input_class: String,
    /// CSS class for error messages
    pub error_class: String,
    /// CSS class for submit button
    pub submit_class: String,
    /// CSS class applied to inputs with errors
    pub input_error_class: String,
}

impl Default for FormRenderOptions {
    fn default() -> Self {
        Self {
            group_class: "form-group".into(),
            label_class: "form-label".into(),
            input_class: "form-input".into(),
            error_class: "form-error".into(),
            submit_class: "form-submit".into(),
            input_error_class: "form-input-error".into(),
        }
    }
}

/// Element id of the contact form component
pub const COMPONENT_ID: &str = "contact-form";

/// Element id of the submission summary
pub const SUMMARY_ID: &str = "contact-summary";

/// Renders forms to HTML
pub struct FormRenderer;

impl FormRenderer {
    /// Render a form to HTML string
    #[must_use]
    pub fn render(form: &FormBuilder<'_>) -> String {
        Self::render_with_options(form, &FormRenderOptions::default())
    }

    /// Render a form with custom options
    #[must_use]
    pub fn render_with_options(form: &FormBuilder<'_>, options: &FormRenderOptions) -> String {
        let mut html = String::with_capacity(1024);

        html.push_str("<form");
        Self::write_attr(&mut html, "action", &form.action);
        Self::write_attr(&mut html, "method", &form.method);
        if let Some(ref id) = form.id {
            Self::write_attr(&mut html, "id", id);
        }
        html.push_str(" novalidate");
        Self::write_htmx_form_attrs(&mut html, form);
        html.push_str(">\n");

        for field in &form.fields {
            let value = form.values.map(|values| values.get(field.field));
            let error = form.errors.and_then(|errors| errors.get(field.field));
            html.push_str(&Self::render_field(field, value, error, options));
        }

        if let Some(ref text) = form.submit_text {
            let _ = writeln!(
                html,
                r#"  <button type="submit" class="{}">{}</button>"#,
                Self::escape_attr(&options.submit_class),
                Self::escape_html(text)
            );
        }

        html.push_str("</form>");
        html
    }

    /// Render the slot holding one field's error
    ///
    /// The slot is present for required fields and for every field wired
    /// for live validation, so each `hx-target` has an element to swap. It
    /// is empty when the field is valid.
    #[must_use]
    pub fn render_error_slot(
        field: Field,
        error: Option<&FieldError>,
        options: &FormRenderOptions,
    ) -> String {
        let mut html = String::with_capacity(128);
        let _ = write!(html, r#"<div id="{}" class="form-error-slot">"#, field.error_slot_id());
        if let Some(error) = error {
            let _ = write!(
                html,
                r#"<p class="{}" data-testid="error" data-field="{}" role="alert">{}</p>"#,
                options.error_class,
                field.name(),
                Self::escape_html(&error.message)
            );
        }
        html.push_str("</div>");
        html
    }

    /// Render the read-only summary of a submission
    ///
    /// The message line is omitted entirely when no message was submitted.
    #[must_use]
    pub fn render_summary(submitted: &SubmittedValues) -> String {
        let mut html = String::with_capacity(256);
        let _ = writeln!(html, r#"<div id="{SUMMARY_ID}" class="contact-summary">"#);
        html.push_str("  <h2>You Submitted:</h2>\n");

        let lines = [
            ("firstnameDisplay", "First Name", Some(submitted.first_name.as_str())),
            ("lastnameDisplay", "Last Name", Some(submitted.last_name.as_str())),
            ("emailDisplay", "Email", Some(submitted.email.as_str())),
            ("messageDisplay", "Message", submitted.message.as_deref()),
        ];
        for (test_id, label, value) in lines {
            if let Some(value) = value {
                let _ = writeln!(
                    html,
                    r#"  <p data-testid="{test_id}">{label}: {}</p>"#,
                    Self::escape_html(value)
                );
            }
        }

        html.push_str("</div>");
        html
    }

    /// Render the full contact form component
    ///
    /// `base` is the URL prefix of this form instance, e.g. `/forms/{id}`.
    /// The component holds the header, the form wired for live validation
    /// and HTMX submission, and the summary of the last accepted submission.
    #[must_use]
    pub fn render_component(base: &str, form: &ContactForm, options: &FormRenderOptions) -> String {
        let base = base.trim_end_matches('/');
        let submit_url = format!("{base}/submit");

        let form_html = FormBuilder::new(&submit_url, "POST")
            .id("contact")
            .fields(Field::ALL)
            .values(form.values())
            .errors(form.errors())
            .live_validation(&format!("{base}/fields"))
            .submit("Submit")
            .htmx_post(&submit_url)
            .htmx_target(format!("#{COMPONENT_ID}"))
            .htmx_swap("outerHTML")
            .build_with_options(options);

        let mut html = String::with_capacity(form_html.len() + 512);
        let _ = writeln!(html, r#"<section id="{COMPONENT_ID}" class="contact-form">"#);
        html.push_str("<h1>Contact Form</h1>\n");
        html.push_str(&form_html);
        html.push('\n');
        if let Some(submitted) = form.submitted() {
            html.push_str(&Self::render_summary(submitted));
            html.push('\n');
        }
        html.push_str("</section>");
        html
    }

    fn render_field(
        field: &FormField,
        value: Option<&str>,
        error: Option<&FieldError>,
        options: &FormRenderOptions,
    ) -> String {
        let mut html = String::with_capacity(256);

        let _ = writeln!(html, r#"  <div class="{}">"#, options.group_class);
        let _ = writeln!(
            html,
            r#"    <label for="{}" class="{}">{}</label>"#,
            field.name(),
            options.label_class,
            Self::escape_html(&field.label)
        );

        let input_html = match field.kind {
            FieldKind::Input(input_type) => {
                let mut input = String::from("    <input");
                Self::write_attr(&mut input, "type", input_type.as_str());
                Self::write_common_attrs(&mut input, field, error.is_some(), options);
                if let Some(value) = value {
                    Self::write_attr(&mut input, "value", value);
                }
                input.push_str(">\n");
                input
            }
            FieldKind::Textarea { rows } => {
                let mut textarea = String::from("    <textarea");
                Self::write_common_attrs(&mut textarea, field, error.is_some(), options);
                if let Some(rows) = rows {
                    Self::write_attr(&mut textarea, "rows", &rows.to_string());
                }
                textarea.push('>');
                textarea.push_str(&Self::escape_html(value.unwrap_or_default()));
                textarea.push_str("</textarea>\n");
                textarea
            }
        };
        html.push_str(&input_html);

        if field.required || error.is_some() || field.htmx.target.is_some() {
            let _ = writeln!(
                html,
                "    {}",
                Self::render_error_slot(field.field, error, options)
            );
        }

        html.push_str("  </div>\n");
        html
    }

    fn write_common_attrs(
        html: &mut String,
        field: &FormField,
        has_error: bool,
        options: &FormRenderOptions,
    ) {
        Self::write_attr(html, "name", field.name());
        Self::write_attr(html, "id", field.name());
        let class = if has_error {
            format!("{} {}", options.input_class, options.input_error_class)
        } else {
            options.input_class.clone()
        };
        Self::write_attr(html, "class", &class);
        if let Some(ref placeholder) = field.placeholder {
            Self::write_attr(html, "placeholder", placeholder);
        }
        if field.required {
            html.push_str(r#" aria-required="true""#);
        }
        if has_error {
            html.push_str(r#" aria-invalid="true""#);
        }
        Self::write_htmx_field_attrs(html, field);
    }

    fn write_attr(html: &mut String, name: &str, value: &str) {
        html.push(' ');
        html.push_str(name);
        html.push_str("=\"");
        html.push_str(&Self::escape_attr(value));
        html.push('"');
    }

    fn write_htmx_form_attrs(html: &mut String, form: &FormBuilder<'_>) {
        if let Some(ref url) = form.htmx.post {
            Self::write_attr(html, "hx-post", url);
        }
        if let Some(ref selector) = form.htmx.target {
            Self::write_attr(html, "hx-target", selector);
        }
        if let Some(ref strategy) = form.htmx.swap {
            Self::write_attr(html, "hx-swap", strategy);
        }
    }

    fn write_htmx_field_attrs(html: &mut String, field: &FormField) {
        if let Some(ref url) = field.htmx.post {
            Self::write_attr(html, "hx-post", url);
        }
        if let Some(ref selector) = field.htmx.target {
            Self::write_attr(html, "hx-target", selector);
        }
        if let Some(ref strategy) = field.htmx.swap {
            Self::write_attr(html, "hx-swap", strategy);
        }
        if let Some(ref trigger) = field.htmx.trigger {
            Self::write_attr(html, "hx-trigger", trigger);
        }
    }

    /// Escape a string for use in HTML attribute values
    fn escape_attr(s: &str) -> String {
        s.replace('&', "&amp;")
            .replace('"', "&quot;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
    }

    /// Escape a string for use in HTML content
    fn escape_html(s: &str) -> String {
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
    }
}
