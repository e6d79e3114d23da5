//! Askama page templates
//!
//! The page layout lives in `templates/contact.html`; the form component
//! itself is rendered by [`FormRenderer`](crate::forms::FormRenderer) and
//! embedded unescaped.

use askama::Template;

use crate::error::ContactFormError;

/// Full contact page
#[derive(Template)]
#[template(path = "contact.html")]
pub struct ContactPage<'a> {
    /// Page title
    pub title: &'a str,
    /// Pre-rendered form component HTML
    pub component: &'a str,
}

impl<'a> ContactPage<'a> {
    /// Page wrapping an already rendered component
    #[must_use]
    pub const fn new(component: &'a str) -> Self {
        Self {
            title: "Contact Form",
            component,
        }
    }

    /// Render the page to a string
    ///
    /// # Errors
    ///
    /// Returns [`ContactFormError::Template`] if rendering fails.
    pub fn to_html(&self) -> Result<String, ContactFormError> {
        Ok(self.render()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_embeds_component_unescaped() {
        let html = ContactPage::new(r#"<section id="contact-form"></section>"#)
            .to_html()
            .unwrap();

        assert!(html.contains("<title>Contact Form</title>"));
        assert!(html.contains(r#"<section id="contact-form"></section>"#));
        assert!(html.contains("htmx.org"));
    }
}
