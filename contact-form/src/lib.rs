//! contact-form: HTMX contact form with live field validation
//!
//! A single page holds a contact form with four fields. Each change event is
//! validated on the server and answered with that field's error slot; a
//! submit validates every field at once and, when the form is valid, shows a
//! read-only summary of what was submitted.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use contact_form::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     contact_form::observability::init()?;
//!
//!     let config = ContactFormConfig::load()?;
//!     let listener = tokio::net::TcpListener::bind(config.server.bind_address()).await?;
//!     let app = router(AppState::with_config(config));
//!
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```
//!
//! # Validation rules
//!
//! | Field | Rule | Message |
//! |-------|------|---------|
//! | `firstName` | required | `firstName is required` |
//! | `firstName` | at least 5 characters | `firstName must be at least 5 characters` |
//! | `lastName` | required | `lastName is a required field` |
//! | `email` | required | `email is required` |
//! | `email` | valid address | `email must be a valid email address` |
//!
//! `message` is optional and never produces an error.

// Lint configuration is handled at the workspace level in Cargo.toml
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod error;
pub mod forms;
pub mod handlers;
pub mod htmx;
pub mod observability;
pub mod state;
pub mod template;

#[cfg(test)]
pub mod testing;

pub use handlers::router;

pub mod prelude {
    //! Convenience re-exports for common types and functions
    //!
    //! # Examples
    //!
    //! ```rust
    //! use contact_form::prelude::*;
    //! ```

    // HTMX extractors and responders (from axum-htmx)
    pub use crate::htmx::{AutoVaryLayer, HxRequest, HxResponseTrigger};

    // Form handling
    pub use crate::forms::{
        validate, validate_field, ContactForm, ErrorSet, Field, FieldError, FormBuilder,
        FormPhase, FormRenderOptions, FormRenderer, FormValues, SubmitOutcome, SubmittedValues,
    };

    // Error types
    pub use crate::error::ContactFormError;

    // Configuration
    pub use crate::config::ContactFormConfig;

    // Application state
    pub use crate::state::{AppState, FormId, FormRegistry};

    // Routing
    pub use crate::handlers::router;
}
