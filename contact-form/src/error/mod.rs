//! Error types and error handling
//!
//! Validation findings are never errors; they live in
//! [`ErrorSet`](crate::forms::ErrorSet). This type covers infrastructure
//! failures only.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::forms::UnknownField;
use crate::state::FormId;

/// Application error type
#[derive(Debug, Error)]
pub enum ContactFormError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Template rendering failed
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    /// No live form with this id
    #[error("Form not found: {0}")]
    FormNotFound(FormId),

    /// Field name in the request path is not a contact form field
    #[error("Bad request: {0}")]
    UnknownField(#[from] UnknownField),
}

impl ContactFormError {
    /// HTTP status for this error
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::FormNotFound(_) => StatusCode::NOT_FOUND,
            Self::UnknownField(_) => StatusCode::BAD_REQUEST,
            Self::Config(_) | Self::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ContactFormError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
            (status, "Internal server error").into_response()
        } else {
            tracing::warn!(error = %self, "request rejected");
            (status, self.to_string()).into_response()
        }
    }
}
