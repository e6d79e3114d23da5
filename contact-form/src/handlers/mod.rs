//! HTTP handlers and routing
//!
//! | Route | Handler |
//! |-------|---------|
//! | `GET /` | [`contact::index`] |
//! | `GET /forms/{id}` | [`contact::show`] |
//! | `POST /forms/{id}/fields/{field}` | [`contact::field_change`] |
//! | `POST /forms/{id}/submit` | [`contact::submit`] |
//! | `GET /forms/{id}/state` | [`contact::form_state`] |
//! | `GET /health` | [`health`] |

pub mod contact;

use axum::routing::{get, post};
use axum::Router;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::htmx::AutoVaryLayer;
use crate::state::AppState;

/// Liveness probe
pub async fn health() -> &'static str {
    "ok"
}

/// Build the application router
///
/// Requests are traced and bounded by the configured timeout. When
/// `htmx.auto_vary` is set, responses that depend on HTMX request headers
/// get a matching `Vary` header.
pub fn router(state: AppState) -> Router {
    let timeout = state.config().htmx.request_timeout();
    let auto_vary = state.config().htmx.auto_vary;

    let router = Router::new()
        .route("/", get(contact::index))
        .route("/health", get(health))
        .route("/forms/{id}", get(contact::show))
        .route("/forms/{id}/state", get(contact::form_state))
        .route("/forms/{id}/fields/{field}", post(contact::field_change))
        .route("/forms/{id}/submit", post(contact::submit))
        .with_state(state);

    let router = if auto_vary {
        router.layer(AutoVaryLayer)
    } else {
        router
    };

    router
        .layer(TimeoutLayer::new(timeout))
        .layer(TraceLayer::new_for_http())
}
