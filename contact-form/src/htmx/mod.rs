//! HTMX response types and extractors
//!
//! Re-exports the parts of `axum-htmx` the handlers use, plus the event the
//! server triggers after an accepted submission.

pub use axum_htmx::{AutoVaryLayer, HxEvent, HxRequest, HxResponseTrigger};

/// Client event triggered when a submission is accepted
pub const SUBMITTED_EVENT: &str = "contact-submitted";

/// `HX-Trigger` response header announcing an accepted submission
#[must_use]
pub fn submitted_trigger() -> HxResponseTrigger {
    HxResponseTrigger::normal([HxEvent::new(SUBMITTED_EVENT.to_string())])
}
