//! Test helpers for the contact form handlers
//!
//! - [`TestServer`] wraps `axum-test` around the application router
//! - assertion helpers check the rendered error and summary markup
//!
//! # Example
//!
//! ```rust,ignore
//! use contact_form::testing::{assert_error_count, TestServer};
//!
//! let server = TestServer::app()?;
//! let response = server.get("/").await;
//! assert_error_count(&response, 0);
//! ```

pub mod assertions;
pub mod server;

pub use assertions::*;
pub use server::TestServer;
