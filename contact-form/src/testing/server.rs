//! Test server utilities using axum-test

use axum::Router;

use crate::handlers::router;
use crate::state::{AppState, FormId};

/// Thin wrapper around `axum_test::TestServer`
pub struct TestServer {
    inner: axum_test::TestServer,
}

impl TestServer {
    /// Create a new test server from an Axum router
    ///
    /// # Errors
    ///
    /// Returns an error if the server cannot be started
    pub fn new(app: Router) -> anyhow::Result<Self> {
        let inner = axum_test::TestServer::new(app)?;
        Ok(Self { inner })
    }

    /// Serve the application router over `state`
    ///
    /// # Errors
    ///
    /// Returns an error if the server cannot be started
    pub fn app(state: AppState) -> anyhow::Result<Self> {
        Self::new(router(state))
    }

    /// Make a GET request to the server
    pub fn get(&self, path: &str) -> axum_test::TestRequest {
        self.inner.get(path)
    }

    /// Make a POST request to the server
    pub fn post(&self, path: &str) -> axum_test::TestRequest {
        self.inner.post(path)
    }

    /// POST one field change as the browser would
    pub fn change_field(&self, id: FormId, field: &str, value: &str) -> axum_test::TestRequest {
        self.inner
            .post(&format!("{}/fields/{field}", id.base_path()))
            .form(&[(field, value)])
    }

    /// Get the inner `axum_test::TestServer` for advanced usage
    #[must_use]
    pub const fn inner(&self) -> &axum_test::TestServer {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_server_creation() {
        let server = TestServer::app(AppState::new()).unwrap();
        server.get("/health").await.assert_status_ok();
    }

    #[tokio::test]
    async fn test_change_field() {
        let state = AppState::new();
        let id = state.forms().create();
        let server = TestServer::app(state.clone()).unwrap();

        server
            .change_field(id, "email", "luke@rebellion.org")
            .await
            .assert_status_ok();

        let form = state.forms().get(id).unwrap();
        assert_eq!(form.values().email, "luke@rebellion.org");
    }
}
