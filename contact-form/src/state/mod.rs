//! Application state management
//!
//! Combines the loaded configuration with the registry of live forms.

mod registry;

pub use registry::{FormId, FormRegistry};

use std::sync::Arc;

use crate::config::ContactFormConfig;

/// Application state shared by all handlers
///
/// Cloning is cheap; clones share the same configuration and registry.
///
/// # Example
///
/// ```rust
/// use contact_form::state::AppState;
///
/// let state = AppState::new();
/// let id = state.forms().create();
/// assert!(state.forms().get(id).is_some());
/// ```
#[derive(Debug, Clone)]
pub struct AppState {
    config: Arc<ContactFormConfig>,
    forms: FormRegistry,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Create application state with defaults
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ContactFormConfig::default())
    }

    /// Create application state with custom configuration
    #[must_use]
    pub fn with_config(config: ContactFormConfig) -> Self {
        let forms = FormRegistry::new(config.forms.max_active_forms);
        Self {
            config: Arc::new(config),
            forms,
        }
    }

    /// Get configuration reference
    #[must_use]
    pub fn config(&self) -> &ContactFormConfig {
        &self.config
    }

    /// Get the form registry
    #[must_use]
    pub const fn forms(&self) -> &FormRegistry {
        &self.forms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = AppState::new();
        assert_eq!(state.config().htmx.request_timeout_ms, 5000);
        assert_eq!(state.forms().capacity(), 1024);
    }

    #[test]
    fn test_with_config() {
        let mut config = ContactFormConfig::default();
        config.forms.max_active_forms = 3;

        let state = AppState::with_config(config);
        assert_eq!(state.forms().capacity(), 3);
    }

    #[test]
    fn test_clone_state() {
        let state = AppState::new();
        let cloned = state.clone();

        assert!(Arc::ptr_eq(&state.config, &cloned.config));

        let id = state.forms().create();
        assert!(cloned.forms().get(id).is_some());
    }
}
