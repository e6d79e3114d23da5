//! Configuration management
//!
//! Configuration is loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `CONTACT_FORM_` prefix, `__` for nesting)
//! 2. `./config.toml` (development)
//! 3. `~/.config/contact-form/config.toml` (user config, XDG)
//! 4. Hardcoded defaults (fallback)
//!
//! # Example Configuration
//!
//! ```toml
//! # config.toml
//! [server]
//! host = "0.0.0.0"
//! port = 8080
//!
//! [htmx]
//! request_timeout_ms = 5000
//! auto_vary = true
//!
//! [forms]
//! max_active_forms = 1024
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use figment::providers::{Env, Format, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::ContactFormError;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "CONTACT_FORM_";

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Interface to bind
    pub host: String,

    /// Port to bind
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl ServerSettings {
    /// `host:port` string for binding
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// HTMX-specific configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HtmxSettings {
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,

    /// Enable auto-vary middleware for caching
    pub auto_vary: bool,
}

impl Default for HtmxSettings {
    fn default() -> Self {
        Self {
            request_timeout_ms: 5000,
            auto_vary: true,
        }
    }
}

impl HtmxSettings {
    /// Request timeout as a [`Duration`]
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

/// Form registry settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormSettings {
    /// Maximum number of live form instances before the oldest is evicted
    pub max_active_forms: usize,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            max_active_forms: 1024,
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ContactFormConfig {
    /// Listener settings
    #[serde(default)]
    pub server: ServerSettings,

    /// HTMX-specific settings
    #[serde(default)]
    pub htmx: HtmxSettings,

    /// Form registry settings
    #[serde(default)]
    pub forms: FormSettings,
}

impl ContactFormConfig {
    /// Load configuration from the standard locations
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file cannot be parsed or a value
    /// has the wrong type.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use contact_form::config::ContactFormConfig;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let config = ContactFormConfig::load()?;
    /// println!("{}", config.server.bind_address());
    /// # Ok(())
    /// # }
    /// ```
    pub fn load() -> Result<Self, ContactFormError> {
        let mut figment = Self::defaults()?;

        let user_config = Self::recommended_path();
        if user_config.exists() {
            figment = figment.merge(Toml::file(&user_config));
        }

        let local_config = PathBuf::from("./config.toml");
        if local_config.exists() {
            figment = figment.merge(Toml::file(&local_config));
        }

        Self::extract(figment.merge(Self::env()))
    }

    /// Load configuration from a specific file
    ///
    /// Environment variables still override the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be parsed or a value has the
    /// wrong type.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ContactFormError> {
        let figment = Self::defaults()?
            .merge(Toml::file(path.as_ref()))
            .merge(Self::env());
        Self::extract(figment)
    }

    /// Get the recommended XDG config path
    ///
    /// # Example
    ///
    /// ```rust
    /// use contact_form::config::ContactFormConfig;
    ///
    /// let path = ContactFormConfig::recommended_path();
    /// assert!(path.ends_with("config.toml"));
    /// ```
    #[must_use]
    pub fn recommended_path() -> PathBuf {
        dirs::config_dir().map_or_else(
            || PathBuf::from("./config.toml"),
            |config_dir| config_dir.join("contact-form").join("config.toml"),
        )
    }

    fn defaults() -> Result<Figment, ContactFormError> {
        let defaults = toml::to_string(&Self::default())
            .map_err(|e| ContactFormError::Config(e.to_string()))?;
        Ok(Figment::new().merge(Toml::string(&defaults)))
    }

    fn env() -> Env {
        Env::prefixed(ENV_PREFIX).split("__").lowercase(true)
    }

    fn extract(figment: Figment) -> Result<Self, ContactFormError> {
        figment
            .extract()
            .map_err(|e| ContactFormError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ContactFormConfig::default();
        assert_eq!(config.server.bind_address(), "127.0.0.1:3000");
        assert_eq!(config.htmx.request_timeout_ms, 5000);
        assert!(config.htmx.auto_vary);
        assert_eq!(config.forms.max_active_forms, 1024);
    }

    #[test]
    fn test_request_timeout() {
        let htmx = HtmxSettings {
            request_timeout_ms: 250,
            ..HtmxSettings::default()
        };
        assert_eq!(htmx.request_timeout(), Duration::from_millis(250));
    }

    #[test]
    fn test_load_from_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nport = 8080\n\n[forms]\nmax_active_forms = 2").unwrap();

        let config = ContactFormConfig::load_from(file.path()).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.forms.max_active_forms, 2);
        assert!(config.htmx.auto_vary);
    }

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ContactFormConfig::load_from(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_load_from_invalid_value() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nport = \"not a number\"").unwrap();

        let err = ContactFormConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ContactFormError::Config(_)));
    }
}
