//! Observability (structured logging and tracing)
//!
//! Log level is taken from `RUST_LOG` when set. Debug builds log pretty,
//! human-readable lines; release builds log JSON.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize observability stack with the default configuration
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
///
/// # Example
///
/// ```rust,no_run
/// use contact_form::observability;
///
/// # fn main() -> anyhow::Result<()> {
/// observability::init()?;
/// tracing::info!("Application started");
/// # Ok(())
/// # }
/// ```
pub fn init() -> anyhow::Result<()> {
    ObservabilityConfig::default().init()
}

/// Observability configuration
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// Service name, used as the default filter target
    pub service_name: String,

    /// Also log `tower_http` request spans
    pub tracing_enabled: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            service_name: "contact_form".to_string(),
            tracing_enabled: cfg!(debug_assertions),
        }
    }
}

impl ObservabilityConfig {
    /// Create new observability config
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            ..Default::default()
        }
    }

    /// Enable request tracing
    #[must_use]
    pub const fn with_tracing(mut self) -> Self {
        self.tracing_enabled = true;
        self
    }

    /// Filter directives used when `RUST_LOG` is unset
    #[must_use]
    pub fn default_directives(&self) -> String {
        let level = if cfg!(debug_assertions) { "debug" } else { "info" };
        let mut directives = format!("info,{}={level}", self.service_name);
        if self.tracing_enabled {
            directives.push_str(",tower_http=debug");
        }
        directives
    }

    /// Install the global subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed.
    pub fn init(&self) -> anyhow::Result<()> {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.default_directives()));

        #[cfg(debug_assertions)]
        {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .try_init()?;
        }

        #[cfg(not(debug_assertions))]
        {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .try_init()?;
        }

        Ok(())
    }
}
