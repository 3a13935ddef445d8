//! Configuration management for the taskforce server.
//!
//! Settings are assembled from built-in defaults overlaid with environment
//! variables prefixed `TASKFORCE` and nested with `__`, for example
//! `TASKFORCE__SERVER__PORT=8080` or `TASKFORCE__STORE__PATH=/srv/data.json`.
//!
//! # Example
//!
//! ```
//! use taskforce_server::infrastructure::config::Settings;
//!
//! let settings = Settings::new().expect("Failed to load configuration");
//! assert!(!settings.telemetry.service_name.is_empty());
//! ```

pub mod server;
pub mod store;
pub mod telemetry;

pub use server::ServerSettings;
pub use store::StoreSettings;
pub use telemetry::TelemetrySettings;

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

/// Environment variable prefix used by [`Settings::new`].
pub const ENV_PREFIX: &str = "TASKFORCE";

/// Top-level configuration for the taskforce server.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    /// HTTP server settings.
    pub server: ServerSettings,
    /// Document store settings.
    pub store: StoreSettings,
    /// Logging and tracing settings.
    pub telemetry: TelemetrySettings,
}

impl Settings {
    /// Creates a new settings instance from environment variables and defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be built or deserialized.
    pub fn new() -> Result<Self, ConfigError> {
        Self::with_prefix(ENV_PREFIX)
    }

    /// Like [`Settings::new`] but reading variables under another prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be built or deserialized.
    pub fn with_prefix(prefix: &str) -> Result<Self, ConfigError> {
        let s = Config::builder()
            // Start with default values
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("store.path", "data.json")?
            .set_default("store.create_if_missing", true)?
            .set_default("telemetry.service_name", "taskforce-server")?
            .set_default("telemetry.log_level", "info")?
            .set_default("telemetry.sampling_ratio", 1.0)?
            // Merge in Environment variables
            .add_source(
                Environment::with_prefix(prefix)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        s.try_deserialize()
    }
}
