//! Configuration schema types
//!
//! This module defines the configuration structure for the REDCap client.
//! The two values every request reads (API URL and project token) are
//! immutable once the client is constructed; there is no process-wide
//! state.

use crate::config::{secret_string, SecretString};
use serde::{Deserialize, Serialize};
use url::Url;

/// REDCap client configuration
///
/// This is the root configuration structure. It can be built
/// programmatically with [`RedcapConfig::new`] or loaded from a TOML file
/// with [`crate::config::load_config`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedcapConfig {
    /// Full URL of the REDCap API endpoint, e.g.
    /// `https://redcap.example.org/api/`
    pub api_url: String,

    /// Project-level API token
    pub token: SecretString,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl RedcapConfig {
    /// Create a configuration from an endpoint URL and a project token
    ///
    /// # Example
    ///
    /// ```
    /// use redcap_client::config::RedcapConfig;
    ///
    /// let config = RedcapConfig::new("https://redcap.example.org/api/", "ABC123");
    /// assert!(config.validate().is_ok());
    /// ```
    pub fn new(api_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            token: secret_string(token),
            timeout_seconds: default_timeout_seconds(),
            logging: LoggingConfig::default(),
        }
    }

    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        let url = Url::parse(&self.api_url)
            .map_err(|e| format!("Invalid api_url '{}': {}", self.api_url, e))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(format!(
                "Invalid api_url scheme '{}'. Must be http or https",
                url.scheme()
            ));
        }

        if secrecy::ExposeSecret::expose_secret(&self.token).is_empty() {
            return Err("token must not be empty".to_string());
        }

        if self.timeout_seconds == 0 {
            return Err("timeout_seconds must be greater than zero".to_string());
        }

        self.logging.validate()?;
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log file path
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily or hourly)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.level.as_str()) {
            return Err(format!(
                "Invalid logging level '{}'. Must be one of: {}",
                self.level,
                valid_levels.join(", ")
            ));
        }

        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid log rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_local_path() -> String {
    "logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
