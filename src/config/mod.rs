//! Configuration management for the REDCap client.
//!
//! The client owns one immutable [`RedcapConfig`] holding the API endpoint
//! URL and the project token; every operation reads those two values and
//! nothing else is shared between calls.
//!
//! # Quick Start
//!
//! ```rust
//! use redcap_client::config::RedcapConfig;
//!
//! // Build programmatically
//! let config = RedcapConfig::new("https://redcap.example.org/api/", "ABC123");
//! ```
//!
//! Or load from a TOML file with `${VAR}` environment substitution:
//!
//! ```toml
//! api_url = "https://redcap.example.org/api/"
//! token = "${REDCAP_API_TOKEN}"
//! timeout_seconds = 30
//!
//! [logging]
//! level = "info"
//! local_enabled = false
//! ```
//!
//! ```rust,no_run
//! use redcap_client::config::load_config;
//!
//! # fn example() -> redcap_client::domain::Result<()> {
//! let config = load_config("redcap.toml")?;
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{LoggingConfig, RedcapConfig};
pub use secret::{secret_string, SecretString, SecretValue};
