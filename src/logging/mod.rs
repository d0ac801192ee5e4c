//! Logging and observability
//!
//! Structured logging built on the `tracing` crate. Fault absorption
//! points throughout the library emit events here; nothing in this
//! module ever alters control flow.
//!
//! # Example
//!
//! ```no_run
//! use redcap_client::config::LoggingConfig;
//! use redcap_client::logging::init_logging;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging(&config).expect("Failed to initialize logging");
//!
//! tracing::info!("Client starting");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};
