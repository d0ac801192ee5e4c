//! Domain error types
//!
//! This module defines the error hierarchy for the REDCap client.
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main REDCap client error type
///
/// This is the primary error type used throughout the library.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum RedcapError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A required argument was empty or missing
    ///
    /// Raised before the transport is invoked, so a caller can tell a
    /// rejected request apart from a legitimately empty response body.
    #[error("Missing required information: {0}")]
    MissingRequired(&'static str),

    /// The operation is declared by the REDCap API surface but not
    /// implemented by this client
    #[error("Operation not supported: {0}")]
    Unsupported(&'static str),

    /// Transport-level errors
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

/// Transport-specific errors
///
/// Errors that occur during the HTTP round trip to the REDCap API.
/// These errors don't expose the underlying HTTP client types.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Failed to connect to the REDCap API endpoint
    #[error("Failed to connect to REDCap API: {0}")]
    ConnectionFailed(String),

    /// Server error (5xx)
    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    /// Client error (4xx)
    #[error("Client error: {status} - {message}")]
    ClientError { status: u16, message: String },

    /// Request timed out
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// The response body could not be read
    #[error("Invalid response from server: {0}")]
    InvalidResponse(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for RedcapError {
    fn from(err: std::io::Error) -> Self {
        RedcapError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for RedcapError {
    fn from(err: serde_json::Error) -> Self {
        RedcapError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for RedcapError {
    fn from(err: toml::de::Error) -> Self {
        RedcapError::Configuration(format!("TOML parse error: {err}"))
    }
}
