//! HTTP transport for the REDCap API
//!
//! Every operation funnels into one HTTPS POST of a form-urlencoded body
//! against the configured endpoint. The [`Transport`] trait is the seam
//! between payload assembly and the network; tests substitute a fake
//! implementation to capture the outbound form without a server.

use crate::config::RedcapConfig;
use crate::domain::{Result, TransportError};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;

/// Executes one outbound request against the REDCap API
///
/// Implementations must not parse or alter the response body; the raw
/// text is returned verbatim to the caller.
#[async_trait]
pub trait Transport: Send + Sync {
    /// POST the form-encoded pairs and return the raw response body
    async fn post(&self, form: &[(String, String)]) -> Result<String>;
}

/// Transport implementation backed by `reqwest`
///
/// The client is created once with the configured timeout and reused for
/// every call; each call still opens and tears down its own request
/// scope, so concurrent operations on one client never share mutable
/// state.
pub struct HttpTransport {
    /// API endpoint URL
    endpoint: String,

    /// HTTP client for making requests
    client: Client,
}

impl HttpTransport {
    /// Create a transport from the client configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &RedcapConfig) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                crate::domain::RedcapError::Configuration(format!(
                    "Failed to build HTTP client: {e}"
                ))
            })?;

        Ok(Self {
            endpoint: config.api_url.clone(),
            client,
        })
    }

    /// The endpoint URL this transport posts to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post(&self, form: &[(String, String)]) -> Result<String> {
        let response = self
            .client
            .post(&self.endpoint)
            .form(form)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TransportError::Timeout(e.to_string())
                } else {
                    TransportError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            let err = if status.is_server_error() {
                TransportError::ServerError {
                    status: status.as_u16(),
                    message,
                }
            } else {
                TransportError::ClientError {
                    status: status.as_u16(),
                    message,
                }
            };

            tracing::error!(
                endpoint = %self.endpoint,
                status = status.as_u16(),
                "REDCap API request failed"
            );
            return Err(err.into());
        }

        let body = response
            .text()
            .await
            .map_err(|e| TransportError::InvalidResponse(e.to_string()))?;

        Ok(body)
    }
}
