// REDCap Client - async Rust client for the REDCap API
// Licensed under the MIT License

//! # redcap-client
//!
//! An async client library for the REDCap clinical data capture API. It
//! translates strongly-typed method calls into the flat form-encoded POST
//! requests REDCap expects and hands the raw response body back verbatim.
//!
//! ## Overview
//!
//! The library's core is the request normalization layer:
//! - **Format resolution** - optional format options resolve totally to
//!   canonical wire tokens with defaults `(json, json, flat)`
//! - **Filter extraction** - delimiter-separated filter strings become
//!   ordered token lists, re-joined with commas for the wire
//! - **Record flattening** - importable records describe themselves
//!   through field-descriptor tables; explicit blanks are preserved
//! - **Payload assembly** - every request carries `token` and `content`,
//!   optional keys only when their source data is non-empty
//!
//! ## Architecture
//!
//! - [`client`] - the public operation surface ([`client::RedcapClient`])
//! - [`core`] - normalization and payload construction
//! - [`adapters`] - the HTTP transport boundary
//! - [`domain`] - option vocabularies, record descriptors and errors
//! - [`config`] - endpoint, token and logging configuration
//! - [`logging`] - structured logging setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use redcap_client::client::RedcapClient;
//! use redcap_client::config::RedcapConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = RedcapConfig::new("https://redcap.example.org/api/", "ABC123");
//!     let client = RedcapClient::new(config)?;
//!
//!     let version = client.export_version(None, None).await?;
//!     println!("REDCap version: {version}");
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`domain::Result`]. A rejected request (missing
//! record identifiers, unsupported operation) is a distinct error variant,
//! never an empty success:
//!
//! ```rust,no_run
//! use redcap_client::domain::RedcapError;
//!
//! # async fn example(client: redcap_client::client::RedcapClient) {
//! match client.export_records("", None, None, None, None, None, None, None).await {
//!     Err(RedcapError::MissingRequired(what)) => eprintln!("rejected: {what}"),
//!     Err(e) => eprintln!("failed: {e}"),
//!     Ok(body) => println!("{body}"),
//! }
//! # }
//! ```

pub mod adapters;
pub mod client;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;

// Crate-level convenience re-exports
pub use client::RedcapClient;
pub use config::RedcapConfig;
pub use domain::{RedcapError, Result};
