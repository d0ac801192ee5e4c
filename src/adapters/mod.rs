//! External integrations
//!
//! Adapters isolate the rest of the library from third-party transport
//! details. The only adapter today is the HTTP transport.

pub mod http;

pub use http::{HttpTransport, Transport};
