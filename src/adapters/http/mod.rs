//! HTTP adapter implementation
//!
//! This module provides the network boundary of the library: a transport
//! trait and its `reqwest`-backed implementation.

pub mod transport;

pub use transport::{HttpTransport, Transport};
