//! Request normalization and payload construction
//!
//! This module holds the logic that turns heterogeneous caller inputs into
//! the flat form-encoded parameter mapping the REDCap API expects:
//!
//! - [`format`] - total resolution of optional format options to canonical
//!   wire tokens
//! - [`tokens`] - splitting delimited filter strings into token lists and
//!   joining them back into the comma-separated wire form
//! - [`flatten`] - converting importable records into flat field maps
//! - [`payload`] - assembling the final key/value mapping per operation

pub mod flatten;
pub mod format;
pub mod payload;
pub mod tokens;

pub use flatten::flatten;
pub use format::{resolve_formats, ResolvedFormats};
pub use payload::Payload;
pub use tokens::{extract, join, DEFAULT_DELIMITERS};
