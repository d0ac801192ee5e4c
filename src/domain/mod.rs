//! Domain models and types for the REDCap client.
//!
//! This module contains the core domain types and business rules shared by
//! every layer of the library.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Enumerated option vocabularies** ([`ExportFormat`], [`ReturnFormat`],
//!   [`DataShape`], [`OverwriteBehavior`], [`ReturnContent`], [`ArmOverride`])
//! - **Importable record descriptors** ([`ImportRecord`], [`FieldValue`])
//! - **Error types** ([`RedcapError`], [`TransportError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, RedcapError>`]:
//!
//! ```rust
//! use redcap_client::domain::{RedcapError, Result};
//!
//! fn example() -> Result<()> {
//!     // Errors are automatically converted using the ? operator
//!     let shape: redcap_client::domain::DataShape = "eav".parse()?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod options;
pub mod record;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::{RedcapError, TransportError};
pub use options::{
    ArmOverride, DataShape, ExportFormat, OverwriteBehavior, ReturnContent, ReturnFormat,
};
pub use record::{FieldValue, ImportRecord};
pub use result::Result;
