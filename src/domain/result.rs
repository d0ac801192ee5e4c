//! Result type alias for the REDCap client
//!
//! This module provides a convenient Result type alias that uses RedcapError
//! as the error type.

use super::errors::RedcapError;

/// Result type alias for REDCap client operations
///
/// This is a convenience type alias that uses `RedcapError` as the error type.
/// Use this throughout the codebase for fallible operations.
///
/// # Examples
///
/// ```
/// use redcap_client::domain::result::Result;
/// use redcap_client::domain::errors::RedcapError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(RedcapError::MissingRequired("record identifiers"))
/// }
/// ```
pub type Result<T> = std::result::Result<T, RedcapError>;
