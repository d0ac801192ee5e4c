//! Secure credential handling using the secrecy crate
//!
//! The REDCap project token is the only credential this library holds.
//! It is wrapped in `Secret` so the memory is zeroed on drop and the
//! value never appears in `Debug` output or log lines.
//!
//! # Example
//!
//! ```rust
//! use redcap_client::config::{SecretString, SecretValue};
//! use secrecy::{ExposeSecret, Secret};
//!
//! let token: SecretString = Secret::new(SecretValue::from("ABC123".to_string()));
//!
//! // Access only when building the payload
//! assert_eq!(token.expose_secret().as_ref(), "ABC123");
//!
//! // Debug output is redacted
//! assert!(format!("{token:?}").contains("REDACTED"));
//! ```

use secrecy::{CloneableSecret, DebugSecret, Secret, SerializableSecret};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use zeroize::Zeroize;

/// Newtype wrapper for String that implements the traits `Secret` requires
#[derive(Clone, Debug, Zeroize)]
#[zeroize(drop)]
pub struct SecretValue(String);

impl CloneableSecret for SecretValue {}
impl DebugSecret for SecretValue {}
impl SerializableSecret for SecretValue {}

/// Type alias for a secret-wrapped string credential
pub type SecretString = Secret<SecretValue>;

impl From<String> for SecretValue {
    fn from(s: String) -> Self {
        SecretValue(s)
    }
}

impl From<&str> for SecretValue {
    fn from(s: &str) -> Self {
        SecretValue(s.to_string())
    }
}

impl AsRef<str> for SecretValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl SecretValue {
    /// Check if the secret value is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for SecretValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SecretValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(SecretValue)
    }
}

/// Build a `SecretString` from any string-like value
pub fn secret_string(value: impl Into<String>) -> SecretString {
    Secret::new(SecretValue(value.into()))
}
