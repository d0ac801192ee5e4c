//! Request payload assembly
//!
//! A [`Payload`] is the flat key/value mapping for exactly one outbound
//! request. `token` and `content` are always present; every other key is
//! attached by the operation that needs it. Keys are unique and keep
//! their insertion order so the form body is deterministic.

use crate::core::tokens;

/// The flat parameter mapping for one outbound request
#[derive(Debug, Clone)]
pub struct Payload {
    pairs: Vec<(String, String)>,
}

impl Payload {
    /// Start a payload with the two keys every request carries
    pub fn new(token: &str, content: &'static str) -> Self {
        Self {
            pairs: vec![
                ("token".to_string(), token.to_string()),
                ("content".to_string(), content.to_string()),
            ],
        }
    }

    /// Set a required parameter, replacing any previous value for the key
    pub fn set(&mut self, key: &'static str, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        if let Some(pair) = self.pairs.iter_mut().find(|(k, _)| k == key) {
            pair.1 = value;
        } else {
            self.pairs.push((key.to_string(), value));
        }
        self
    }

    /// Attach an optional filter as its comma-joined wire form
    ///
    /// The key is only added when the token list is non-empty.
    pub fn set_tokens(&mut self, key: &'static str, items: &[String]) -> &mut Self {
        if !items.is_empty() {
            self.set(key, tokens::join(items));
        }
        self
    }

    /// Attach an optional parameter only when the value is non-empty
    pub fn set_optional(&mut self, key: &'static str, value: Option<&str>) -> &mut Self {
        if let Some(value) = value {
            if !value.is_empty() {
                self.set(key, value);
            }
        }
        self
    }

    /// Whether the payload carries a value for `key`
    pub fn contains(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    /// Look up the value for `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// The assembled pairs, in insertion order, ready for form encoding
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}
