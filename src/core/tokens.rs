//! Delimited-list extraction and joining
//!
//! Callers pass filter arguments (records, fields, forms, events, arms)
//! as single delimiter-separated strings. This module splits them into
//! ordered token lists for payload assembly and joins token lists back
//! into the comma-separated wire form.
//!
//! Extraction and joining are inverse-compatible: for any token list
//! whose elements contain neither comma nor space,
//! `extract(&join(list), DEFAULT_DELIMITERS) == list`.

use std::fmt::Display;

/// Delimiters used when the caller supplies an empty set
pub const DEFAULT_DELIMITERS: &[char] = &[',', ' '];

/// Split a raw filter string into an ordered list of non-empty tokens
///
/// Splits `raw` on every character in `delimiters`, discarding the empty
/// fragments produced by adjacent delimiters. Fragments are preserved
/// byte-for-byte apart from the surrounding delimiter removal; internal
/// whitespace that is not a delimiter is kept.
///
/// A `None` or empty `raw` yields an empty list, never an error. An empty
/// delimiter set is replaced with [`DEFAULT_DELIMITERS`] before use.
///
/// # Examples
///
/// ```
/// use redcap_client::core::tokens::{extract, DEFAULT_DELIMITERS};
///
/// let tokens = extract(Some("firstName, lastName, age"), DEFAULT_DELIMITERS);
/// assert_eq!(tokens, vec!["firstName", "lastName", "age"]);
/// ```
pub fn extract(raw: Option<&str>, delimiters: &[char]) -> Vec<String> {
    let raw = match raw {
        Some(s) if !s.is_empty() => s,
        _ => return Vec::new(),
    };

    let delimiters = if delimiters.is_empty() {
        tracing::debug!("Empty delimiter set supplied, falling back to defaults");
        DEFAULT_DELIMITERS
    } else {
        delimiters
    };

    raw.split(|c| delimiters.contains(&c))
        .filter(|fragment| !fragment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join a token list into the comma-separated wire form
///
/// An empty list yields the empty string; a single element is returned
/// with no separator; longer lists are comma-joined with no surrounding
/// brackets and no trailing comma.
///
/// # Examples
///
/// ```
/// use redcap_client::core::tokens::join;
///
/// assert_eq!(join::<String>(&[]), "");
/// assert_eq!(join(&["a"]), "a");
/// assert_eq!(join(&[1, 2, 3]), "1,2,3");
/// ```
pub fn join<T: Display>(items: &[T]) -> String {
    match items {
        [] => String::new(),
        [single] => single.to_string(),
        _ => items
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(","),
    }
}
