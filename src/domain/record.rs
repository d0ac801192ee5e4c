//! Importable record descriptors
//!
//! Record types that can be sent to the record-import operation describe
//! themselves through an explicit field-descriptor table rather than any
//! form of runtime type introspection. Each descriptor pairs the REDCap
//! field name with a [`FieldValue`] carrying the current value and its
//! coercion rule.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use redcap_client::domain::record::{FieldValue, ImportRecord};
//!
//! struct Demographics {
//!     record_id: String,
//!     first_name: Option<String>,
//!     enrolled: Option<NaiveDate>,
//!     consented: Option<bool>,
//! }
//!
//! impl ImportRecord for Demographics {
//!     fn fields(&self) -> Vec<(&'static str, FieldValue)> {
//!         vec![
//!             ("record_id", FieldValue::Text(Some(self.record_id.clone()))),
//!             ("first_name", FieldValue::Text(self.first_name.clone())),
//!             ("enrolled", FieldValue::Date(self.enrolled)),
//!             ("consented", FieldValue::Flag(self.consented)),
//!         ]
//!     }
//! }
//! ```

use chrono::NaiveDate;

/// A single field value together with its wire coercion rule
///
/// The `None` payload in every variant means "send this field as blank":
/// the flattener retains it as an explicit null instead of omitting the
/// field, preserving the caller's intent to clear stored data.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Free text, passed through unchanged
    Text(Option<String>),

    /// Calendar date, rendered as `YYYY-MM-DD`
    Date(Option<NaiveDate>),

    /// Boolean flag, rendered as `"1"` for true and `"0"` for false
    Flag(Option<bool>),

    /// Numeric value, rendered through its display form
    Number(Option<f64>),
}

impl FieldValue {
    /// Render this value to its wire text, or `None` for an explicit blank
    pub fn render(&self) -> Option<String> {
        match self {
            FieldValue::Text(v) => v.clone(),
            FieldValue::Date(v) => v.map(|d| d.format("%Y-%m-%d").to_string()),
            FieldValue::Flag(v) => v.map(|b| (if b { "1" } else { "0" }).to_string()),
            FieldValue::Number(v) => v.map(|n| n.to_string()),
        }
    }

    /// Whether this value carries an explicit blank
    pub fn is_blank(&self) -> bool {
        matches!(
            self,
            FieldValue::Text(None)
                | FieldValue::Date(None)
                | FieldValue::Flag(None)
                | FieldValue::Number(None)
        )
    }
}

/// A record type that can be flattened into the record-import `data` field
///
/// Implementors return their field-descriptor table in declaration order.
/// Field names are lower-cased by the flattener to match the REDCap field
/// naming convention, so implementors may use whatever casing reads best.
pub trait ImportRecord {
    /// The field-descriptor table for this record
    fn fields(&self) -> Vec<(&'static str, FieldValue)>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_render() {
        let value = FieldValue::Text(Some("alice".to_string()));
        assert_eq!(value.render(), Some("alice".to_string()));
        assert!(!value.is_blank());
    }

    #[test]
    fn test_date_render_canonical() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let value = FieldValue::Date(Some(date));
        assert_eq!(value.render(), Some("2024-03-09".to_string()));
    }

    #[test]
    fn test_flag_render_numeric() {
        assert_eq!(
            FieldValue::Flag(Some(true)).render(),
            Some("1".to_string())
        );
        assert_eq!(
            FieldValue::Flag(Some(false)).render(),
            Some("0".to_string())
        );
    }

    #[test]
    fn test_blank_values() {
        assert!(FieldValue::Text(None).is_blank());
        assert!(FieldValue::Date(None).is_blank());
        assert!(FieldValue::Flag(None).is_blank());
        assert_eq!(FieldValue::Number(None).render(), None);
    }

    #[test]
    fn test_number_render() {
        assert_eq!(
            FieldValue::Number(Some(36.6)).render(),
            Some("36.6".to_string())
        );
    }
}
