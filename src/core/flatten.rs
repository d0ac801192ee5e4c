//! Record flattening for import operations
//!
//! Converts an importable record into the flat field-name-to-value map
//! the record-import operation serializes into its `data` parameter.
//! Field names come from the record's descriptor table and are
//! lower-cased to match the REDCap field naming convention. A field whose
//! value is an explicit blank is retained in the map with a null value,
//! not omitted; blank means "clear this field on the server".

use crate::domain::ImportRecord;
use std::collections::BTreeMap;

/// Flatten a record into its wire field map
///
/// A `None` record yields an empty map, never an error. A duplicate
/// field name (after lower-casing) is logged and skipped so a single bad
/// descriptor cannot abort the rest of the record.
///
/// # Examples
///
/// ```
/// use redcap_client::core::flatten::flatten;
/// use redcap_client::domain::record::{FieldValue, ImportRecord};
///
/// struct Vitals {
///     record_id: String,
///     fasting: Option<bool>,
/// }
///
/// impl ImportRecord for Vitals {
///     fn fields(&self) -> Vec<(&'static str, FieldValue)> {
///         vec![
///             ("Record_Id", FieldValue::Text(Some(self.record_id.clone()))),
///             ("Fasting", FieldValue::Flag(self.fasting)),
///         ]
///     }
/// }
///
/// let record = Vitals { record_id: "001".into(), fasting: Some(true) };
/// let map = flatten(Some(&record));
/// assert_eq!(map["record_id"], Some("001".to_string()));
/// assert_eq!(map["fasting"], Some("1".to_string()));
/// ```
pub fn flatten<T: ImportRecord>(record: Option<&T>) -> BTreeMap<String, Option<String>> {
    let mut map = BTreeMap::new();

    let record = match record {
        Some(r) => r,
        None => return map,
    };

    for (name, value) in record.fields() {
        let key = name.to_lowercase();
        if map.contains_key(&key) {
            tracing::warn!(
                field = %key,
                "Duplicate field name in descriptor table, keeping first occurrence"
            );
            continue;
        }
        map.insert(key, value.render());
    }

    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FieldValue;
    use chrono::NaiveDate;

    struct Demographics {
        record_id: String,
        first_name: Option<String>,
        enrolled: Option<NaiveDate>,
        consented: Option<bool>,
    }

    impl ImportRecord for Demographics {
        fn fields(&self) -> Vec<(&'static str, FieldValue)> {
            vec![
                ("Record_Id", FieldValue::Text(Some(self.record_id.clone()))),
                ("First_Name", FieldValue::Text(self.first_name.clone())),
                ("Enrolled", FieldValue::Date(self.enrolled)),
                ("Consented", FieldValue::Flag(self.consented)),
            ]
        }
    }

    fn sample() -> Demographics {
        Demographics {
            record_id: "1".to_string(),
            first_name: Some("Jan".to_string()),
            enrolled: NaiveDate::from_ymd_opt(2023, 11, 2),
            consented: Some(false),
        }
    }

    #[test]
    fn test_flatten_none_yields_empty_map() {
        let map = flatten::<Demographics>(None);
        assert!(map.is_empty());
    }

    #[test]
    fn test_flatten_lower_cases_field_names() {
        let map = flatten(Some(&sample()));
        assert!(map.contains_key("record_id"));
        assert!(map.contains_key("first_name"));
        assert!(!map.contains_key("Record_Id"));
    }

    #[test]
    fn test_flatten_renders_wrappers() {
        let map = flatten(Some(&sample()));
        assert_eq!(map["enrolled"], Some("2023-11-02".to_string()));
        assert_eq!(map["consented"], Some("0".to_string()));
    }

    #[test]
    fn test_flatten_retains_explicit_blanks() {
        let record = Demographics {
            record_id: "2".to_string(),
            first_name: None,
            enrolled: None,
            consented: None,
        };
        let map = flatten(Some(&record));

        // Blank fields stay present with null values
        assert_eq!(map["first_name"], None);
        assert_eq!(map["enrolled"], None);
        assert_eq!(map["consented"], None);
        assert_eq!(map.len(), 4);
    }

    #[test]
    fn test_flatten_serializes_blanks_as_null() {
        let record = Demographics {
            record_id: "3".to_string(),
            first_name: None,
            enrolled: None,
            consented: Some(true),
        };
        let json = serde_json::to_string(&flatten(Some(&record))).unwrap();
        assert!(json.contains("\"first_name\":null"));
        assert!(json.contains("\"consented\":\"1\""));
    }

    struct Clashing;

    impl ImportRecord for Clashing {
        fn fields(&self) -> Vec<(&'static str, FieldValue)> {
            vec![
                ("Age", FieldValue::Number(Some(40.0))),
                ("AGE", FieldValue::Number(Some(41.0))),
            ]
        }
    }

    #[test]
    fn test_flatten_skips_duplicate_names_without_aborting() {
        let map = flatten(Some(&Clashing));
        assert_eq!(map.len(), 1);
        assert_eq!(map["age"], Some("40".to_string()));
    }
}
