//! Enumerated parameter vocabularies exposed by the REDCap API
//!
//! Every option the API accepts is modeled as a closed sum type with a
//! documented default. Resolution of an absent or unrecognized option is
//! total: it falls back to the default and never fails. `FromStr` is
//! provided for configuration and test convenience only; it is not part
//! of the resolution path.

use crate::domain::{RedcapError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Input format of data sent to the API (`format` wire parameter)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// JSON (default)
    #[default]
    Json,
    /// Comma-separated values
    Csv,
    /// XML
    Xml,
    /// CDISC ODM XML
    Odm,
}

impl ExportFormat {
    /// Canonical wire token for this format
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Xml => "xml",
            ExportFormat::Odm => "odm",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = RedcapError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "xml" => Ok(Self::Xml),
            "odm" => Ok(Self::Odm),
            _ => Err(RedcapError::Configuration(format!(
                "Invalid export format: {s}. Expected json, csv, xml or odm"
            ))),
        }
    }
}

/// Format of the response body (`returnFormat` wire parameter)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReturnFormat {
    /// JSON (default)
    #[default]
    Json,
    /// Comma-separated values
    Csv,
    /// XML
    Xml,
}

impl ReturnFormat {
    /// Canonical wire token for this format
    pub fn as_str(&self) -> &'static str {
        match self {
            ReturnFormat::Json => "json",
            ReturnFormat::Csv => "csv",
            ReturnFormat::Xml => "xml",
        }
    }
}

impl fmt::Display for ReturnFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReturnFormat {
    type Err = RedcapError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "xml" => Ok(Self::Xml),
            _ => Err(RedcapError::Configuration(format!(
                "Invalid return format: {s}. Expected json, csv or xml"
            ))),
        }
    }
}

/// Shape convention of record data (`type` wire parameter)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataShape {
    /// One row per record (default)
    #[default]
    Flat,
    /// One row per record/field/value triple
    Eav,
    /// EAV with event and instance columns
    Longitudinal,
    /// EAV without event columns
    Nonlongitudinal,
}

impl DataShape {
    /// Canonical wire token for this shape
    pub fn as_str(&self) -> &'static str {
        match self {
            DataShape::Flat => "flat",
            DataShape::Eav => "eav",
            DataShape::Longitudinal => "longitudinal",
            DataShape::Nonlongitudinal => "nonlongitudinal",
        }
    }
}

impl fmt::Display for DataShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataShape {
    type Err = RedcapError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "flat" => Ok(Self::Flat),
            "eav" => Ok(Self::Eav),
            "longitudinal" => Ok(Self::Longitudinal),
            "nonlongitudinal" => Ok(Self::Nonlongitudinal),
            _ => Err(RedcapError::Configuration(format!(
                "Invalid data shape: {s}. Expected flat, eav, longitudinal or nonlongitudinal"
            ))),
        }
    }
}

/// How a record import treats fields that already hold a value
/// (`overwriteBehavior` wire parameter)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverwriteBehavior {
    /// Blank values in the import are ignored (default)
    #[default]
    Normal,
    /// Blank values overwrite stored data
    Overwrite,
}

impl OverwriteBehavior {
    /// Canonical wire token for this behavior
    pub fn as_str(&self) -> &'static str {
        match self {
            OverwriteBehavior::Normal => "normal",
            OverwriteBehavior::Overwrite => "overwrite",
        }
    }
}

impl fmt::Display for OverwriteBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a record import reports back (`returnContent` wire parameter)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReturnContent {
    /// Number of records imported (default)
    #[default]
    Count,
    /// Identifiers of the records imported
    Ids,
}

impl ReturnContent {
    /// Canonical wire token for this content selector
    pub fn as_str(&self) -> &'static str {
        match self {
            ReturnContent::Count => "count",
            ReturnContent::Ids => "ids",
        }
    }
}

impl fmt::Display for ReturnContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether an arm import replaces all existing arms (`override` wire
/// parameter, `0` or `1`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArmOverride {
    /// Keep existing arms and add to them (default, wire `0`)
    #[default]
    Keep,
    /// Delete all existing arms before importing (wire `1`)
    Replace,
}

impl ArmOverride {
    /// Canonical wire token for this override flag
    pub fn as_str(&self) -> &'static str {
        match self {
            ArmOverride::Keep => "0",
            ArmOverride::Replace => "1",
        }
    }
}

impl fmt::Display for ArmOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(ExportFormat::Json, "json")]
    #[test_case(ExportFormat::Csv, "csv")]
    #[test_case(ExportFormat::Xml, "xml")]
    #[test_case(ExportFormat::Odm, "odm")]
    fn test_export_format_tokens(format: ExportFormat, expected: &str) {
        assert_eq!(format.as_str(), expected);
        assert_eq!(format.to_string(), expected);
    }

    #[test_case(DataShape::Flat, "flat")]
    #[test_case(DataShape::Eav, "eav")]
    #[test_case(DataShape::Longitudinal, "longitudinal")]
    #[test_case(DataShape::Nonlongitudinal, "nonlongitudinal")]
    fn test_data_shape_tokens(shape: DataShape, expected: &str) {
        assert_eq!(shape.as_str(), expected);
    }

    #[test]
    fn test_documented_defaults() {
        assert_eq!(ExportFormat::default(), ExportFormat::Json);
        assert_eq!(ReturnFormat::default(), ReturnFormat::Json);
        assert_eq!(DataShape::default(), DataShape::Flat);
        assert_eq!(OverwriteBehavior::default(), OverwriteBehavior::Normal);
        assert_eq!(ReturnContent::default(), ReturnContent::Count);
        assert_eq!(ArmOverride::default(), ArmOverride::Keep);
    }

    #[test]
    fn test_from_str_round_trip() {
        assert_eq!(
            "CSV".parse::<ExportFormat>().unwrap(),
            ExportFormat::Csv
        );
        assert_eq!(
            "longitudinal".parse::<DataShape>().unwrap(),
            DataShape::Longitudinal
        );
        assert!("yaml".parse::<ReturnFormat>().is_err());
    }

    #[test]
    fn test_arm_override_wire_values() {
        assert_eq!(ArmOverride::Keep.as_str(), "0");
        assert_eq!(ArmOverride::Replace.as_str(), "1");
    }
}
