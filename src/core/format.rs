//! Format option resolution
//!
//! Every API operation accepts optional format options. Resolution is
//! total: an absent option resolves to its documented default and never
//! produces an error. The three axes are resolved into independently
//! named outputs so a data-shape value can never leak into the
//! return-format slot or vice versa.

use crate::domain::{DataShape, ExportFormat, ReturnFormat};

/// The resolved format options for one outbound request
///
/// Each field holds the canonical wire token for its axis. The defaults
/// are `("json", "json", "flat")`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedFormats {
    /// Canonical token for the `format` wire parameter
    pub format: &'static str,

    /// Canonical token for the `returnFormat` wire parameter
    pub return_format: &'static str,

    /// Canonical token for the `type` wire parameter
    pub data_shape: &'static str,
}

/// Resolve the format triple for one operation
///
/// # Examples
///
/// ```
/// use redcap_client::core::format::resolve_formats;
/// use redcap_client::domain::ExportFormat;
///
/// let resolved = resolve_formats(Some(ExportFormat::Csv), None, None);
/// assert_eq!(resolved.format, "csv");
/// assert_eq!(resolved.return_format, "json");
/// assert_eq!(resolved.data_shape, "flat");
/// ```
pub fn resolve_formats(
    format: Option<ExportFormat>,
    return_format: Option<ReturnFormat>,
    data_shape: Option<DataShape>,
) -> ResolvedFormats {
    ResolvedFormats {
        format: format.unwrap_or_default().as_str(),
        return_format: return_format.unwrap_or_default().as_str(),
        data_shape: data_shape.unwrap_or_default().as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_options_resolve_to_defaults() {
        let resolved = resolve_formats(None, None, None);
        assert_eq!(resolved.format, "json");
        assert_eq!(resolved.return_format, "json");
        assert_eq!(resolved.data_shape, "flat");
    }

    #[test]
    fn test_each_axis_resolves_independently() {
        let resolved = resolve_formats(
            Some(ExportFormat::Odm),
            Some(ReturnFormat::Xml),
            Some(DataShape::Eav),
        );
        assert_eq!(resolved.format, "odm");
        assert_eq!(resolved.return_format, "xml");
        assert_eq!(resolved.data_shape, "eav");
    }

    #[test]
    fn test_data_shape_never_aliases_return_format() {
        // A supplied shape must leave the other two axes at their defaults
        let resolved = resolve_formats(None, None, Some(DataShape::Longitudinal));
        assert_eq!(resolved.return_format, "json");
        assert_eq!(resolved.data_shape, "longitudinal");
    }

    #[test]
    fn test_resolution_is_total() {
        // No combination of inputs can fail; spot-check the full grid
        for format in [None, Some(ExportFormat::Csv)] {
            for return_format in [None, Some(ReturnFormat::Csv)] {
                for shape in [None, Some(DataShape::Nonlongitudinal)] {
                    let resolved = resolve_formats(format, return_format, shape);
                    assert!(!resolved.format.is_empty());
                    assert!(!resolved.return_format.is_empty());
                    assert!(!resolved.data_shape.is_empty());
                }
            }
        }
    }
}
