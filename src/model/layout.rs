//! Page geometry configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::error::Result;
use crate::markup::rules;

/// Page size and margins, each a dimension string such as `8.5in` or `2cm`.
///
/// Deserializes from the camelCase keys `pageWidth`, `pageHeight`,
/// `marginTop`, `marginBottom`, `marginLeft`, `marginRight`, `headerMargin`
/// and `footerMargin`. Unknown keys are ignored and missing keys take the
/// defaults (US Letter, 1in margins, 0.5in header/footer margins).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    /// Page width
    pub page_width: String,
    /// Page height
    pub page_height: String,
    /// Top margin
    pub margin_top: String,
    /// Bottom margin
    pub margin_bottom: String,
    /// Left margin
    pub margin_left: String,
    /// Right margin
    pub margin_right: String,
    /// Distance from the page edge to the header
    pub header_margin: String,
    /// Distance from the page edge to the footer
    pub footer_margin: String,
}

impl LayoutConfig {
    /// Create a layout with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// US Letter portrait (8.5in x 11in).
    pub fn letter() -> Self {
        Self::default()
    }

    /// A4 portrait (21cm x 29.7cm).
    pub fn a4() -> Self {
        Self::default().with_page_size("21cm", "29.7cm")
    }

    /// Load a layout from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a layout from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Set the page size.
    pub fn with_page_size(mut self, width: impl Into<String>, height: impl Into<String>) -> Self {
        self.page_width = width.into();
        self.page_height = height.into();
        self
    }

    /// Set all four page margins.
    pub fn with_margins(
        mut self,
        top: impl Into<String>,
        right: impl Into<String>,
        bottom: impl Into<String>,
        left: impl Into<String>,
    ) -> Self {
        self.margin_top = top.into();
        self.margin_right = right.into();
        self.margin_bottom = bottom.into();
        self.margin_left = left.into();
        self
    }

    /// Set the header and footer margins.
    pub fn with_header_footer_margins(
        mut self,
        header: impl Into<String>,
        footer: impl Into<String>,
    ) -> Self {
        self.header_margin = header.into();
        self.footer_margin = footer.into();
        self
    }

    /// Copy of this layout where every invalid dimension is replaced by its
    /// default, plus one warning per replaced field.
    pub fn validated(&self) -> (LayoutConfig, Vec<LayoutWarning>) {
        let defaults = LayoutConfig::default();
        let mut layout = self.clone();
        let mut warnings = Vec::new();

        let fields = [
            ("pageWidth", &mut layout.page_width, defaults.page_width),
            ("pageHeight", &mut layout.page_height, defaults.page_height),
            ("marginTop", &mut layout.margin_top, defaults.margin_top),
            ("marginBottom", &mut layout.margin_bottom, defaults.margin_bottom),
            ("marginLeft", &mut layout.margin_left, defaults.margin_left),
            ("marginRight", &mut layout.margin_right, defaults.margin_right),
            ("headerMargin", &mut layout.header_margin, defaults.header_margin),
            ("footerMargin", &mut layout.footer_margin, defaults.footer_margin),
        ];

        for (field, value, fallback) in fields {
            if rules::is_valid_dimension(value) {
                *value = value.trim().to_string();
                continue;
            }
            let warning = LayoutWarning {
                field,
                value: std::mem::replace(value, fallback.clone()),
                fallback,
            };
            log::warn!("{}", warning);
            warnings.push(warning);
        }

        (layout, warnings)
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            page_width: "8.5in".to_string(),
            page_height: "11in".to_string(),
            margin_top: "1in".to_string(),
            margin_bottom: "1in".to_string(),
            margin_left: "1in".to_string(),
            margin_right: "1in".to_string(),
            header_margin: "0.5in".to_string(),
            footer_margin: "0.5in".to_string(),
        }
    }
}

/// A layout field that failed validation and was replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutWarning {
    /// Configuration key
    pub field: &'static str,
    /// Rejected value
    pub value: String,
    /// Value used instead
    pub fallback: String,
}

impl fmt::Display for LayoutWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' is an invalid value for layout parameter '{}', using {}",
            self.value, self.field, self.fallback
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let layout = LayoutConfig::default();
        assert_eq!(layout.page_width, "8.5in");
        assert_eq!(layout.page_height, "11in");
        assert_eq!(layout.margin_left, "1in");
        assert_eq!(layout.header_margin, "0.5in");
    }

    #[test]
    fn test_from_json_partial_and_unknown_keys() {
        let layout =
            LayoutConfig::from_json(r#"{"pageWidth": "21cm", "orientation": "landscape"}"#).unwrap();
        assert_eq!(layout.page_width, "21cm");
        assert_eq!(layout.page_height, "11in");
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(LayoutConfig::from_json("[1, 2]").is_err());
    }

    #[test]
    fn test_validated_falls_back_per_field() {
        let layout = LayoutConfig::default()
            .with_page_size("21cm", "tall")
            .with_header_footer_margins("0.3in", "5px");

        let (fixed, warnings) = layout.validated();
        assert_eq!(fixed.page_width, "21cm");
        assert_eq!(fixed.page_height, "11in");
        assert_eq!(fixed.header_margin, "0.3in");
        assert_eq!(fixed.footer_margin, "0.5in");

        assert_eq!(warnings.len(), 2);
        assert_eq!(warnings[0].field, "pageHeight");
        assert_eq!(warnings[0].value, "tall");
        assert_eq!(warnings[1].field, "footerMargin");
    }

    #[test]
    fn test_validated_clean_layout() {
        let (fixed, warnings) = LayoutConfig::a4().validated();
        assert!(warnings.is_empty());
        assert_eq!(fixed.page_height, "29.7cm");
    }
}
