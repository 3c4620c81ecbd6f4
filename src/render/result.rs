//! Build result with statistics.

use serde::{Deserialize, Serialize};

use crate::model::LayoutWarning;

/// A finished document, ready to be saved.
#[derive(Debug, Clone)]
pub struct BuiltDocument {
    /// Suggested file name, always ending in `.doc`
    pub file_name: String,

    /// MIME type of `bytes`
    pub mime_type: &'static str,

    /// Byte order mark followed by the document markup
    pub bytes: Vec<u8>,

    /// Counts collected while composing
    pub stats: BuildStats,

    /// Layout values that were replaced by defaults
    pub warnings: Vec<LayoutWarning>,
}

impl BuiltDocument {
    /// The document markup without the byte order mark.
    pub fn markup(&self) -> &str {
        let text = std::str::from_utf8(&self.bytes).unwrap_or_default();
        text.strip_prefix('\u{feff}').unwrap_or(text)
    }

    /// Size of the output in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if the output is empty. A built document never is.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Statistics collected while composing a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildStats {
    /// Entries in the header
    pub header_entries: u32,

    /// Entries in the footer
    pub footer_entries: u32,

    /// Entries in the body
    pub body_entries: u32,

    /// Text paragraphs in the body
    pub paragraph_count: u32,

    /// Images in the body
    pub image_count: u32,

    /// Pages started in the body, at least one
    pub page_count: u32,
}

impl BuildStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment paragraph count.
    pub fn add_paragraph(&mut self) {
        self.paragraph_count += 1;
    }

    /// Increment image count.
    pub fn add_image(&mut self) {
        self.image_count += 1;
    }

    /// Increment page count.
    pub fn add_page(&mut self) {
        self.page_count += 1;
    }

    /// Entries across all regions.
    pub fn total_entries(&self) -> u32 {
        self.header_entries + self.footer_entries + self.body_entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markup_strips_bom() {
        let doc = BuiltDocument {
            file_name: "a.doc".into(),
            mime_type: "application/msword",
            bytes: "\u{feff}<html></html>".as_bytes().to_vec(),
            stats: BuildStats::new(),
            warnings: Vec::new(),
        };
        assert_eq!(doc.markup(), "<html></html>");
        assert_eq!(doc.len(), 16);
    }

    #[test]
    fn test_total_entries() {
        let stats = BuildStats {
            header_entries: 2,
            footer_entries: 1,
            body_entries: 4,
            ..Default::default()
        };
        assert_eq!(stats.total_entries(), 7);
    }
}
