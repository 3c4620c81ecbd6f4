//! JSON manifests describing a document as a list of insertions.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use todoc::{
    BodyKind, DocBuilder, EntryOptions, ImageOptions, ImageResolver, LayoutConfig, Metadata,
    PageNumberFormat, Region, Section, TextKind,
};

/// A document description.
///
/// ```json
/// {
///   "name": "report",
///   "metadata": { "title": "Report" },
///   "layout": { "pageWidth": "21cm", "pageHeight": "29.7cm" },
///   "entries": [
///     { "kind": "section", "section": "header", "content": "ACME", "alignment": "right" },
///     { "kind": "body", "type": "paragraph", "content": "Hello", "position": 1 },
///     { "kind": "image", "region": "body", "url": "logo.png", "position": 2 },
///     { "kind": "pageNumber", "section": "footer", "format": 2 }
///   ]
/// }
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    /// Output file name
    pub name: Option<String>,

    /// Document properties
    #[serde(default)]
    pub metadata: Metadata,

    /// Page layout
    pub layout: Option<LayoutConfig>,

    /// Insertions, applied in order
    #[serde(default)]
    pub entries: Vec<Insertion>,
}

/// One insertion operation.
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Insertion {
    /// Header or footer text or markup
    #[serde(rename_all = "camelCase")]
    Section {
        section: Section,
        #[serde(default = "default_text_kind")]
        content_type: TextKind,
        content: String,
        #[serde(flatten)]
        options: EntryOptions,
    },

    /// Body paragraph or page
    Body {
        #[serde(rename = "type")]
        body_kind: BodyKind,
        content: String,
        #[serde(flatten)]
        options: EntryOptions,
    },

    /// Image in any region
    Image {
        region: Region,
        url: String,
        #[serde(flatten)]
        options: ImageOptions,
    },

    /// Page number field
    PageNumber {
        section: Section,
        #[serde(default)]
        format: PageNumberFormat,
        #[serde(flatten)]
        options: EntryOptions,
    },
}

fn default_text_kind() -> TextKind {
    TextKind::Text
}

impl Insertion {
    /// Short label for reports.
    pub fn label(&self) -> String {
        match self {
            Insertion::Section { section, .. } => format!("{} entry", section),
            Insertion::Body { body_kind, .. } => match body_kind {
                BodyKind::Paragraph => "paragraph".to_string(),
                BodyKind::Page => "page".to_string(),
            },
            Insertion::Image { url, .. } => format!("image {}", url),
            Insertion::PageNumber { section, .. } => format!("{} page number", section),
        }
    }

    /// Apply this insertion to a builder.
    pub async fn apply<R: ImageResolver>(
        &self,
        builder: &mut DocBuilder,
        resolver: &R,
    ) -> todoc::Result<()> {
        match self {
            Insertion::Section {
                section,
                content_type,
                content,
                options,
            } => builder.add_section_entry(*section, *content_type, content, options),
            Insertion::Body {
                body_kind,
                content,
                options,
            } => builder.add_body_entry(*body_kind, content, options),
            Insertion::Image {
                region,
                url,
                options,
            } => builder.add_image(*region, url, options, resolver).await,
            Insertion::PageNumber {
                section,
                format,
                options,
            } => builder.add_page_number(*section, *format, options),
        }
    }
}

/// A rejected insertion.
#[derive(Debug)]
pub struct Rejection {
    /// Index in the manifest's entry list
    pub index: usize,
    /// What was being inserted
    pub label: String,
    /// Why it was rejected
    pub error: todoc::Error,
}

impl Manifest {
    /// Load a manifest from a JSON file.
    pub fn from_file(path: &Path) -> todoc::Result<Self> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Apply every insertion, continuing past rejected ones.
    pub async fn apply<R: ImageResolver>(
        &self,
        builder: &mut DocBuilder,
        resolver: &R,
    ) -> Vec<Rejection> {
        let mut rejections = Vec::new();
        for (index, insertion) in self.entries.iter().enumerate() {
            if let Err(error) = insertion.apply(builder, resolver).await {
                rejections.push(Rejection {
                    index,
                    label: insertion.label(),
                    error,
                });
            }
        }
        rejections
    }
}
