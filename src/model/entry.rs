//! Entry-level types: what a header, footer or body item is made of.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::markup::escape;

/// Fallback font appended to every explicit font family.
pub const FALLBACK_FONT: &str = "Times New Roman";

/// One positioned, typed unit of content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Rendering rule for this entry
    pub kind: ContentKind,

    /// Escaped text, verified markup, or a rendered image tag
    pub content: String,

    /// Ordering key; 0 means unordered
    pub position: u32,

    /// Paragraph presentation
    pub style: ParagraphStyle,

    /// Image attributes, for image entries only
    pub image: Option<ImageAttrs>,
}

impl Entry {
    /// Create a new entry.
    pub fn new(kind: ContentKind, content: impl Into<String>, position: u32) -> Self {
        Self {
            kind,
            content: content.into(),
            position,
            style: ParagraphStyle::default(),
            image: None,
        }
    }

    /// Set the paragraph style.
    pub fn with_style(mut self, style: ParagraphStyle) -> Self {
        self.style = style;
        self
    }

    /// Set image attributes.
    pub fn with_image(mut self, attrs: ImageAttrs) -> Self {
        self.image = Some(attrs);
        self
    }

    /// Check if the entry sits at the unordered position.
    pub fn is_unordered(&self) -> bool {
        self.position == 0
    }

    /// Check if this is a page entry.
    pub fn is_page(&self) -> bool {
        matches!(self.kind, ContentKind::Page { .. })
    }

    /// Check if this is an image entry.
    pub fn is_image(&self) -> bool {
        matches!(self.kind, ContentKind::Image)
    }
}

/// How an entry's content is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentKind {
    /// Escaped header/footer text, wrapped in a paragraph
    PlainText,
    /// Verified markup, embedded verbatim
    InlineMarkup,
    /// Rendered image tag
    Image,
    /// Escaped body text, wrapped in a paragraph
    Paragraph,
    /// Content that starts a new page
    Page {
        /// Whether the payload is verified markup rather than escaped text
        markup: bool,
    },
    /// Pre-rendered page number field
    PageNumber,
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentKind::PlainText => write!(f, "text"),
            ContentKind::InlineMarkup => write!(f, "html"),
            ContentKind::Image => write!(f, "image"),
            ContentKind::Paragraph => write!(f, "paragraph"),
            ContentKind::Page { markup: false } => write!(f, "page"),
            ContentKind::Page { markup: true } => write!(f, "html_page"),
            ContentKind::PageNumber => write!(f, "page_number"),
        }
    }
}

/// Paragraph presentation attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParagraphStyle {
    /// Text alignment
    pub alignment: Alignment,

    /// CSS font size, `None` inherits the document default
    pub font_size: Option<String>,

    /// CSS font family, `None` inherits the document default
    pub font_family: Option<String>,
}

impl ParagraphStyle {
    /// Opening `<p>` tag carrying alignment and font declarations.
    pub fn open_tag(&self) -> String {
        let mut declarations = String::new();
        if let Some(ref size) = self.font_size {
            declarations.push_str(&format!("font-size:{};", size));
        }
        if let Some(ref family) = self.font_family {
            declarations.push_str(&format!("font-family:{}, {};", escape(family), FALLBACK_FONT));
        }

        if declarations.is_empty() {
            format!("<p align='{}'>", self.alignment)
        } else {
            format!("<p align='{}' style='{}'>", self.alignment, declarations)
        }
    }

    /// Wrap content in a styled paragraph.
    pub fn wrap(&self, content: &str) -> String {
        format!("{}{}</p>", self.open_tag(), content)
    }
}

/// Attributes recorded for an image entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAttrs {
    /// Block alignment of the image
    pub alignment: Alignment,
    /// Rendered width in pixels
    pub width: u32,
    /// Rendered height in pixels
    pub height: u32,
}

/// Text alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left alignment (default)
    #[default]
    Left,
    /// Center alignment
    Center,
    /// Right alignment
    Right,
    /// Justified alignment
    Justify,
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alignment::Left => write!(f, "left"),
            Alignment::Center => write!(f, "center"),
            Alignment::Right => write!(f, "right"),
            Alignment::Justify => write!(f, "justify"),
        }
    }
}

impl FromStr for Alignment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "left" => Ok(Alignment::Left),
            "center" => Ok(Alignment::Center),
            "right" => Ok(Alignment::Right),
            "justify" => Ok(Alignment::Justify),
            _ => Err(Error::invalid(
                "alignment",
                s,
                "expected 'left', 'center', 'right' or 'justify'",
            )),
        }
    }
}

/// One of the three entry collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    /// Page header
    Header,
    /// Page footer
    Footer,
    /// Main content
    Body,
}

impl Region {
    /// Lowercase region name.
    pub fn name(&self) -> &'static str {
        match self {
            Region::Header => "header",
            Region::Footer => "footer",
            Region::Body => "body",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Region {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "header" => Ok(Region::Header),
            "footer" => Ok(Region::Footer),
            "body" => Ok(Region::Body),
            _ => Err(Error::invalid(
                "section",
                s,
                "expected 'header', 'footer' or 'body'",
            )),
        }
    }
}

/// Header or footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// Page header
    Header,
    /// Page footer
    Footer,
}

impl From<Section> for Region {
    fn from(section: Section) -> Self {
        match section {
            Section::Header => Region::Header,
            Section::Footer => Region::Footer,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Region::from(*self).fmt(f)
    }
}

impl FromStr for Section {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "header" => Ok(Section::Header),
            "footer" => Ok(Section::Footer),
            _ => Err(Error::invalid("section", s, "expected 'header' or 'footer'")),
        }
    }
}

/// Declared content type of a header/footer entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextKind {
    /// Text that is escaped unless it turns out to be verified markup
    Text,
    /// Markup that must verify
    Html,
}

impl FromStr for TextKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(TextKind::Text),
            "html" => Ok(TextKind::Html),
            _ => Err(Error::invalid("content type", s, "expected 'text' or 'html'")),
        }
    }
}

/// Declared type of a body entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyKind {
    /// A paragraph in the current page
    Paragraph,
    /// Content that starts a new page
    Page,
}

impl FromStr for BodyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "paragraph" => Ok(BodyKind::Paragraph),
            "page" => Ok(BodyKind::Page),
            _ => Err(Error::invalid("type", s, "expected 'paragraph' or 'page'")),
        }
    }
}

/// Page number field layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PageNumberFormat {
    /// The bare page number (format 1)
    #[default]
    Number,
    /// "Page N of M" (format 2)
    PageOfTotal,
}

impl PageNumberFormat {
    /// Field code fragment for this format.
    pub fn field_markup(&self) -> &'static str {
        match self {
            PageNumberFormat::Number => " <span style='mso-field-code: PAGE '></span>",
            PageNumberFormat::PageOfTotal => {
                " Page <span style='mso-field-code: PAGE '></span> of <span style='mso-field-code: NUMPAGES '></span>"
            }
        }
    }
}

impl TryFrom<u8> for PageNumberFormat {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            1 => Ok(PageNumberFormat::Number),
            2 => Ok(PageNumberFormat::PageOfTotal),
            _ => Err(Error::invalid("format", value, "expected 1 or 2")),
        }
    }
}

impl From<PageNumberFormat> for u8 {
    fn from(format: PageNumberFormat) -> Self {
        match format {
            PageNumberFormat::Number => 1,
            PageNumberFormat::PageOfTotal => 2,
        }
    }
}

/// Optional presentation parameters for text, markup and page-number entries.
///
/// Every field is optional; `None` selects the documented default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryOptions {
    /// Position in the region; `None` and `Some(0)` both mean unordered
    pub position: Option<u32>,

    /// Alignment, default left
    pub alignment: Option<Alignment>,

    /// Font size such as `12pt`, `16px` or `1.2em`; default inherits
    pub font_size: Option<String>,

    /// Font family; default inherits
    pub font_family: Option<String>,
}

impl EntryOptions {
    /// Create new entry options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the position.
    pub fn at(mut self, position: u32) -> Self {
        self.position = Some(position);
        self
    }

    /// Set the alignment.
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    /// Set the font size.
    pub fn with_font_size(mut self, size: impl Into<String>) -> Self {
        self.font_size = Some(size.into());
        self
    }

    /// Set the font family.
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }
}

/// Optional parameters for image entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageOptions {
    /// Position in the region; `None` and `Some(0)` both mean unordered
    pub position: Option<u32>,

    /// Alignment, default left
    pub alignment: Option<Alignment>,

    /// Width in pixels; default is the intrinsic width
    pub width: Option<u32>,

    /// Height in pixels; default is the intrinsic height
    pub height: Option<u32>,
}

impl ImageOptions {
    /// Create new image options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the position.
    pub fn at(mut self, position: u32) -> Self {
        self.position = Some(position);
        self
    }

    /// Set the alignment.
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    /// Set the rendered size.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_tag_defaults() {
        let style = ParagraphStyle::default();
        assert_eq!(style.open_tag(), "<p align='left'>");
    }

    #[test]
    fn test_open_tag_with_fonts() {
        let style = ParagraphStyle {
            alignment: Alignment::Center,
            font_size: Some("14pt".into()),
            font_family: Some("Arial".into()),
        };
        assert_eq!(
            style.wrap("Hi"),
            "<p align='center' style='font-size:14pt;font-family:Arial, Times New Roman;'>Hi</p>"
        );
    }

    #[test]
    fn test_font_family_is_escaped() {
        let style = ParagraphStyle {
            font_family: Some("x'><script>".into()),
            ..Default::default()
        };
        assert!(!style.open_tag().contains("<script>"));
        assert!(style.open_tag().contains("x&#039;&gt;&lt;script&gt;"));
    }

    #[test]
    fn test_alignment_from_str() {
        assert_eq!("justify".parse::<Alignment>().unwrap(), Alignment::Justify);
        assert!("middle".parse::<Alignment>().is_err());
        assert!("Left".parse::<Alignment>().is_err());
    }

    #[test]
    fn test_region_and_section_parse() {
        assert_eq!("body".parse::<Region>().unwrap(), Region::Body);
        assert_eq!("footer".parse::<Section>().unwrap(), Section::Footer);
        assert!("body".parse::<Section>().is_err());
        assert_eq!(Region::from(Section::Header), Region::Header);
    }

    #[test]
    fn test_page_number_format() {
        assert_eq!(PageNumberFormat::try_from(1).unwrap(), PageNumberFormat::Number);
        assert_eq!(
            PageNumberFormat::try_from(2).unwrap(),
            PageNumberFormat::PageOfTotal
        );
        assert!(PageNumberFormat::try_from(3).is_err());
        assert!(PageNumberFormat::PageOfTotal
            .field_markup()
            .contains("NUMPAGES"));
    }

    #[test]
    fn test_content_kind_serde() {
        let json = serde_json::to_string(&ContentKind::Page { markup: true }).unwrap();
        assert_eq!(json, r#"{"type":"page","markup":true}"#);
        let kind: ContentKind = serde_json::from_str(r#"{"type":"plain_text"}"#).unwrap();
        assert_eq!(kind, ContentKind::PlainText);
    }

    #[test]
    fn test_entry_options_builder() {
        let options = EntryOptions::new()
            .at(3)
            .with_alignment(Alignment::Right)
            .with_font_size("12pt");
        assert_eq!(options.position, Some(3));
        assert_eq!(options.alignment, Some(Alignment::Right));
        assert_eq!(options.font_size.as_deref(), Some("12pt"));
        assert_eq!(options.font_family, None);
    }
}
