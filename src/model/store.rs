//! The content store: three position-ordered entry collections.

use serde::{Deserialize, Serialize};

use super::entry::{
    Alignment, BodyKind, ContentKind, Entry, EntryOptions, ImageAttrs, ImageOptions,
    PageNumberFormat, ParagraphStyle, Region, Section, TextKind,
};
use crate::error::{Error, Result};
use crate::image::ImageResolver;
use crate::markup::{classify, rules, Classified};

/// Header, footer and body entries awaiting composition.
///
/// Every insertion validates all of its parameters before touching the
/// store. A rejected insertion leaves it exactly as it was.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentStore {
    header: Vec<Entry>,
    footer: Vec<Entry>,
    body: Vec<Entry>,
}

impl ContentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries of a region in insertion order.
    pub fn entries(&self, region: Region) -> &[Entry] {
        match region {
            Region::Header => &self.header,
            Region::Footer => &self.footer,
            Region::Body => &self.body,
        }
    }

    fn entries_mut(&mut self, region: Region) -> &mut Vec<Entry> {
        match region {
            Region::Header => &mut self.header,
            Region::Footer => &mut self.footer,
            Region::Body => &mut self.body,
        }
    }

    /// Number of entries in a region.
    pub fn len(&self, region: Region) -> usize {
        self.entries(region).len()
    }

    /// Number of entries across all regions.
    pub fn total_len(&self) -> usize {
        self.header.len() + self.footer.len() + self.body.len()
    }

    /// Check if all three regions are empty.
    pub fn is_empty(&self) -> bool {
        self.total_len() == 0
    }

    /// Check if a nonzero position is already used in a region.
    pub fn is_position_taken(&self, region: Region, position: u32) -> bool {
        position != 0 && self.entries(region).iter().any(|e| e.position == position)
    }

    /// Append a prepared entry, enforcing position uniqueness.
    pub fn insert(&mut self, region: Region, entry: Entry) -> Result<()> {
        self.check_position(region, Some(entry.position))?;
        self.entries_mut(region).push(entry);
        Ok(())
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.header.clear();
        self.footer.clear();
        self.body.clear();
    }

    /// Move all entries out, leaving the store empty.
    pub fn take(&mut self) -> ContentStore {
        std::mem::take(self)
    }

    /// Add a text or markup entry to the header or footer.
    ///
    /// Content is escaped unless it verifies as markup. `Html` content must
    /// at least look like markup; malformed markup is stored escaped.
    pub fn add_section_entry(
        &mut self,
        section: Section,
        kind: TextKind,
        content: &str,
        options: &EntryOptions,
    ) -> Result<()> {
        let region = Region::from(section);
        let result = self.try_add_section_entry(region, kind, content, options);
        reported("section entry", region, result)
    }

    fn try_add_section_entry(
        &mut self,
        region: Region,
        kind: TextKind,
        content: &str,
        options: &EntryOptions,
    ) -> Result<()> {
        let position = self.check_position(region, options.position)?;
        let style = check_style(options)?;
        check_content(content)?;

        if kind == TextKind::Html && !rules::looks_like_markup(content) {
            return Err(Error::invalid("content", content, "expected markup"));
        }

        let classified = classify(content)?;
        let kind = match classified {
            Classified::Markup(_) => ContentKind::InlineMarkup,
            Classified::Text(_) => ContentKind::PlainText,
        };

        let entry = Entry::new(kind, classified.into_content(), position).with_style(style);
        self.insert(region, entry)
    }

    /// Add a paragraph or a page to the body.
    pub fn add_body_entry(
        &mut self,
        kind: BodyKind,
        content: &str,
        options: &EntryOptions,
    ) -> Result<()> {
        let result = self.try_add_body_entry(kind, content, options);
        reported("body entry", Region::Body, result)
    }

    fn try_add_body_entry(
        &mut self,
        kind: BodyKind,
        content: &str,
        options: &EntryOptions,
    ) -> Result<()> {
        let position = self.check_position(Region::Body, options.position)?;
        let style = check_style(options)?;
        check_content(content)?;

        let classified = classify(content)?;
        let kind = match (kind, &classified) {
            (BodyKind::Paragraph, Classified::Markup(_)) => ContentKind::InlineMarkup,
            (BodyKind::Paragraph, Classified::Text(_)) => ContentKind::Paragraph,
            (BodyKind::Page, c) => ContentKind::Page {
                markup: c.is_markup(),
            },
        };

        let entry = Entry::new(kind, classified.into_content(), position).with_style(style);
        self.insert(Region::Body, entry)
    }

    /// Add a page number field to the header or footer.
    pub fn add_page_number(
        &mut self,
        section: Section,
        format: PageNumberFormat,
        options: &EntryOptions,
    ) -> Result<()> {
        let region = Region::from(section);
        let result = self.try_add_page_number(region, format, options);
        reported("page number", region, result)
    }

    fn try_add_page_number(
        &mut self,
        region: Region,
        format: PageNumberFormat,
        options: &EntryOptions,
    ) -> Result<()> {
        let position = self.check_position(region, options.position)?;
        if options.alignment == Some(Alignment::Justify) {
            return Err(Error::invalid(
                "alignment",
                Alignment::Justify,
                "expected 'left', 'center' or 'right'",
            ));
        }
        let style = check_style(options)?;

        let content = style.wrap(format.field_markup());
        let entry = Entry::new(ContentKind::PageNumber, content, position).with_style(style);
        self.insert(region, entry)
    }

    /// Resolve an image and add it to any region.
    ///
    /// Parameters are validated before the resolver is called. If the
    /// resolver fails no entry is added.
    pub async fn add_image<R: ImageResolver>(
        &mut self,
        region: Region,
        url: &str,
        options: &ImageOptions,
        resolver: &R,
    ) -> Result<()> {
        let checked = self.check_image(region, url, options, resolver);
        let position = reported("image", region, checked)?;

        let resolved = reported("image", region, resolver.resolve(url).await)?;

        let alignment = options.alignment.unwrap_or_default();
        let width = options.width.unwrap_or(resolved.width);
        let height = options.height.unwrap_or(resolved.height);
        let entry = Entry::new(
            ContentKind::Image,
            resolved.to_markup(alignment, width, height),
            position,
        )
        .with_style(ParagraphStyle {
            alignment,
            ..Default::default()
        })
        .with_image(ImageAttrs {
            alignment,
            width,
            height,
        });

        log::debug!("Resolved {} image {}x{} for {}", resolved.mime_type, width, height, region);
        reported("image", region, self.insert(region, entry))
    }

    fn check_image<R: ImageResolver>(
        &self,
        region: Region,
        url: &str,
        options: &ImageOptions,
        resolver: &R,
    ) -> Result<u32> {
        let position = self.check_position(region, options.position)?;
        check_pixels("width", options.width)?;
        check_pixels("height", options.height)?;
        if !resolver.accepts(url) {
            return Err(Error::invalid("url", url, "expected a reachable image url"));
        }
        Ok(position)
    }

    fn check_position(&self, region: Region, position: Option<u32>) -> Result<u32> {
        let position = position.unwrap_or(0);
        if self.is_position_taken(region, position) {
            return Err(Error::DuplicatePosition {
                region: region.name(),
                position,
            });
        }
        Ok(position)
    }
}

/// Log a rejected insertion and hand the result back.
fn reported<T>(operation: &str, region: Region, result: Result<T>) -> Result<T> {
    if let Err(ref e) = result {
        log::warn!("Rejected {} in {}: {}", operation, region, e);
    }
    result
}

fn check_content(content: &str) -> Result<()> {
    if content.trim().is_empty() {
        return Err(Error::invalid("content", content, "expected non-empty text"));
    }
    Ok(())
}

fn check_pixels(name: &'static str, value: Option<u32>) -> Result<()> {
    match value {
        Some(0) => Err(Error::invalid(name, 0, "expected a positive number of pixels")),
        _ => Ok(()),
    }
}

fn check_style(options: &EntryOptions) -> Result<ParagraphStyle> {
    if let Some(ref size) = options.font_size {
        if !rules::is_valid_font_size(size) {
            return Err(Error::invalid(
                "font size",
                size,
                "expected a number followed by 'pt', 'px' or 'em'",
            ));
        }
    }
    if let Some(ref family) = options.font_family {
        if family.trim().is_empty() {
            return Err(Error::invalid("font family", family, "expected a font name"));
        }
    }

    Ok(ParagraphStyle {
        alignment: options.alignment.unwrap_or_default(),
        font_size: options.font_size.as_ref().map(|s| s.trim().to_string()),
        font_family: options.font_family.as_ref().map(|s| s.trim().to_string()),
    })
}
