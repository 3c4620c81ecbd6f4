//! The document builder facade.

use crate::error::Result;
use crate::image::ImageResolver;
use crate::model::{
    BodyKind, ContentStore, EntryOptions, ImageOptions, LayoutConfig, Metadata, PageNumberFormat,
    Region, Section, TextKind,
};
use crate::render::{self, BuildStats, BuiltDocument, ComposedParts, JsonFormat};
use crate::save::Saver;

/// Collects header, footer and body content and builds a document.
///
/// Each builder owns its content; independent builders share nothing.
/// Insertion methods take `&mut self`, so a build can never start while an
/// image insertion on the same builder is still pending.
///
/// # Example
///
/// ```
/// use todoc::{BodyKind, DocBuilder, EntryOptions, PageNumberFormat, Section, TextKind};
///
/// let mut builder = DocBuilder::new();
/// builder.add_section_entry(Section::Header, TextKind::Text, "Quarterly report", &EntryOptions::new())?;
/// builder.add_page_number(Section::Footer, PageNumberFormat::PageOfTotal, &EntryOptions::new())?;
/// builder.add_body_entry(BodyKind::Paragraph, "Revenue grew.", &EntryOptions::new().at(1))?;
///
/// let doc = builder.build(Some("report"), None);
/// assert_eq!(doc.file_name, "report.doc");
/// assert!(doc.markup().contains("<p align='left'>Revenue grew.</p>"));
/// # Ok::<(), todoc::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct DocBuilder {
    store: ContentStore,
    metadata: Metadata,
    layout: LayoutConfig,
}

impl DocBuilder {
    /// Create an empty builder with the default layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the layout used when `build` is not given one.
    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    /// Set the document properties.
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Pending content.
    pub fn store(&self) -> &ContentStore {
        &self.store
    }

    /// Document properties.
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Mutable document properties.
    pub fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }

    /// Default layout.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Add a text or markup entry to the header or footer.
    pub fn add_section_entry(
        &mut self,
        section: Section,
        kind: TextKind,
        content: &str,
        options: &EntryOptions,
    ) -> Result<()> {
        self.store.add_section_entry(section, kind, content, options)
    }

    /// Add a paragraph or a page to the body.
    pub fn add_body_entry(
        &mut self,
        kind: BodyKind,
        content: &str,
        options: &EntryOptions,
    ) -> Result<()> {
        self.store.add_body_entry(kind, content, options)
    }

    /// Resolve an image and add it to any region.
    pub async fn add_image<R: ImageResolver>(
        &mut self,
        region: Region,
        url: &str,
        options: &ImageOptions,
        resolver: &R,
    ) -> Result<()> {
        self.store.add_image(region, url, options, resolver).await
    }

    /// Add a page number field to the header or footer.
    pub fn add_page_number(
        &mut self,
        section: Section,
        format: PageNumberFormat,
        options: &EntryOptions,
    ) -> Result<()> {
        self.store.add_page_number(section, format, options)
    }

    /// Discard all pending content.
    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// Dump pending content as JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.store, format)
    }

    /// Compose all pending content into a document and clear the builder.
    ///
    /// `name` defaults to `document.doc`; `.doc` is appended when missing.
    /// `layout` overrides the builder's layout for this build. Invalid layout
    /// values fall back to defaults and are reported in
    /// [`BuiltDocument::warnings`].
    pub fn build(&mut self, name: Option<&str>, layout: Option<&LayoutConfig>) -> BuiltDocument {
        let store = self.store.take();
        let (layout, warnings) = layout.unwrap_or(&self.layout).validated();

        let mut stats = BuildStats {
            header_entries: store.len(Region::Header) as u32,
            footer_entries: store.len(Region::Footer) as u32,
            body_entries: store.len(Region::Body) as u32,
            ..Default::default()
        };
        let parts = ComposedParts {
            header: render::compose_section(store.entries(Region::Header)),
            footer: render::compose_section(store.entries(Region::Footer)),
            body: render::compose_body_with_stats(store.entries(Region::Body), &mut stats),
        };

        let markup = render::assemble(&parts, &layout, &self.metadata);
        let file_name = render::file_name_or_default(name);
        log::debug!(
            "Built {}: {} entries, {} bytes of markup",
            file_name,
            stats.total_entries(),
            markup.len()
        );

        BuiltDocument {
            file_name,
            mime_type: render::MIME_TYPE,
            bytes: render::to_bytes(&markup),
            stats,
            warnings,
        }
    }

    /// Build the document and hand it to `saver`.
    ///
    /// The builder is cleared even when saving fails.
    pub fn build_and_save<S: Saver + ?Sized>(
        &mut self,
        name: Option<&str>,
        layout: Option<&LayoutConfig>,
        saver: &S,
    ) -> Result<(BuiltDocument, std::path::PathBuf)> {
        let doc = self.build(name, layout);
        let path = saver.save(&doc.bytes, &doc.file_name)?;
        Ok((doc, path))
    }
}
