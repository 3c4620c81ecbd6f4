//! # todoc
//!
//! Build Word-compatible documents from positioned header, footer and body
//! content.
//!
//! Content is added through validated insertion operations and composed
//! into a single self-contained HTML document that word processors open as
//! a `.doc` file.
//!
//! ## Quick Start
//!
//! ```
//! use todoc::{Alignment, BodyKind, DocBuilder, EntryOptions, PageNumberFormat, Section, TextKind};
//!
//! fn main() -> todoc::Result<()> {
//!     let mut builder = DocBuilder::new();
//!
//!     builder.add_section_entry(
//!         Section::Header,
//!         TextKind::Text,
//!         "ACME Corp.",
//!         &EntryOptions::new().with_alignment(Alignment::Right),
//!     )?;
//!     builder.add_page_number(Section::Footer, PageNumberFormat::Number, &EntryOptions::new())?;
//!
//!     builder.add_body_entry(BodyKind::Paragraph, "Intro & scope", &EntryOptions::new().at(1))?;
//!     builder.add_body_entry(BodyKind::Page, "<h1>Appendix</h1>", &EntryOptions::new().at(2))?;
//!
//!     let doc = builder.build(Some("report"), None);
//!     assert_eq!(doc.mime_type, "application/msword");
//!     assert!(doc.markup().contains("Intro &amp; scope"));
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Position ordering**: entries sort by position; unordered entries keep insertion order
//! - **Markup safety**: only well-formed, recognized markup is embedded verbatim
//! - **Pagination**: page entries start new pages with hard breaks
//! - **Images**: embedded as data URIs through a pluggable [`ImageResolver`]
//! - **Layout**: page size and margins, validated with fallbacks

pub mod builder;
pub mod error;
pub mod image;
pub mod markup;
pub mod model;
pub mod render;
pub mod save;

// Re-export commonly used types
pub use builder::DocBuilder;
pub use error::{Error, Result};
pub use image::{FileResolver, ImageResolver, MemoryResolver, ResolvedImage};
pub use markup::{classify, escape, validate, Classified, Validation};
pub use model::{
    Alignment, BodyKind, ContentKind, ContentStore, Entry, EntryOptions, ImageOptions,
    LayoutConfig, LayoutWarning, Metadata, PageNumberFormat, ParagraphStyle, Region, Section,
    TextKind,
};
pub use render::{BuildStats, BuiltDocument, JsonFormat};
pub use save::{DirectorySaver, Saver};

#[cfg(feature = "async")]
pub use image::TimeoutResolver;

/// Build a document containing one paragraph per text, in order.
///
/// # Example
///
/// ```
/// let doc = todoc::from_paragraphs(["First", "Second"], Some("notes"))?;
/// assert_eq!(doc.file_name, "notes.doc");
/// assert_eq!(doc.stats.paragraph_count, 2);
/// # Ok::<(), todoc::Error>(())
/// ```
pub fn from_paragraphs<'a, I>(paragraphs: I, name: Option<&str>) -> Result<BuiltDocument>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut builder = DocBuilder::new();
    for text in paragraphs {
        builder.add_body_entry(BodyKind::Paragraph, text, &EntryOptions::new())?;
    }
    Ok(builder.build(name, None))
}
