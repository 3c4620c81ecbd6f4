//! Document model: entries, the content store and page layout.
//!
//! Callers populate a [`ContentStore`] through its validated insertion
//! operations; the renderers only ever read it.

mod entry;
mod layout;
mod metadata;
mod store;

pub use entry::{
    Alignment, BodyKind, ContentKind, Entry, EntryOptions, ImageAttrs, ImageOptions,
    PageNumberFormat, ParagraphStyle, Region, Section, TextKind, FALLBACK_FONT,
};
pub use layout::{LayoutConfig, LayoutWarning};
pub use metadata::Metadata;
pub use store::ContentStore;
