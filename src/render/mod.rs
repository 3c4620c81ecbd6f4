//! Composition of stored entries into the final document markup.
//!
//! Composers are pure functions over a snapshot of entries. Each region is
//! ordered by position with a stable sort, so unordered entries keep their
//! insertion order.

mod body;
mod document;
mod json;
mod result;
mod section;

pub use body::{compose_body, compose_body_with_stats, LINE_BREAK, PAGE_BREAK};
pub use document::{
    assemble, file_name_or_default, to_bytes, ComposedParts, DEFAULT_FILE_NAME, MIME_TYPE,
};
pub use json::{to_json, JsonFormat};
pub use result::{BuildStats, BuiltDocument};
pub use section::compose_section;

use crate::model::Entry;

/// Entries sorted ascending by position, ties kept in insertion order.
fn ordered(entries: &[Entry]) -> Vec<&Entry> {
    let mut sorted: Vec<&Entry> = entries.iter().collect();
    sorted.sort_by_key(|e| e.position);
    sorted
}
