//! JSON snapshots of pending content.

use crate::error::Result;
use crate::model::ContentStore;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Serialize the entries of a store.
pub fn to_json(store: &ContentStore, format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(store)?,
        JsonFormat::Compact => serde_json::to_string(store)?,
    };
    Ok(json)
}
