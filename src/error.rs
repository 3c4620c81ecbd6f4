//! Error types for todoc library.

use std::io;
use std::time::Duration;
use thiserror::Error;

/// Result type alias for todoc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building a document.
///
/// Every variant is recoverable: a failed insertion leaves the content store
/// untouched and the builder stays usable.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading images or writing the document.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON error when loading a layout or manifest.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A parameter failed validation.
    #[error("Invalid value '{value}' for parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Offending value as given by the caller
        value: String,
        /// What was expected instead
        reason: String,
    },

    /// Another entry in the same region already occupies this position.
    #[error("Position {position} is already taken in the {region}")]
    DuplicatePosition {
        /// Region name ("header", "footer" or "body")
        region: &'static str,
        /// The contested position
        position: u32,
    },

    /// Well-formed markup that uses an element the output format does not know.
    #[error("Unsafe markup: unrecognized element <{0}>")]
    UnsafeMarkup(String),

    /// The image could not be fetched or decoded.
    #[error("Image resolution failed: {0}")]
    ImageResolution(String),

    /// The image resolver did not answer in time.
    #[error("Image resolution timed out after {0:?}")]
    ImageTimeout(Duration),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Shorthand for an [`Error::InvalidParameter`].
    pub fn invalid(name: &'static str, value: impl ToString, reason: impl Into<String>) -> Self {
        Error::InvalidParameter {
            name,
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}
