//! Image resolution: turning an image reference into embeddable markup.
//!
//! Fetching and decoding images is not part of document composition. The
//! builder only needs "given a URL, eventually produce an embeddable image
//! with its intrinsic size, or fail", which is the [`ImageResolver`] trait.

pub mod detect;
mod resolver;

pub use resolver::{FileResolver, MemoryResolver};

#[cfg(feature = "async")]
pub use resolver::TimeoutResolver;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::future::Future;

use crate::error::{Error, Result};
use crate::markup::rules;
use crate::model::Alignment;

/// Asynchronous source of embeddable images.
///
/// # Example
///
/// ```
/// use todoc::image::{ImageResolver, ResolvedImage};
///
/// struct Placeholder(Vec<u8>);
///
/// impl ImageResolver for Placeholder {
///     async fn resolve(&self, _url: &str) -> todoc::Result<ResolvedImage> {
///         ResolvedImage::from_bytes(&self.0)
///     }
/// }
/// ```
pub trait ImageResolver {
    /// Fetch and encode the image at `url`.
    fn resolve(&self, url: &str) -> impl Future<Output = Result<ResolvedImage>> + Send;

    /// Whether `url` is a reference this resolver can handle.
    ///
    /// Defaults to the remote URL rule in [`rules::is_valid_url`].
    fn accepts(&self, url: &str) -> bool {
        rules::is_valid_url(url)
    }
}

/// An image ready to embed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedImage {
    /// `data:` URI carrying the encoded image
    pub data_uri: String,

    /// MIME type (e.g., "image/png")
    pub mime_type: String,

    /// Intrinsic width in pixels
    pub width: u32,

    /// Intrinsic height in pixels
    pub height: u32,
}

impl ResolvedImage {
    /// Sniff format and size from raw bytes and encode them as a data URI.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let mime_type = detect::detect_mime_type(data)
            .ok_or_else(|| Error::ImageResolution("unrecognized image format".into()))?;
        let (width, height) = detect::dimensions(data)
            .ok_or_else(|| Error::ImageResolution("image has no readable dimensions".into()))?;

        Ok(Self {
            data_uri: format!("data:{};base64,{}", mime_type, STANDARD.encode(data)),
            mime_type: mime_type.to_string(),
            width,
            height,
        })
    }

    /// Image block markup. Requested dimensions win over intrinsic ones.
    pub fn to_markup(&self, alignment: Alignment, width: u32, height: u32) -> String {
        format!(
            "<div align='{}'><img width='{}' height='{}' src='{}' /></div>",
            alignment, width, height, self.data_uri
        )
    }
}
