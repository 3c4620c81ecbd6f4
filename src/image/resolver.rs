//! Stock image resolvers.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::{ImageResolver, ResolvedImage};
use crate::error::{Error, Result};

#[cfg(feature = "async")]
use std::time::Duration;

/// Serves images registered in memory, keyed by URL.
///
/// Useful when the embedding application already downloaded the images.
#[derive(Debug, Clone, Default)]
pub struct MemoryResolver {
    images: HashMap<String, Vec<u8>>,
}

impl MemoryResolver {
    /// Create an empty resolver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register image bytes for a URL.
    pub fn insert(&mut self, url: impl Into<String>, data: Vec<u8>) {
        self.images.insert(url.into(), data);
    }

    /// Register image bytes for a URL, builder style.
    pub fn with_image(mut self, url: impl Into<String>, data: Vec<u8>) -> Self {
        self.insert(url, data);
        self
    }

    /// Number of registered images.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Check if no image is registered.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

impl ImageResolver for MemoryResolver {
    async fn resolve(&self, url: &str) -> Result<ResolvedImage> {
        let data = self
            .images
            .get(url)
            .ok_or_else(|| Error::ImageResolution(format!("cannot reach image url {}", url)))?;
        ResolvedImage::from_bytes(data)
    }
}

/// Reads images from the local filesystem.
///
/// Accepts plain paths and `file://` URLs. Relative paths are resolved
/// against the base directory when one is set.
#[derive(Debug, Clone, Default)]
pub struct FileResolver {
    base_dir: Option<PathBuf>,
}

impl FileResolver {
    /// Resolve paths relative to the current directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve relative paths against `dir`.
    pub fn with_base_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: Some(dir.into()),
        }
    }

    /// Filesystem path for a reference.
    pub fn path_for(&self, url: &str) -> PathBuf {
        let raw = Path::new(url.strip_prefix("file://").unwrap_or(url));
        match self.base_dir {
            Some(ref base) if raw.is_relative() => base.join(raw),
            _ => raw.to_path_buf(),
        }
    }
}

#[cfg(feature = "async")]
async fn read_image(path: &Path) -> std::io::Result<Vec<u8>> {
    tokio::fs::read(path).await
}

#[cfg(not(feature = "async"))]
async fn read_image(path: &Path) -> std::io::Result<Vec<u8>> {
    std::fs::read(path)
}

impl ImageResolver for FileResolver {
    async fn resolve(&self, url: &str) -> Result<ResolvedImage> {
        let path = self.path_for(url);
        let data = read_image(&path)
            .await
            .map_err(|e| Error::ImageResolution(format!("{}: {}", path.display(), e)))?;
        ResolvedImage::from_bytes(&data)
    }

    fn accepts(&self, url: &str) -> bool {
        let trimmed = url.trim();
        !trimmed.is_empty() && (!trimmed.contains("://") || trimmed.starts_with("file://"))
    }
}

/// Bounds another resolver with a deadline.
#[cfg(feature = "async")]
#[derive(Debug, Clone)]
pub struct TimeoutResolver<R> {
    inner: R,
    timeout: Duration,
}

#[cfg(feature = "async")]
impl<R> TimeoutResolver<R> {
    /// Wrap `inner`, failing any resolution that takes longer than `timeout`.
    pub fn new(inner: R, timeout: Duration) -> Self {
        Self { inner, timeout }
    }

    /// The configured deadline.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[cfg(feature = "async")]
impl<R: ImageResolver + Sync> ImageResolver for TimeoutResolver<R> {
    async fn resolve(&self, url: &str) -> Result<ResolvedImage> {
        tokio::time::timeout(self.timeout, self.inner.resolve(url))
            .await
            .map_err(|_| Error::ImageTimeout(self.timeout))?
    }

    fn accepts(&self, url: &str) -> bool {
        self.inner.accepts(url)
    }
}
