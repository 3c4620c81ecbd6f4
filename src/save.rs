//! Persisting finished documents.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Destination for finished document bytes.
pub trait Saver {
    /// Persist `bytes` under the suggested `file_name` and report where
    /// they ended up.
    fn save(&self, bytes: &[u8], file_name: &str) -> Result<PathBuf>;
}

/// Writes documents into a directory.
#[derive(Debug, Clone)]
pub struct DirectorySaver {
    dir: PathBuf,
    create_dir: bool,
}

impl DirectorySaver {
    /// Save into `dir`, which must exist.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            create_dir: false,
        }
    }

    /// Create the directory (and parents) when missing.
    pub fn create_missing(mut self) -> Self {
        self.create_dir = true;
        self
    }

    /// Target directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl Saver for DirectorySaver {
    fn save(&self, bytes: &[u8], file_name: &str) -> Result<PathBuf> {
        // Only the final component is used so a name cannot leave the directory.
        let name = Path::new(file_name)
            .file_name()
            .ok_or_else(|| Error::invalid("file name", file_name, "expected a file name"))?;

        if self.create_dir {
            fs::create_dir_all(&self.dir)?;
        }

        let path = self.dir.join(name);
        fs::write(&path, bytes)?;
        log::info!("Saved {} bytes to {}", bytes.len(), path.display());
        Ok(path)
    }
}
