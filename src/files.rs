//! Root-scoped file access for the `/files/` routes.
//!
//! Every name coming from a URL is joined onto the configured root. Names
//! that could climb out of the root (`..`, absolute paths, drive prefixes)
//! are refused before the filesystem is touched.

use std::io;
use std::path::{Component, Path, PathBuf};

use tokio::fs::{self, File};

#[derive(Debug, thiserror::Error)]
pub enum FileError {
    #[error("no file directory configured")]
    NoRoot,
    #[error("path escapes the file directory: {0}")]
    OutsideRoot(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// The directory that `/files/{name}` resolves against.
#[derive(Debug, Clone, Default)]
pub struct FileRoot {
    root: Option<PathBuf>,
}

impl FileRoot {
    pub fn new(root: Option<PathBuf>) -> Self {
        Self { root }
    }

    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    /// Maps a URL-derived name to a path inside the root.
    pub fn resolve(&self, name: &str) -> Result<PathBuf, FileError> {
        let root = self.root.as_ref().ok_or(FileError::NoRoot)?;

        let relative = Path::new(name);
        let contained = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        if !contained {
            return Err(FileError::OutsideRoot(name.to_string()));
        }

        Ok(root.join(relative))
    }

    /// Reads the whole file. Any failure, including the name pointing at a
    /// directory, comes back as an error.
    pub async fn read(&self, name: &str) -> Result<Vec<u8>, FileError> {
        let path = self.resolve(name)?;
        Ok(fs::read(path).await?)
    }

    /// Creates the file, truncating it if it already exists.
    pub async fn create(&self, name: &str) -> Result<File, FileError> {
        let path = self.resolve(name)?;
        Ok(File::create(path).await?)
    }
}
