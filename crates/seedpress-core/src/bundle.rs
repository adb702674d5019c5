//! Seed bundle loading.
//!
//! A bundle is a directory holding `data.json` (two ordered sequences,
//! `authors` and `posts`) and an `uploads/` directory with the referenced
//! media files by logical name.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::{AuthorRecord, FileDescriptor, PostRecord};

/// Errors raised while reading the seed bundle from disk.
#[derive(Debug, Error)]
pub enum BundleError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid seed data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The deserialized contents of `data.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedData {
    pub authors: Vec<AuthorRecord>,
    pub posts: Vec<PostRecord>,
}

/// A seed bundle rooted at a local directory.
#[derive(Debug, Clone)]
pub struct SeedBundle {
    data: SeedData,
    root: PathBuf,
}

impl SeedBundle {
    /// Load `data.json` from `root`.
    pub fn load(root: impl Into<PathBuf>) -> Result<Self, BundleError> {
        let root = root.into();
        let data_path = root.join("data.json");
        let raw = std::fs::read_to_string(&data_path).map_err(|source| BundleError::Io {
            path: data_path,
            source,
        })?;
        let data = serde_json::from_str(&raw)?;
        Ok(Self { data, root })
    }

    /// Build a bundle from already-deserialized data (used by embedders that
    /// ship seed data compiled in).
    pub fn from_data(data: SeedData, root: impl Into<PathBuf>) -> Self {
        Self {
            data,
            root: root.into(),
        }
    }

    pub fn authors(&self) -> &[AuthorRecord] {
        &self.data.authors
    }

    pub fn posts(&self) -> &[PostRecord] {
        &self.data.posts
    }

    /// Directory holding the bundled media files.
    pub fn uploads_dir(&self) -> PathBuf {
        self.root.join("uploads")
    }
}

/// Describe a bundled media file: size from filesystem metadata,
/// content type from the file extension (empty when unrecognized).
pub fn file_descriptor(uploads_dir: &Path, file_name: &str) -> Result<FileDescriptor, BundleError> {
    let path = uploads_dir.join(file_name);
    let metadata = std::fs::metadata(&path).map_err(|source| BundleError::Io {
        path: path.clone(),
        source,
    })?;
    let mime = mime_guess::from_path(&path)
        .first_raw()
        .unwrap_or_default()
        .to_string();

    Ok(FileDescriptor {
        path,
        original_file_name: file_name.to_string(),
        size_bytes: metadata.len(),
        mime,
    })
}
