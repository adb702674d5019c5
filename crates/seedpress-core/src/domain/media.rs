//! Media types.
//!
//! Assets are deduplicated by their logical name: the bundle file name with
//! everything from the first dot stripped. At most one asset per dedupe name
//! is ever created by the seeding logic.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A reference to a media file in seed data.
///
/// Only a [`FileName`](MediaReference::FileName) triggers lookup/upload; a
/// reference that already carries an id is treated as "nothing to upload"
/// and yields no connection.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MediaReference {
    /// Logical file name in the bundle's uploads directory.
    FileName(String),
    /// An asset that already exists in the media library.
    Resolved { id: i64 },
}

/// An asset record stored in the media library.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaAsset {
    pub id: i64,
    /// Dedupe/display name (file name without extension).
    pub name: String,
    /// Public URL the asset is served from.
    pub url: String,
    /// Content type, empty when the extension was not recognized.
    pub mime: String,
    pub size_bytes: i64,
}

/// A local file to be uploaded into the media library.
#[derive(Debug, Clone)]
pub struct FileDescriptor {
    pub path: PathBuf,
    pub original_file_name: String,
    pub size_bytes: u64,
    /// Content type looked up from the file extension.
    pub mime: String,
}

/// Display metadata attached to an upload.
#[derive(Debug, Clone)]
pub struct FileInfo {
    pub name: String,
    pub alternative_text: String,
    pub caption: String,
}

impl FileInfo {
    /// Use one name for display name, alternative text, and caption.
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            alternative_text: name.to_string(),
            caption: name.to_string(),
        }
    }
}

/// Derive the dedupe name for a bundle file: everything before the first dot.
pub fn dedupe_name(file_name: &str) -> &str {
    file_name.split('.').next().unwrap_or(file_name)
}
