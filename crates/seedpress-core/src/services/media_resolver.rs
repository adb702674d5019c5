//! Find-or-upload media resolution.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::debug;

use super::SeedError;
use crate::bundle;
use crate::domain::{FileInfo, MediaAsset, dedupe_name};
use crate::ports::MediaLibrary;

/// Resolves logical file names to media assets, uploading bundle files only
/// when no asset with the same dedupe name exists yet.
#[derive(Clone)]
pub struct MediaResolver {
    library: Arc<dyn MediaLibrary>,
    uploads_dir: PathBuf,
}

impl MediaResolver {
    /// Create a resolver reading bundle files from `uploads_dir`.
    pub fn new(library: Arc<dyn MediaLibrary>, uploads_dir: PathBuf) -> Self {
        Self {
            library,
            uploads_dir,
        }
    }

    /// Resolve a batch of logical file names.
    ///
    /// Existing assets are collected first and uploads appended after them,
    /// so result order can differ from input order when hits and misses mix.
    pub async fn resolve(&self, file_names: &[&str]) -> Result<Vec<MediaAsset>, SeedError> {
        let mut existing = Vec::new();
        let mut uploaded = Vec::new();

        for file_name in file_names {
            let name = dedupe_name(file_name);
            if let Some(asset) = self.library.find_by_name(name).await? {
                debug!(name, id = asset.id, "reusing existing asset");
                existing.push(asset);
            } else {
                let descriptor = bundle::file_descriptor(&self.uploads_dir, file_name)?;
                let created = self
                    .library
                    .upload(descriptor, FileInfo::named(name))
                    .await?;
                let asset = created
                    .into_iter()
                    .next()
                    .ok_or_else(|| SeedError::EmptyUpload((*file_name).to_string()))?;
                debug!(name, id = asset.id, "uploaded new asset");
                uploaded.push(asset);
            }
        }

        existing.extend(uploaded);
        Ok(existing)
    }

    /// Resolve a single logical file name.
    pub async fn resolve_one(&self, file_name: &str) -> Result<MediaAsset, SeedError> {
        let mut assets = self.resolve(&[file_name]).await?;
        assets
            .pop()
            .ok_or_else(|| SeedError::EmptyUpload(file_name.to_string()))
    }
}
