//! Media library trait definition.

use async_trait::async_trait;

use super::StoreError;
use crate::domain::{FileDescriptor, FileInfo, MediaAsset};

/// Asset lookup and upload.
///
/// `find_by_name` matches the dedupe name exactly (file name without
/// extension), which is how repeated seed runs avoid duplicate uploads.
#[async_trait]
pub trait MediaLibrary: Send + Sync {
    /// Look up an existing asset by its dedupe name.
    async fn find_by_name(&self, name: &str) -> Result<Option<MediaAsset>, StoreError>;

    /// Upload a local file, returning the created asset records.
    async fn upload(
        &self,
        file: FileDescriptor,
        info: FileInfo,
    ) -> Result<Vec<MediaAsset>, StoreError>;
}
