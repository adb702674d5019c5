//! `SQLite` implementation of the `MediaLibrary` trait.

use std::path::PathBuf;

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};
use tracing::debug;

use seedpress_core::{FileDescriptor, FileInfo, MediaAsset, MediaLibrary, StoreError};

/// `SQLite` implementation of the `MediaLibrary` trait.
///
/// Asset metadata lives in the database; the file content is copied into a
/// managed uploads directory on upload.
pub struct SqliteMediaLibrary {
    pool: SqlitePool,
    uploads_dir: PathBuf,
}

impl SqliteMediaLibrary {
    /// Create a media library storing file content under `uploads_dir`.
    pub fn new(pool: SqlitePool, uploads_dir: PathBuf) -> Self {
        Self { pool, uploads_dir }
    }
}

#[async_trait]
impl MediaLibrary for SqliteMediaLibrary {
    async fn find_by_name(&self, name: &str) -> Result<Option<MediaAsset>, StoreError> {
        let row = sqlx::query(
            "SELECT id, name, url, mime, size_bytes FROM media_files WHERE name = ?",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError::Storage(e.to_string()))?;

        Ok(row.map(|r| MediaAsset {
            id: r.get("id"),
            name: r.get("name"),
            url: r.get("url"),
            mime: r.get("mime"),
            size_bytes: r.get("size_bytes"),
        }))
    }

    async fn upload(
        &self,
        file: FileDescriptor,
        info: FileInfo,
    ) -> Result<Vec<MediaAsset>, StoreError> {
        tokio::fs::create_dir_all(&self.uploads_dir)
            .await
            .map_err(|e| StoreError::Storage(e.to_string()))?;

        let target = self.uploads_dir.join(&file.original_file_name);
        tokio::fs::copy(&file.path, &target)
            .await
            .map_err(|e| StoreError::Storage(e.to_string()))?;

        let url = format!("/uploads/{}", file.original_file_name);
        let size_bytes = i64::try_from(file.size_bytes).unwrap_or(i64::MAX);

        let result = sqlx::query(
            r#"
            INSERT INTO media_files (name, alternative_text, caption, url, mime, size_bytes)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&info.name)
        .bind(&info.alternative_text)
        .bind(&info.caption)
        .bind(&url)
        .bind(&file.mime)
        .bind(size_bytes)
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::Storage(e.to_string()))?;

        debug!(name = %info.name, target = %target.display(), "media file uploaded");

        Ok(vec![MediaAsset {
            id: result.last_insert_rowid(),
            name: info.name,
            url,
            mime: file.mime,
            size_bytes,
        }])
    }
}
