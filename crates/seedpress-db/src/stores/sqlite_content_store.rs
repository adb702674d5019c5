//! `SQLite` implementation of the `ContentStore` trait.

use async_trait::async_trait;
use sqlx::SqlitePool;

use seedpress_core::{ContentModel, ContentStore, CreatedEntry, StoreError};

/// `SQLite` implementation of the `ContentStore` trait.
///
/// Entries are stored as JSON documents in a single table keyed by the
/// fully-qualified model uid; the rowid is the assigned entry id.
pub struct SqliteContentStore {
    pool: SqlitePool,
}

impl SqliteContentStore {
    /// Create a new `SQLite` content store.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Count entries of one model, used by status reporting and tests.
    pub async fn count(&self, model: ContentModel) -> Result<i64, StoreError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM entries WHERE model = ?")
            .bind(model.uid())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| StoreError::Storage(e.to_string()))?;
        Ok(count)
    }
}

#[async_trait]
impl ContentStore for SqliteContentStore {
    async fn create(
        &self,
        model: ContentModel,
        data: serde_json::Value,
    ) -> Result<CreatedEntry, StoreError> {
        let json = serde_json::to_string(&data)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        let result = sqlx::query("INSERT INTO entries (model, data) VALUES (?, ?)")
            .bind(model.uid())
            .bind(&json)
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::Storage(e.to_string()))?;

        Ok(CreatedEntry {
            id: result.last_insert_rowid(),
        })
    }
}
