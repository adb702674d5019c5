//! `SQLite` implementation of the `PermissionStore` trait.

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};

use seedpress_core::{PermissionStore, Role, StoreError};

/// `SQLite` implementation of the `PermissionStore` trait.
pub struct SqlitePermissionStore {
    pool: SqlitePool,
}

impl SqlitePermissionStore {
    /// Create a new `SQLite` permission store.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Count permission records for a role, used by tests.
    pub async fn count_for_role(&self, role_id: i64) -> Result<i64, StoreError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM permissions WHERE role_id = ?")
            .bind(role_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| StoreError::Storage(e.to_string()))?;
        Ok(count)
    }
}

#[async_trait]
impl PermissionStore for SqlitePermissionStore {
    async fn find_role_by_kind(&self, kind: &str) -> Result<Role, StoreError> {
        let row = sqlx::query("SELECT id, kind FROM roles WHERE kind = ?")
            .bind(kind)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StoreError::Storage(e.to_string()))?;

        row.map(|r| Role {
            id: r.get("id"),
            kind: r.get("kind"),
        })
        .ok_or_else(|| StoreError::NotFound(format!("role kind={kind}")))
    }

    async fn create_permission(&self, action: &str, role_id: i64) -> Result<(), StoreError> {
        sqlx::query("INSERT INTO permissions (action, role_id) VALUES (?, ?)")
            .bind(action)
            .bind(role_id)
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::Storage(e.to_string()))?;

        Ok(())
    }
}
