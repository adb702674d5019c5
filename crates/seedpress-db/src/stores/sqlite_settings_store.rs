//! `SQLite` implementation of the `SettingsStore` trait.

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};

use seedpress_core::{SettingsStore, StoreError};

/// `SQLite` implementation of the `SettingsStore` trait.
///
/// Values are stored as JSON strings in a key-value table, scoped by an
/// environment namespace so that e.g. `development` and `production` carry
/// independent setup flags.
pub struct SqliteSettingsStore {
    pool: SqlitePool,
    namespace: String,
}

impl SqliteSettingsStore {
    /// Create a settings store scoped to `environment`.
    pub fn new(pool: SqlitePool, environment: &str) -> Self {
        Self {
            pool,
            namespace: format!("{environment}.setup"),
        }
    }
}

#[async_trait]
impl SettingsStore for SqliteSettingsStore {
    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, StoreError> {
        let row = sqlx::query("SELECT value FROM settings_kv WHERE namespace = ? AND key = ?")
            .bind(&self.namespace)
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StoreError::Storage(e.to_string()))?;

        match row {
            Some(r) => {
                let json: String = r.get("value");
                serde_json::from_str(&json)
                    .map(Some)
                    .map_err(|e| StoreError::Serialization(e.to_string()))
            }
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: serde_json::Value) -> Result<(), StoreError> {
        let json = serde_json::to_string(&value)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        let updated_at = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();

        sqlx::query(
            "INSERT OR REPLACE INTO settings_kv (namespace, key, value, updated_at) VALUES (?, ?, ?, ?)",
        )
        .bind(&self.namespace)
        .bind(key)
        .bind(&json)
        .bind(&updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::Storage(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::setup_test_database;

    #[tokio::test]
    async fn test_get_returns_none_when_unset() {
        let pool = setup_test_database().await.unwrap();
        let store = SqliteSettingsStore::new(pool, "development");

        assert!(store.get("initHasRun").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_set_and_get() {
        let pool = setup_test_database().await.unwrap();
        let store = SqliteSettingsStore::new(pool, "development");

        store
            .set("initHasRun", serde_json::Value::Bool(true))
            .await
            .unwrap();

        let value = store.get("initHasRun").await.unwrap();
        assert_eq!(value, Some(serde_json::Value::Bool(true)));
    }

    #[tokio::test]
    async fn test_namespaces_are_isolated() {
        let pool = setup_test_database().await.unwrap();
        let dev = SqliteSettingsStore::new(pool.clone(), "development");
        let prod = SqliteSettingsStore::new(pool, "production");

        dev.set("initHasRun", serde_json::Value::Bool(true))
            .await
            .unwrap();

        assert!(prod.get("initHasRun").await.unwrap().is_none());
    }
}
