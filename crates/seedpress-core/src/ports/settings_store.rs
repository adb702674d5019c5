//! Settings store trait definition.
//!
//! A single namespaced key-value store. The seeding logic uses exactly one
//! key in it: the "has this run before" setup flag. Implementations carry
//! the environment namespace internally.

use async_trait::async_trait;

use super::StoreError;

/// Namespaced key-value settings store.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Read a value, `None` when the key has never been written.
    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, StoreError>;

    /// Write a value, overwriting any previous one.
    async fn set(&self, key: &str, value: serde_json::Value) -> Result<(), StoreError>;
}
