//! Permission store trait definition.

use async_trait::async_trait;

use super::StoreError;

/// A role record in the host framework's permission system.
#[derive(Debug, Clone)]
pub struct Role {
    pub id: i64,
    pub kind: String,
}

/// Role lookup and permission creation.
///
/// Permission actions are keyed `api::<model>.<model>.<action>`. Creation is
/// not idempotent on its own; the seed runner's setup flag is the only guard
/// against duplicates.
#[async_trait]
pub trait PermissionStore: Send + Sync {
    /// Look up a role by its kind (e.g. `public`).
    async fn find_role_by_kind(&self, kind: &str) -> Result<Role, StoreError>;

    /// Create a permission record granting `action` to `role_id`.
    async fn create_permission(&self, action: &str, role_id: i64) -> Result<(), StoreError>;
}
