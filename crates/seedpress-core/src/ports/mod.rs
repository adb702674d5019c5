//! Port definitions (trait abstractions) for the host content framework.
//!
//! Ports define the interfaces the seeding services expect from the
//! framework they populate. They contain no implementation details and use
//! only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` types in any signature
//! - No filesystem implementation details beyond [`FileDescriptor`](crate::domain::FileDescriptor)
//! - Every collaborator is injected; there is no ambient framework handle

pub mod content_store;
pub mod media_library;
pub mod permission_store;
pub mod settings_store;

use std::sync::Arc;
use thiserror::Error;

// Re-export port traits for convenience
pub use content_store::{ContentModel, ContentStore, CreatedEntry};
pub use media_library::MediaLibrary;
pub use permission_store::{PermissionStore, Role};
pub use settings_store::SettingsStore;

/// Container for all collaborator trait objects.
///
/// This struct provides a consistent way to wire collaborators across entry
/// points without coupling them to concrete implementations. The CLI and any
/// embedding application build one at their composition root and hand it to
/// the services.
#[derive(Clone)]
pub struct Collaborators {
    /// Namespaced key-value settings store holding the setup flag.
    pub settings: Arc<dyn SettingsStore>,
    /// Content store where author and post entries are created.
    pub content: Arc<dyn ContentStore>,
    /// Media library for asset lookup and upload.
    pub media: Arc<dyn MediaLibrary>,
    /// Role and permission records.
    pub permissions: Arc<dyn PermissionStore>,
}

impl Collaborators {
    /// Create a new collaborators container.
    pub fn new(
        settings: Arc<dyn SettingsStore>,
        content: Arc<dyn ContentStore>,
        media: Arc<dyn MediaLibrary>,
        permissions: Arc<dyn PermissionStore>,
    ) -> Self {
        Self {
            settings,
            content,
            media,
            permissions,
        }
    }
}

/// Domain-specific errors for collaborator operations.
///
/// This error type abstracts away storage implementation details (e.g., sqlx
/// errors) and provides a clean interface for services to handle failures.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The requested record was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage backend error (database, filesystem, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A constraint was violated (e.g., foreign key, unique constraint).
    #[error("Constraint violation: {0}")]
    Constraint(String),
}
