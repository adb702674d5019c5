//! `SQLite` store implementations of the collaborator ports.

pub mod sqlite_content_store;
pub mod sqlite_media_library;
pub mod sqlite_permission_store;
pub mod sqlite_settings_store;

pub use sqlite_content_store::SqliteContentStore;
pub use sqlite_media_library::SqliteMediaLibrary;
pub use sqlite_permission_store::SqlitePermissionStore;
pub use sqlite_settings_store::SqliteSettingsStore;
