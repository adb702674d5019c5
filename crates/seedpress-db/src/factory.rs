//! Composition utilities for wiring `SQLite`-backed collaborators.
//!
//! This module is focused purely on construction and contains no domain
//! logic.

use std::path::PathBuf;
use std::sync::Arc;

use sqlx::SqlitePool;

use seedpress_core::Collaborators;

use crate::stores::{
    SqliteContentStore, SqliteMediaLibrary, SqlitePermissionStore, SqliteSettingsStore,
};

/// Build all `SQLite` collaborators from a pool.
///
/// This is the recommended way for entry points to obtain collaborators.
/// `environment` scopes the settings namespace; `uploads_dir` is where the
/// media library stores uploaded file content.
pub fn build_collaborators(
    pool: SqlitePool,
    environment: &str,
    uploads_dir: PathBuf,
) -> Collaborators {
    Collaborators::new(
        Arc::new(SqliteSettingsStore::new(pool.clone(), environment)),
        Arc::new(SqliteContentStore::new(pool.clone())),
        Arc::new(SqliteMediaLibrary::new(pool.clone(), uploads_dir)),
        Arc::new(SqlitePermissionStore::new(pool)),
    )
}
