//! `SQLite` implementations of the seedpress collaborator ports.
//!
//! This crate is the storage adapter: `stores` holds one implementation per
//! port, `setup` creates the schema, and `factory` assembles a
//! [`Collaborators`](seedpress_core::Collaborators) container for entry
//! points.

#![deny(unsafe_code)]

pub mod factory;
pub mod setup;
pub mod stores;

// Re-export factory and setup for convenient access
pub use factory::build_collaborators;
pub use setup::{setup_database, setup_test_database};

// Re-export store implementations
pub use stores::{
    SqliteContentStore, SqliteMediaLibrary, SqlitePermissionStore, SqliteSettingsStore,
};
