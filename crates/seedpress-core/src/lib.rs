//! Core domain, collaborator ports, and services for seeding a blog
//! content store.
//!
//! The crate is laid out ports-and-adapters style: `domain` holds the pure
//! types, `ports` the trait abstractions over the host framework
//! (settings store, content store, media library, permission system), and
//! `services` the seeding logic itself. Storage backends live in
//! `seedpress-db`; entry points wire everything together at their own
//! composition root.
//!
//! Seeding is a one-time bootstrap convenience: there are no retries, no
//! rollback of partial imports, and no protection against concurrent runs.

#![deny(unused_crate_dependencies)]

pub mod bundle;
pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use bundle::{BundleError, SeedBundle, SeedData};
pub use domain::{
    AuthorPayload, AuthorRecord, AuthorRef, Connect, ContentTypeDescriptor, ContentTypesPayload,
    FileDescriptor, FileInfo, MediaAsset, MediaReference, PostPayload, PostRecord, SchemaDescriptor,
    SchemaKind, SchemaRegistry, Seo, SeoPayload, SeoSocial, SeoSocialPayload, dedupe_name,
};
pub use ports::{
    Collaborators, ContentModel, ContentStore, CreatedEntry, MediaLibrary, PermissionStore, Role,
    SettingsStore, StoreError,
};
pub use services::{
    MediaResolver, SETUP_FLAG_KEY, SeedError, SeedImporter, SeedOutcome, SeedRunner, SeoBuilder,
    build_content_types_payload,
};
