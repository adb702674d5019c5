//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (database, filesystem, etc.).
//!
//! # Structure
//!
//! - `content` - Seed records and content-store payloads
//! - `media` - Media assets, references, and upload descriptors
//! - `schema` - Content-type registry types for the SEO payload builder

pub mod content;
pub mod media;
pub mod schema;

// Re-export content types at the domain level for convenience
pub use content::{
    AuthorPayload, AuthorRecord, AuthorRef, Connect, PostPayload, PostRecord, Seo, SeoPayload,
    SeoSocial, SeoSocialPayload,
};

// Re-export media types at the domain level for convenience
pub use media::{FileDescriptor, FileInfo, MediaAsset, MediaReference, dedupe_name};

// Re-export schema types at the domain level for convenience
pub use schema::{
    ContentTypeDescriptor, ContentTypesPayload, SchemaDescriptor, SchemaKind, SchemaRegistry,
};
