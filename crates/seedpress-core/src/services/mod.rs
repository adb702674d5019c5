//! Seeding services.
//!
//! Services compose over the collaborator ports in `crate::ports` and carry
//! the actual import logic:
//!
//! - `media_resolver` - find-or-upload asset resolution
//! - `seo_builder` - raw SEO record normalization
//! - `importer` - the permission/author/post import sequence
//! - `runner` - the idempotence gate around the importer
//! - `content_types` - the pure content-type payload builder

pub mod content_types;
pub mod importer;
pub mod media_resolver;
pub mod runner;
pub mod seo_builder;

#[cfg(test)]
pub(crate) mod test_support;

use thiserror::Error;

pub use content_types::build_content_types_payload;
pub use importer::SeedImporter;
pub use media_resolver::MediaResolver;
pub use runner::{SETUP_FLAG_KEY, SeedOutcome, SeedRunner};
pub use seo_builder::SeoBuilder;

use crate::bundle::BundleError;
use crate::ports::StoreError;

/// Error type for the seeding services.
#[derive(Debug, Error)]
pub enum SeedError {
    /// A collaborator operation failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The seed bundle could not be read.
    #[error(transparent)]
    Bundle(#[from] BundleError),

    /// A content-store payload could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The media library reported a completed upload without an asset record.
    #[error("upload for `{0}` returned no asset")]
    EmptyUpload(String),
}
