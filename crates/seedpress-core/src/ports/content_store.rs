//! Content store trait definition.
//!
//! The content store is the system-of-record for structured entries. The
//! seeding logic only ever creates; it never updates or deletes.

use async_trait::async_trait;

use super::StoreError;

/// The content types this logic writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentModel {
    Author,
    Post,
}

impl ContentModel {
    /// Fully-qualified model identifier (`api::<name>.<name>`).
    pub const fn uid(self) -> &'static str {
        match self {
            Self::Author => "api::author.author",
            Self::Post => "api::post.post",
        }
    }
}

/// A freshly created entry with its store-assigned id.
#[derive(Debug, Clone, Copy)]
pub struct CreatedEntry {
    pub id: i64,
}

/// Entry creation against the content store.
///
/// Relationship fields inside `data` are expressed as connect directives
/// (`{"connect": [id, ...]}`), never as nested entries.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Create an entry and return its assigned id.
    async fn create(
        &self,
        model: ContentModel,
        data: serde_json::Value,
    ) -> Result<CreatedEntry, StoreError>;
}
