//! Content record types.
//!
//! The `*Record` types mirror the shapes found in the seed bundle's
//! `data.json`. The `*Payload` types are what the content store receives:
//! relationship fields become connect directives and the publish timestamp
//! is filled in at import time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::media::MediaReference;

/// An author as declared in the seed bundle.
///
/// Authors have no bundle-side identifier; their identity is the 1-based
/// position in the `authors` sequence, which posts reference through
/// [`AuthorRef`].
#[derive(Debug, Clone, Deserialize)]
pub struct AuthorRecord {
    pub name: String,
    pub email: String,
    /// Logical file name of the avatar in the bundle's uploads directory.
    #[serde(default)]
    pub avatar: Option<String>,
}

/// A reference to an author by their 1-based position in the seed bundle.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct AuthorRef {
    pub id: usize,
}

/// A post as declared in the seed bundle.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    /// Rich text / markdown body.
    pub content: String,
    /// Logical file name of the cover image.
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub author: Option<AuthorRef>,
    #[serde(default)]
    pub seo: Option<Seo>,
}

/// Raw SEO metadata attached to a post in the seed bundle.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seo {
    pub meta_title: String,
    pub meta_description: String,
    #[serde(rename = "canonicalURL")]
    pub canonical_url: String,
    #[serde(default)]
    pub meta_image: Option<MediaReference>,
    /// Ordered social-media entries. A malformed (non-array) value in the
    /// bundle degrades to `None` instead of failing the whole import.
    #[serde(default, deserialize_with = "lenient_social_entries")]
    pub meta_social: Option<Vec<SeoSocial>>,
}

/// One social-media entry of an SEO record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoSocial {
    pub social_network: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image: Option<MediaReference>,
}

/// Accept `metaSocial` only when it is an array; anything else becomes `None`.
fn lenient_social_entries<'de, D>(deserializer: D) -> Result<Option<Vec<SeoSocial>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(serde::de::Error::custom))
            .collect::<Result<Vec<_>, _>>()
            .map(Some),
        _ => Ok(None),
    }
}

/// A relationship-field value meaning "link to these existing entries by id".
#[derive(Debug, Clone, Serialize)]
pub struct Connect {
    pub connect: Vec<i64>,
}

impl Connect {
    /// Connect directive for a single entry.
    pub fn to(id: i64) -> Self {
        Self { connect: vec![id] }
    }
}

/// The author entry sent to the content store.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorPayload {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<Connect>,
}

/// The post entry sent to the content store, published immediately.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPayload {
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub published_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Connect>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<Connect>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo: Option<SeoPayload>,
}

/// Normalized SEO metadata with image references resolved to connect
/// directives.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoPayload {
    pub meta_title: String,
    pub meta_description: String,
    #[serde(rename = "canonicalURL")]
    pub canonical_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_image: Option<Connect>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_social: Option<Vec<SeoSocialPayload>>,
}

/// Normalized social-media entry.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoSocialPayload {
    pub social_network: String,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Connect>,
}
