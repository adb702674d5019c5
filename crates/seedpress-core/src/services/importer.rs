//! The seed import sequence.
//!
//! Steps run strictly in order: public read permissions, then authors, then
//! posts. Posts depend on the completed author-id map, so no entity creation
//! is attempted concurrently across steps. Permission records within the
//! first step are independent and created jointly.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::Utc;
use futures_util::future::try_join_all;
use tracing::{error, info};

use super::{MediaResolver, SeedError, SeoBuilder};
use crate::bundle::SeedBundle;
use crate::domain::{AuthorPayload, AuthorRecord, Connect, PostPayload, PostRecord};
use crate::ports::{Collaborators, ContentModel, ContentStore, CreatedEntry, PermissionStore};

/// Read actions granted to the public role for each seeded content type.
const PUBLIC_READ_ACTIONS: &[&str] = &["find", "findOne"];

/// Imports the seed bundle into the content store.
///
/// Partial imports are possible: the first entity-creation failure aborts
/// the remaining sequence and nothing is rolled back. Seeding is a one-time
/// bootstrap convenience, not a production data path.
pub struct SeedImporter {
    content: Arc<dyn ContentStore>,
    permissions: Arc<dyn PermissionStore>,
    media: MediaResolver,
    seo: SeoBuilder,
}

impl SeedImporter {
    /// Compose an importer over the collaborators, reading bundle media from
    /// `uploads_dir`.
    pub fn new(collaborators: &Collaborators, uploads_dir: PathBuf) -> Self {
        let media = MediaResolver::new(Arc::clone(&collaborators.media), uploads_dir);
        Self {
            content: Arc::clone(&collaborators.content),
            permissions: Arc::clone(&collaborators.permissions),
            seo: SeoBuilder::new(media.clone()),
            media,
        }
    }

    /// Run the full import sequence.
    pub async fn import(&self, bundle: &SeedBundle) -> Result<(), SeedError> {
        self.set_public_permissions(&[ContentModel::Post, ContentModel::Author])
            .await?;

        let author_ids = self.import_authors(bundle.authors()).await?;
        self.import_posts(bundle.posts(), &author_ids).await?;

        Ok(())
    }

    /// Grant public read access to the seeded content types.
    ///
    /// Creation is unconditional; reruns outside the setup-flag gate would
    /// duplicate these records.
    async fn set_public_permissions(&self, models: &[ContentModel]) -> Result<(), SeedError> {
        let role = self.permissions.find_role_by_kind("public").await?;

        let mut creations = Vec::new();
        for model in models {
            for action in PUBLIC_READ_ACTIONS {
                let action_key = format!("{}.{action}", model.uid());
                let store = Arc::clone(&self.permissions);
                let role_id = role.id;
                creations.push(async move { store.create_permission(&action_key, role_id).await });
            }
        }
        try_join_all(creations).await?;

        info!(role_id = role.id, "public read permissions created");
        Ok(())
    }

    /// Create authors in source order, mapping each 1-based bundle position
    /// to its store-assigned id.
    async fn import_authors(
        &self,
        authors: &[AuthorRecord],
    ) -> Result<HashMap<usize, i64>, SeedError> {
        let mut author_ids = HashMap::new();

        for (index, author) in authors.iter().enumerate() {
            let avatar = match &author.avatar {
                Some(file_name) => Some(self.media.resolve_one(file_name).await?),
                None => None,
            };

            let payload = AuthorPayload {
                name: author.name.clone(),
                email: author.email.clone(),
                avatar: avatar.map(|asset| Connect::to(asset.id)),
            };
            let created = self
                .create_entry(ContentModel::Author, serde_json::to_value(&payload)?)
                .await?;

            author_ids.insert(index + 1, created.id);
        }

        info!(count = author_ids.len(), "authors imported");
        Ok(author_ids)
    }

    /// Create posts in source order.
    ///
    /// A post referencing an absent or out-of-range author position is
    /// created without an author link; that is data-quality tolerance, not
    /// an error.
    async fn import_posts(
        &self,
        posts: &[PostRecord],
        author_ids: &HashMap<usize, i64>,
    ) -> Result<(), SeedError> {
        for post in posts {
            let cover = match &post.cover_image {
                Some(file_name) => Some(self.media.resolve_one(file_name).await?),
                None => None,
            };
            let author = post
                .author
                .and_then(|reference| author_ids.get(&reference.id))
                .copied();
            let seo = self.seo.build(post.seo.as_ref()).await?;

            let payload = PostPayload {
                title: post.title.clone(),
                slug: post.slug.clone(),
                excerpt: post.excerpt.clone(),
                content: post.content.clone(),
                published_at: Utc::now(),
                author: author.map(Connect::to),
                cover_image: cover.map(|asset| Connect::to(asset.id)),
                seo,
            };
            self.create_entry(ContentModel::Post, serde_json::to_value(&payload)?)
                .await?;
        }

        info!(count = posts.len(), "posts imported");
        Ok(())
    }

    /// Create one entry, logging the full attempted payload on failure
    /// before propagating it.
    async fn create_entry(
        &self,
        model: ContentModel,
        data: serde_json::Value,
    ) -> Result<CreatedEntry, SeedError> {
        match self.content.create(model, data.clone()).await {
            Ok(entry) => Ok(entry),
            Err(err) => {
                error!(model = model.uid(), payload = %data, error = %err, "entry creation failed");
                Err(err.into())
            }
        }
    }
}
