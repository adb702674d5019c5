//! Raw SEO record normalization.

use futures_util::future::try_join_all;

use super::{MediaResolver, SeedError};
use crate::domain::{Connect, MediaReference, Seo, SeoPayload, SeoSocial, SeoSocialPayload};

/// Turns raw SEO records into the normalized shape the content store
/// expects, resolving image references through the media resolver.
#[derive(Clone)]
pub struct SeoBuilder {
    resolver: MediaResolver,
}

impl SeoBuilder {
    pub fn new(resolver: MediaResolver) -> Self {
        Self { resolver }
    }

    /// Normalize an optional SEO record; absent input passes through.
    ///
    /// Social entries are independent of each other, so their image lookups
    /// are issued together and awaited jointly.
    pub async fn build(&self, seo: Option<&Seo>) -> Result<Option<SeoPayload>, SeedError> {
        let Some(seo) = seo else {
            return Ok(None);
        };

        let meta_image = self.connect_image(seo.meta_image.as_ref()).await?;

        let meta_social = match &seo.meta_social {
            Some(entries) => {
                Some(try_join_all(entries.iter().map(|entry| self.build_social(entry))).await?)
            }
            None => None,
        };

        Ok(Some(SeoPayload {
            meta_title: seo.meta_title.clone(),
            meta_description: seo.meta_description.clone(),
            canonical_url: seo.canonical_url.clone(),
            meta_image,
            meta_social,
        }))
    }

    async fn build_social(&self, entry: &SeoSocial) -> Result<SeoSocialPayload, SeedError> {
        Ok(SeoSocialPayload {
            social_network: entry.social_network.clone(),
            title: entry.title.clone(),
            description: entry.description.clone(),
            image: self.connect_image(entry.image.as_ref()).await?,
        })
    }

    /// Only a plain file name is something to upload; an already-resolved
    /// reference yields no connection.
    async fn connect_image(
        &self,
        image: Option<&MediaReference>,
    ) -> Result<Option<Connect>, SeedError> {
        match image {
            Some(MediaReference::FileName(name)) => {
                let asset = self.resolver.resolve_one(name).await?;
                Ok(Some(Connect::to(asset.id)))
            }
            Some(MediaReference::Resolved { .. }) | None => Ok(None),
        }
    }
}
