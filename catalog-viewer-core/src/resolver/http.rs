use super::{ImageResolver, ResolvedImages, deferred_ids};
use crate::chunker::Chunk;
use crate::client::CatalogClient;
use crate::error::ViewerError;
use log::debug;

/// Resolver that posts a page's ids to the image-resolution endpoint
#[derive(Debug, Clone)]
pub struct HttpResolver {
    client: CatalogClient,
    api: String,
}

impl HttpResolver {
    pub fn new(client: CatalogClient, api: impl Into<String>) -> Self {
        Self {
            client,
            api: api.into(),
        }
    }

    pub fn client(&self) -> &CatalogClient {
        &self.client
    }

    pub fn api(&self) -> &str {
        &self.api
    }
}

impl ImageResolver for HttpResolver {
    async fn resolve(&self, chunk: &Chunk) -> Result<ResolvedImages, ViewerError> {
        let ids = deferred_ids(chunk);
        if ids.is_empty() {
            debug!("Page {} has no deferred items, skipping image request", chunk.id);
            return Ok(ResolvedImages::new());
        }

        debug!("Resolving {} id(s) for page {}", ids.len(), chunk.id);
        let entries = self.client.resolve_images(&self.api, ids).await?;
        Ok(ResolvedImages::from_entries(entries))
    }
}
