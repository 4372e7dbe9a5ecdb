use super::{ImageResolver, ResolvedImages, deferred_ids};
use crate::chunker::Chunk;
use crate::error::ViewerError;
use log::warn;

/// Resolver for catalogs that ship image paths inline; never touches the network
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedResolver;

impl ImageResolver for EmbeddedResolver {
    async fn resolve(&self, chunk: &Chunk) -> Result<ResolvedImages, ViewerError> {
        let unresolvable = deferred_ids(chunk);
        if !unresolvable.is_empty() {
            warn!(
                "Page {} has {} item(s) that need an image API, but none is configured: {:?}",
                chunk.id,
                unresolvable.len(),
                unresolvable
            );
        }
        Ok(ResolvedImages::new())
    }
}
