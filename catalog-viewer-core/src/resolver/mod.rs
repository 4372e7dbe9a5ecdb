//! Image resolution for a page of items.
//!
//! Items either carry their image paths inline or only an id that a server
//! resolves into a directory listing. Both cases sit behind [`ImageResolver`];
//! [`ImageSource`] picks the implementation from configuration.

pub mod embedded;
pub mod http;

pub use embedded::EmbeddedResolver;
pub use http::HttpResolver;

use crate::chunker::Chunk;
use crate::client::CatalogClient;
use crate::config::ViewerConfig;
use crate::error::ViewerError;
use crate::models::{ImageListEntry, ImageRef, Item};
use std::collections::HashMap;
use std::future::Future;

/// Image paths available for one page view, keyed by directory id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedImages {
    by_id: HashMap<String, Option<Vec<String>>>,
}

impl ResolvedImages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<ImageListEntry>) -> Self {
        let by_id = entries
            .into_iter()
            .map(|entry| (entry.imgs_id, entry.image_paths))
            .collect();
        Self { by_id }
    }

    pub fn insert(&mut self, imgs_id: impl Into<String>, image_paths: Option<Vec<String>>) {
        self.by_id.insert(imgs_id.into(), image_paths);
    }

    /// Images for `item`: inline paths for embedded items, the resolved listing otherwise.
    /// `None` means the id was unknown or never resolved.
    pub fn images_for<'a>(&'a self, item: &'a Item) -> Option<&'a [String]> {
        match &item.images {
            ImageRef::Embedded { imgs } => Some(imgs.as_slice()),
            ImageRef::Deferred { imgs_id } => self
                .by_id
                .get(imgs_id)
                .and_then(|paths| paths.as_deref()),
        }
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// Turns a chunk's items into image lists, once per page view
pub trait ImageResolver {
    fn resolve(
        &self,
        chunk: &Chunk,
    ) -> impl Future<Output = Result<ResolvedImages, ViewerError>> + Send;
}

/// Deferred ids in a chunk, in item order
pub fn deferred_ids(chunk: &Chunk) -> Vec<String> {
    chunk
        .items
        .iter()
        .filter_map(|item| item.deferred_id().map(str::to_string))
        .collect()
}

/// Resolver chosen by configuration: remote when an API URL is set, embedded otherwise
#[derive(Debug)]
pub enum ImageSource {
    Embedded(EmbeddedResolver),
    Remote(HttpResolver),
}

impl ImageSource {
    pub fn from_config(config: &ViewerConfig) -> Result<Self, ViewerError> {
        match &config.api {
            Some(api) => {
                let client = CatalogClient::new(config.request_timeout())?;
                Ok(ImageSource::Remote(HttpResolver::new(client, api.clone())))
            }
            None => Ok(ImageSource::Embedded(EmbeddedResolver)),
        }
    }
}

impl ImageResolver for ImageSource {
    async fn resolve(&self, chunk: &Chunk) -> Result<ResolvedImages, ViewerError> {
        match self {
            ImageSource::Embedded(resolver) => resolver.resolve(chunk).await,
            ImageSource::Remote(resolver) => resolver.resolve(chunk).await,
        }
    }
}
