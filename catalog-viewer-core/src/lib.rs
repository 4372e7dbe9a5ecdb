pub mod catalog;
pub mod chunker;
pub mod client;
pub mod config;
pub mod error;
pub mod lightbox;
pub mod listing;
pub mod models;
pub mod pagination;
pub mod resolver;
pub mod router;
pub mod transition;
pub mod view;


pub use catalog::{load_items, read_items_file};
pub use chunker::{Chunk, chunk, page_count};
pub use client::{CatalogClient, FetchKind, FetchRecord};
pub use config::{FetchFailurePolicy, ViewerConfig};
pub use error::ViewerError;
pub use lightbox::{Lightbox, NoLightbox};
pub use listing::{IMAGE_EXTENSIONS, ImageLibrary};
pub use models::{ImageListEntry, ImageRef, Item, ResolveRequest, ResourceMapEntry};
pub use pagination::{
    DEFAULT_THRESHOLD, NavButton, NavDisabled, NavKind, NavState, PaginationControl,
    PaginationEntry, PaginationWindow, compute_window,
};
pub use resolver::{EmbeddedResolver, HttpResolver, ImageResolver, ImageSource, ResolvedImages};
pub use router::CatalogViewer;
pub use transition::{FadeTransition, Transition};
pub use view::{
    DisplaySurface, HtmlSurface, HtmlViewFactory, ImageView, ItemView, MemorySurface, ViewFactory,
};

/// Viewer wired from configuration: resolver picked by `api`, fade length by `transitionMs`
pub fn build_viewer<V, S>(
    config: &ViewerConfig,
    items: Vec<Item>,
    factory: V,
    surface: S,
) -> Result<CatalogViewer<V, S, ImageSource, FadeTransition>, ViewerError>
where
    V: ViewFactory,
    S: DisplaySurface<Node = V::Node>,
{
    let resolver = ImageSource::from_config(config)?;
    let transition = FadeTransition::new(config.transition_duration());
    CatalogViewer::new(config, items, factory, surface, resolver, transition)
}

/// Load the catalog (resource map when configured, `embedded` otherwise) and build a viewer
pub async fn open_viewer<V, S>(
    config: &ViewerConfig,
    embedded: Option<Vec<Item>>,
    factory: V,
    surface: S,
) -> Result<CatalogViewer<V, S, ImageSource, FadeTransition>, ViewerError>
where
    V: ViewFactory,
    S: DisplaySurface<Node = V::Node>,
{
    let items = match embedded {
        Some(items) => items,
        None => {
            let client = CatalogClient::new(config.request_timeout())?;
            load_items(config, &client).await?
        }
    };
    build_viewer(config, items, factory, surface)
}
