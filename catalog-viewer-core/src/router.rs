use crate::chunker::{Chunk, chunk};
use crate::config::{FetchFailurePolicy, ViewerConfig};
use crate::error::ViewerError;
use crate::lightbox::{Lightbox, NoLightbox};
use crate::models::Item;
use crate::pagination::{NavKind, NavState, PaginationControl};
use crate::resolver::{ImageResolver, ResolvedImages};
use crate::transition::Transition;
use crate::view::{DisplaySurface, ItemView, ViewFactory};
use log::{debug, error, warn};
use tokio::sync::Mutex;

/// Mutable half of the viewer; only touched while the navigation lock is held
struct ViewerInner<S, T> {
    state: NavState,
    surface: S,
    transition: T,
    lightbox: Box<dyn Lightbox + Send>,
}

/// Paginated catalog bound to a display surface.
///
/// Every navigation request takes the same lock for its whole transition, so
/// requests issued while another is in flight run afterwards, in arrival order.
pub struct CatalogViewer<V, S, R, T>
where
    V: ViewFactory,
    S: DisplaySurface<Node = V::Node>,
    R: ImageResolver,
    T: Transition,
{
    chunks: Vec<Chunk>,
    factory: V,
    resolver: R,
    items_per_page: usize,
    threshold: usize,
    lightbox_selector: String,
    fetch_failure: FetchFailurePolicy,
    inner: Mutex<ViewerInner<S, T>>,
}

impl<V, S, R, T> CatalogViewer<V, S, R, T>
where
    V: ViewFactory,
    S: DisplaySurface<Node = V::Node>,
    R: ImageResolver,
    T: Transition,
{
    pub fn new(
        config: &ViewerConfig,
        items: Vec<Item>,
        factory: V,
        surface: S,
        resolver: R,
        transition: T,
    ) -> Result<Self, ViewerError> {
        config.validate()?;

        let mut chunks = chunk(items, config.items_per_page)?;
        if chunks.is_empty() {
            // An empty catalog still shows one (empty) page
            chunks.push(Chunk {
                id: 1,
                items: Vec::new(),
            });
        }
        debug!(
            "Catalog split into {} page(s) of up to {} item(s)",
            chunks.len(),
            config.items_per_page
        );

        let state = NavState::new(chunks.len());
        Ok(Self {
            chunks,
            factory,
            resolver,
            items_per_page: config.items_per_page,
            threshold: config.threshold,
            lightbox_selector: config.lightbox_selector.clone(),
            fetch_failure: config.fetch_failure,
            inner: Mutex::new(ViewerInner {
                state,
                surface,
                transition,
                lightbox: Box::new(NoLightbox),
            }),
        })
    }

    pub fn with_lightbox(mut self, lightbox: impl Lightbox + Send + 'static) -> Self {
        self.inner.get_mut().lightbox = Box::new(lightbox);
        self
    }

    /// Put placeholders on the surface, then show page 1
    pub async fn launch(&self) -> Result<(), ViewerError> {
        {
            let mut inner = self.inner.lock().await;
            let placeholders = (0..self.items_per_page)
                .map(|_| self.factory.placeholder())
                .collect();
            inner.surface.clear_items();
            inner.surface.append_items(placeholders);
        }
        self.goto(1).await
    }

    /// Transition to `target`; pages outside `[1, total_pages]` are rejected untouched
    pub async fn goto(&self, target: usize) -> Result<(), ViewerError> {
        let mut inner = self.inner.lock().await;
        self.transition_to(&mut inner, target).await
    }

    /// Follow a jump control. Returns `false` without doing anything when the
    /// control is disabled for the current page.
    pub async fn navigate(&self, kind: NavKind) -> Result<bool, ViewerError> {
        let mut inner = self.inner.lock().await;
        let window = inner.state.window(self.threshold);
        if window.disabled.get(kind) {
            debug!("Ignoring {:?} on page {}", kind, inner.state.current_page);
            return Ok(false);
        }

        let target = inner.state.target_for(kind);
        self.transition_to(&mut inner, target).await?;
        Ok(true)
    }

    pub async fn state(&self) -> NavState {
        self.inner.lock().await.state
    }

    /// Run `f` against the surface once any in-flight transition has finished
    pub async fn with_surface<F, O>(&self, f: F) -> O
    where
        F: FnOnce(&S) -> O,
    {
        let inner = self.inner.lock().await;
        f(&inner.surface)
    }

    pub fn total_pages(&self) -> usize {
        self.chunks.len()
    }

    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    pub fn chunk(&self, page: usize) -> Option<&Chunk> {
        page.checked_sub(1).and_then(|index| self.chunks.get(index))
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    async fn transition_to(
        &self,
        inner: &mut ViewerInner<S, T>,
        target: usize,
    ) -> Result<(), ViewerError> {
        let Some(chunk) = self.chunk(target) else {
            return Err(ViewerError::PageOutOfRange {
                requested: target,
                total_pages: self.chunks.len(),
            });
        };
        debug!(
            "Navigating from page {} to page {}",
            inner.state.current_page, target
        );

        inner.transition.fade_out().await;

        let previous = inner.state.current_page;
        inner.state.current_page = target;

        if let Err(e) = self.render_chunk(chunk, &mut inner.surface).await {
            inner.state.current_page = previous;
            inner.transition.fade_in().await;
            return Err(e);
        }

        let control = PaginationControl::build(&inner.state, self.threshold);
        inner
            .surface
            .replace_pagination(self.factory.pagination(&control));

        inner.transition.fade_in().await;

        if let Err(e) = inner.lightbox.activate(&self.lightbox_selector) {
            error!("Lightbox activation failed: {}", e);
        }

        Ok(())
    }

    async fn render_chunk(&self, chunk: &Chunk, surface: &mut S) -> Result<(), ViewerError> {
        let resolved = match self.resolver.resolve(chunk).await {
            Ok(resolved) => resolved,
            Err(e) => match self.fetch_failure {
                FetchFailurePolicy::Proceed => {
                    error!(
                        "Image list for page {} failed, rendering without it: {}",
                        chunk.id, e
                    );
                    ResolvedImages::new()
                }
                FetchFailurePolicy::Skip => {
                    error!(
                        "Image list for page {} failed, keeping previous items: {}",
                        chunk.id, e
                    );
                    return Ok(());
                }
                FetchFailurePolicy::Abort => return Err(e),
            },
        };

        let nodes = chunk
            .items
            .iter()
            .map(|item| {
                let images: &[String] = match resolved.images_for(item) {
                    Some(images) => images,
                    None => {
                        warn!("No images available for '{}'", item.title);
                        &[]
                    }
                };
                self.factory.item(&ItemView::build(item, images))
            })
            .collect();

        surface.clear_items();
        surface.append_items(nodes);
        Ok(())
    }
}
