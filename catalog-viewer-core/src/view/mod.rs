//! Display abstraction.
//!
//! A [`ViewFactory`] turns framework-independent views into nodes and a
//! [`DisplaySurface`] holds whatever nodes are currently shown.

pub mod html;
pub mod memory;

pub use html::{HtmlSurface, HtmlViewFactory};
pub use memory::MemorySurface;

use crate::models::Item;
use crate::pagination::PaginationControl;

/// One image inside an item; only the first image of an item is primary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageView {
    pub src: String,
    pub alt: String,
    pub primary: bool,
}

/// One rendered catalog entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView {
    pub title: String,
    pub images: Vec<ImageView>,
}

impl ItemView {
    /// Every image stays in the view; later ones are only hidden so a lightbox
    /// can still page through the whole group.
    pub fn build(item: &Item, images: &[String]) -> Self {
        let images = images
            .iter()
            .enumerate()
            .map(|(index, src)| ImageView {
                src: src.clone(),
                alt: item.title.clone(),
                primary: index == 0,
            })
            .collect();

        Self {
            title: item.title.clone(),
            images,
        }
    }

    pub fn primary_image(&self) -> Option<&ImageView> {
        self.images.iter().find(|image| image.primary)
    }
}

pub trait ViewFactory {
    type Node;

    /// Stand-in shown before the first page has loaded
    fn placeholder(&self) -> Self::Node;

    fn item(&self, view: &ItemView) -> Self::Node;

    fn pagination(&self, control: &PaginationControl) -> Self::Node;
}

pub trait DisplaySurface {
    type Node;

    fn clear_items(&mut self);

    fn append_items(&mut self, nodes: Vec<Self::Node>);

    fn replace_pagination(&mut self, node: Self::Node);
}
