use serde::{Deserialize, Serialize};

/// Where an item's images come from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageRef {
    /// Image paths shipped inline with the catalog
    Embedded { imgs: Vec<String> },
    /// Image paths looked up by directory id through the resolution endpoint
    Deferred { imgs_id: String },
}

/// A single catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub title: String,
    #[serde(flatten)]
    pub images: ImageRef,
}

impl Item {
    pub fn embedded(title: impl Into<String>, imgs: Vec<String>) -> Self {
        Self {
            title: title.into(),
            images: ImageRef::Embedded { imgs },
        }
    }

    pub fn deferred(title: impl Into<String>, imgs_id: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            images: ImageRef::Deferred {
                imgs_id: imgs_id.into(),
            },
        }
    }

    /// The directory id to resolve, if this item's images are not embedded
    pub fn deferred_id(&self) -> Option<&str> {
        match &self.images {
            ImageRef::Deferred { imgs_id } => Some(imgs_id),
            ImageRef::Embedded { .. } => None,
        }
    }
}

/// One row of the resource map served at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceMapEntry {
    pub title: String,
    pub imgs_id: String,
}

impl From<ResourceMapEntry> for Item {
    fn from(entry: ResourceMapEntry) -> Self {
        Item::deferred(entry.title, entry.imgs_id)
    }
}

/// Body of the image-resolution request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveRequest {
    pub list_of_id: Vec<String>,
}

/// One row of the image-resolution response; `image_paths` is `None` for unknown ids
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageListEntry {
    pub imgs_id: String,
    pub image_paths: Option<Vec<String>>,
}
