//! Directory listings of image files, the server half of image resolution.
//!
//! Each sub-directory of the library root is one catalog entry; its id is the
//! directory name and its images are the files with a known extension.

use crate::error::ViewerError;
use crate::models::{ImageListEntry, ResourceMapEntry};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Recognized extensions, in listing order
pub const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "webp", "svg"];

lazy_static! {
    // Extensions are matched case-sensitively
    static ref IMAGE_FILE: Regex = Regex::new(r"^[^.].*\.(jpg|jpeg|png|webp|svg)$").unwrap();
}

fn extension_rank(file_name: &str) -> Option<usize> {
    let captures = IMAGE_FILE.captures(file_name)?;
    let ext = captures.get(1)?.as_str();
    IMAGE_EXTENSIONS.iter().position(|known| *known == ext)
}

/// Content type for a served image file
pub fn content_type(file_name: &str) -> &'static str {
    match Path::new(file_name).extension().and_then(|e| e.to_str()) {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

#[derive(Debug, Clone)]
pub struct ImageLibrary {
    root: PathBuf,
    url_prefix: String,
}

impl ImageLibrary {
    /// `url_prefix` is prepended to every listed path, e.g. `images` gives `images/<id>/<file>`
    pub fn new(root: impl Into<PathBuf>, url_prefix: impl Into<String>) -> Self {
        let url_prefix = url_prefix.into().trim_end_matches('/').to_string();
        Self {
            root: root.into(),
            url_prefix,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn url_prefix(&self) -> &str {
        &self.url_prefix
    }

    /// Names of the image directories under the root; a missing root is empty
    pub fn directory_ids(&self) -> Result<BTreeSet<String>, ViewerError> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(root = %self.root.display(), "Image root does not exist");
                return Ok(BTreeSet::new());
            }
            Err(e) => return Err(ViewerError::Io(e)),
        };

        let mut ids = BTreeSet::new();
        for entry in entries {
            let entry = entry?;
            // Follows symlinks
            if !entry.path().is_dir() {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => {
                    ids.insert(name);
                }
                Err(name) => {
                    debug!(name = ?name, "Skipping directory with non UTF-8 name");
                }
            }
        }
        Ok(ids)
    }

    /// Image paths in `id`, grouped by extension in [`IMAGE_EXTENSIONS`] order and
    /// sorted by name within a group
    pub fn list_images(&self, id: &str) -> Result<Vec<String>, ViewerError> {
        let dir = self.root.join(id);
        let mut found: Vec<(usize, String)> = Vec::new();

        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            if !entry.path().is_file() {
                continue;
            }
            let Ok(name) = entry.file_name().into_string() else {
                continue;
            };
            if let Some(rank) = extension_rank(&name) {
                found.push((rank, name));
            }
        }

        found.sort();
        debug!(id = %id, count = found.len(), "Listed image directory");

        Ok(found
            .into_iter()
            .map(|(_, name)| self.image_url(id, &name))
            .collect())
    }

    /// `<url_prefix>/<id>/<file>` with the id and file name percent-encoded
    fn image_url(&self, id: &str, file_name: &str) -> String {
        let id = urlencoding::encode(id);
        let file_name = urlencoding::encode(file_name);
        if self.url_prefix.is_empty() {
            format!("{}/{}", id, file_name)
        } else {
            format!("{}/{}/{}", self.url_prefix, id, file_name)
        }
    }

    /// One entry per requested id, in request order; unknown ids get `None`
    pub fn resolve(&self, ids: &[String]) -> Result<Vec<ImageListEntry>, ViewerError> {
        let known = self.directory_ids()?;
        let mut entries = Vec::with_capacity(ids.len());

        for id in ids {
            let image_paths = if known.contains(id) {
                Some(self.list_images(id)?)
            } else {
                debug!(id = %id, "Unknown image id");
                None
            };
            entries.push(ImageListEntry {
                imgs_id: id.clone(),
                image_paths,
            });
        }

        Ok(entries)
    }

    /// Resource map generated from the directory names, sorted by name
    pub fn resource_map(&self) -> Result<Vec<ResourceMapEntry>, ViewerError> {
        Ok(self
            .directory_ids()?
            .into_iter()
            .map(|id| ResourceMapEntry {
                title: id.clone(),
                imgs_id: id,
            })
            .collect())
    }

    /// On-disk path of a listed image, or `None` if the pair does not name one
    pub fn image_file(&self, id: &str, file_name: &str) -> Result<Option<PathBuf>, ViewerError> {
        if file_name.contains(['/', '\\']) || extension_rank(file_name).is_none() {
            return Ok(None);
        }
        if !self.directory_ids()?.contains(id) {
            return Ok(None);
        }

        let path = self.root.join(id).join(file_name);
        Ok(path.is_file().then_some(path))
    }
}
