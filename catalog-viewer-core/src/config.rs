use crate::error::ViewerError;
use crate::pagination::DEFAULT_THRESHOLD;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

const CONFIG_FILENAME: &str = "config.json";

/// What a page render does when its image list cannot be fetched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchFailurePolicy {
    /// Log and render with whatever images are already available
    #[default]
    Proceed,
    /// Log and keep the previous page's items on screen
    Skip,
    /// Return to the previous page and report the error
    Abort,
}

impl fmt::Display for FetchFailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchFailurePolicy::Proceed => write!(f, "proceed"),
            FetchFailurePolicy::Skip => write!(f, "skip"),
            FetchFailurePolicy::Abort => write!(f, "abort"),
        }
    }
}

impl FromStr for FetchFailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "proceed" => Ok(FetchFailurePolicy::Proceed),
            "skip" => Ok(FetchFailurePolicy::Skip),
            "abort" => Ok(FetchFailurePolicy::Abort),
            other => Err(format!(
                "unknown fetch failure policy '{}' (expected proceed, skip or abort)",
                other
            )),
        }
    }
}

/// Construction options for a catalog viewer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewerConfig {
    /// Root node the viewer renders into
    pub container_selector: String,
    /// Image-resolution endpoint; absent for catalogs with embedded images
    pub api: Option<String>,
    /// Catalog manifest URL
    pub resource_map: Option<String>,
    pub items_per_page: usize,
    /// Selector handed to the lightbox after each render
    pub lightbox_selector: String,
    pub threshold: usize,
    pub transition_ms: u64,
    pub fetch_failure: FetchFailurePolicy,
    pub request_timeout_secs: Option<u64>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            container_selector: "#catalog".to_string(),
            api: None,
            resource_map: None,
            items_per_page: 4,
            lightbox_selector: ".catalog-gallery".to_string(),
            threshold: DEFAULT_THRESHOLD,
            transition_ms: 200,
            fetch_failure: FetchFailurePolicy::default(),
            request_timeout_secs: None,
        }
    }
}

impl ViewerConfig {
    /// Platform config location, e.g. `~/.config/catalog-viewer/config.json`
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "catalog-viewer")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
    }

    pub fn load(path: &Path) -> Result<Self, ViewerError> {
        let content = fs::read_to_string(path)?;
        let config: ViewerConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if given, else the default location if it exists, else defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ViewerError> {
        if let Some(path) = path {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => {
                log::debug!("Loading viewer config from {}", path.display());
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ViewerError> {
        if self.items_per_page == 0 {
            return Err(ViewerError::Config(
                "itemsPerPage must be greater than zero".to_string(),
            ));
        }
        if self.api.as_deref().is_some_and(|api| api.trim().is_empty()) {
            return Err(ViewerError::Config("api must not be empty".to_string()));
        }
        if self
            .resource_map
            .as_deref()
            .is_some_and(|url| url.trim().is_empty())
        {
            return Err(ViewerError::Config(
                "resourceMap must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn transition_duration(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}
