use std::fmt;

#[derive(Debug)]
pub enum ViewerError {
    Network(reqwest::Error),
    Json(serde_json::Error),
    Io(std::io::Error),
    Config(String),
    PageOutOfRange { requested: usize, total_pages: usize },
    Resolve(String),
    Lightbox(String),
}

impl fmt::Display for ViewerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewerError::Network(e) => write!(f, "Network error: {}", e),
            ViewerError::Json(e) => write!(f, "JSON parsing error: {}", e),
            ViewerError::Io(e) => write!(f, "IO error: {}", e),
            ViewerError::Config(e) => write!(f, "Configuration error: {}", e),
            ViewerError::PageOutOfRange {
                requested,
                total_pages,
            } => write!(
                f,
                "Page {} is out of range (catalog has {} pages)",
                requested, total_pages
            ),
            ViewerError::Resolve(e) => write!(f, "Image resolution error: {}", e),
            ViewerError::Lightbox(e) => write!(f, "Lightbox error: {}", e),
        }
    }
}

impl std::error::Error for ViewerError {}

impl From<reqwest::Error> for ViewerError {
    fn from(err: reqwest::Error) -> Self {
        ViewerError::Network(err)
    }
}

impl From<serde_json::Error> for ViewerError {
    fn from(err: serde_json::Error) -> Self {
        ViewerError::Json(err)
    }
}

impl From<std::io::Error> for ViewerError {
    fn from(err: std::io::Error) -> Self {
        ViewerError::Io(err)
    }
}
