use crate::http::{HttpRequest, HttpResponse};
use catalog_viewer_core::listing::content_type;
use catalog_viewer_core::{ImageLibrary, ResolveRequest, ResourceMapEntry, ViewerError};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

/// Everything a request handler needs; shared read-only between connections
#[derive(Debug, Clone)]
pub struct ServerState {
    library: ImageLibrary,
    resource_map_file: Option<PathBuf>,
}

impl ServerState {
    pub fn new(library: ImageLibrary, resource_map_file: Option<PathBuf>) -> Self {
        Self {
            library,
            resource_map_file,
        }
    }

    pub fn library(&self) -> &ImageLibrary {
        &self.library
    }
}

pub async fn handle_request(state: &ServerState, req: &HttpRequest) -> HttpResponse {
    let route = req.route();
    debug!(method = %req.method, route = %route, "Handling request");

    match (req.method.as_str(), route) {
        ("POST", "/api/images") => resolve_images(state, &req.body).await,
        ("GET", "/resource-map") => resource_map(state).await,
        ("GET", "/favicon.ico") => HttpResponse {
            status: "204 No Content",
            content_type: "text/plain",
            body: Vec::new(),
        },
        ("GET", path) => static_image(state, path).await,
        _ => HttpResponse::not_found(),
    }
}

async fn resolve_images(state: &ServerState, body: &[u8]) -> HttpResponse {
    let request: ResolveRequest = match serde_json::from_slice(body) {
        Ok(request) => request,
        Err(e) => {
            warn!(error = %e, "Malformed image resolution request");
            return HttpResponse::teapot();
        }
    };

    let library = state.library.clone();
    let ids = request.list_of_id;
    let count = ids.len();
    let listed = tokio::task::spawn_blocking(move || library.resolve(&ids)).await;

    match flatten(listed) {
        Ok(entries) => match serde_json::to_vec(&entries) {
            Ok(body) => {
                info!(ids = count, "Resolved image lists");
                HttpResponse::json(body)
            }
            Err(e) => {
                error!(error = %e, "Failed to encode image lists");
                HttpResponse::internal_error()
            }
        },
        Err(e) => {
            error!(error = %e, "Failed to list image directories");
            HttpResponse::internal_error()
        }
    }
}

async fn resource_map(state: &ServerState) -> HttpResponse {
    let entries = match &state.resource_map_file {
        Some(path) => match read_resource_map(path).await {
            Ok(entries) => entries,
            Err(e) => {
                error!(path = %path.display(), error = %e, "Failed to read resource map");
                return HttpResponse::internal_error();
            }
        },
        None => {
            let library = state.library.clone();
            match flatten(tokio::task::spawn_blocking(move || library.resource_map()).await) {
                Ok(entries) => entries,
                Err(e) => {
                    error!(error = %e, "Failed to generate resource map");
                    return HttpResponse::internal_error();
                }
            }
        }
    };

    match serde_json::to_vec(&entries) {
        Ok(body) => HttpResponse::json(body),
        Err(e) => {
            error!(error = %e, "Failed to encode resource map");
            HttpResponse::internal_error()
        }
    }
}

async fn read_resource_map(path: &Path) -> Result<Vec<ResourceMapEntry>, ViewerError> {
    let content = tokio::fs::read(path).await?;
    Ok(serde_json::from_slice(&content)?)
}

async fn static_image(state: &ServerState, path: &str) -> HttpResponse {
    let Some((id, file_name)) = split_image_path(state.library.url_prefix(), path) else {
        return HttpResponse::not_found();
    };

    let library = state.library.clone();
    let lookup_file = file_name.clone();
    let found = tokio::task::spawn_blocking(move || library.image_file(&id, &lookup_file)).await;

    let file = match flatten(found) {
        Ok(Some(file)) => file,
        Ok(None) => return HttpResponse::not_found(),
        Err(e) => {
            error!(error = %e, "Failed to look up image");
            return HttpResponse::internal_error();
        }
    };

    match tokio::fs::read(&file).await {
        Ok(bytes) => HttpResponse::ok(content_type(&file_name), bytes),
        Err(e) => {
            warn!(path = %file.display(), error = %e, "Failed to read image");
            HttpResponse::not_found()
        }
    }
}

/// Split `/<prefix>/<id>/<file>` into decoded `(id, file)`
fn split_image_path(url_prefix: &str, path: &str) -> Option<(String, String)> {
    let rest = path.strip_prefix('/')?;
    let rest = if url_prefix.is_empty() {
        rest
    } else {
        rest.strip_prefix(url_prefix)?.strip_prefix('/')?
    };

    let (id, file_name) = rest.split_once('/')?;
    let id = urlencoding::decode(id).ok()?.into_owned();
    let file_name = urlencoding::decode(file_name).ok()?.into_owned();
    if id.is_empty() || id == "." || id == ".." || id.contains(['/', '\\']) {
        return None;
    }
    Some((id, file_name))
}

fn flatten<T>(
    joined: Result<Result<T, ViewerError>, tokio::task::JoinError>,
) -> Result<T, ViewerError> {
    joined.map_err(|e| ViewerError::Io(std::io::Error::other(e)))?
}
