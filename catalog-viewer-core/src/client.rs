use crate::error::ViewerError;
use crate::models::{ImageListEntry, Item, ResolveRequest};
use log::debug;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use time::OffsetDateTime;

const USER_AGENT: &str = "catalog-viewer-core/0.1";
const ACCEPT: &str = "application/json";
const MAX_FETCH_HISTORY: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    ResourceMap,
    ImageList,
}

#[derive(Debug, Clone)]
pub struct FetchRecord {
    pub url: String,
    pub kind: FetchKind,
    pub timestamp: OffsetDateTime,
    pub status_code: u16,
    pub success: bool,
}

/// HTTP client for the resource map and image-resolution endpoints
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: reqwest::Client,
    history: Arc<Mutex<Vec<FetchRecord>>>,
}

impl CatalogClient {
    pub fn new(timeout: Option<Duration>) -> Result<Self, ViewerError> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::USER_AGENT,
            reqwest::header::HeaderValue::from_static(USER_AGENT),
        );
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static(ACCEPT),
        );

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(CatalogClient {
            client: builder.build()?,
            history: Arc::new(Mutex::new(Vec::new())),
        })
    }

    /// Fetch the ordered catalog manifest
    pub async fn fetch_resource_map(&self, url: &str) -> Result<Vec<Item>, ViewerError> {
        debug!("fetching resource map: {}", url);
        let response = self
            .send(self.client.get(url), url, FetchKind::ResourceMap)
            .await?;
        let items: Vec<Item> = response.json().await?;
        debug!("resource map has {} items", items.len());
        Ok(items)
    }

    /// Resolve directory ids into image paths
    pub async fn resolve_images(
        &self,
        api: &str,
        ids: Vec<String>,
    ) -> Result<Vec<ImageListEntry>, ViewerError> {
        let body = ResolveRequest { list_of_id: ids };
        let response = self
            .send(self.client.post(api).json(&body), api, FetchKind::ImageList)
            .await?;
        Ok(response.json().await?)
    }

    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        url: &str,
        kind: FetchKind,
    ) -> Result<reqwest::Response, ViewerError> {
        let timestamp = OffsetDateTime::now_utc();
        match request.send().await {
            Ok(response) => {
                let status = response.status();
                self.record(FetchRecord {
                    url: url.to_string(),
                    kind,
                    timestamp,
                    status_code: status.as_u16(),
                    success: status.is_success(),
                });
                Ok(response.error_for_status()?)
            }
            Err(e) => {
                self.record(FetchRecord {
                    url: url.to_string(),
                    kind,
                    timestamp,
                    status_code: 0,
                    success: false,
                });
                Err(ViewerError::Network(e))
            }
        }
    }

    fn record(&self, call: FetchRecord) {
        if let Ok(mut history) = self.history.lock() {
            history.push(call);
            if history.len() > MAX_FETCH_HISTORY {
                let excess = history.len() - MAX_FETCH_HISTORY;
                history.drain(0..excess);
            }
        }
    }

    /// Recent requests, oldest first
    pub fn history(&self) -> Vec<FetchRecord> {
        self.history
            .lock()
            .map(|history| history.clone())
            .unwrap_or_default()
    }

    pub fn clear_history(&self) {
        if let Ok(mut history) = self.history.lock() {
            history.clear();
        }
    }
}
