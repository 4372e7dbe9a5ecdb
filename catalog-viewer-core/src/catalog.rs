use crate::client::CatalogClient;
use crate::config::{FetchFailurePolicy, ViewerConfig};
use crate::error::ViewerError;
use crate::models::Item;
use log::{debug, error};
use std::fs;
use std::path::Path;

/// Load the catalog from the configured resource map.
///
/// Without a resource map the catalog is empty; embedded catalogs come from
/// [`read_items_file`] instead. A failed fetch is only an error under
/// [`FetchFailurePolicy::Abort`]; otherwise it is logged and the catalog is empty.
pub async fn load_items(
    config: &ViewerConfig,
    client: &CatalogClient,
) -> Result<Vec<Item>, ViewerError> {
    let Some(url) = &config.resource_map else {
        debug!("No resource map configured");
        return Ok(Vec::new());
    };

    match client.fetch_resource_map(url).await {
        Ok(items) => Ok(items),
        Err(e) if config.fetch_failure == FetchFailurePolicy::Abort => Err(e),
        Err(e) => {
            error!("Failed to load resource map from {}: {}", url, e);
            Ok(Vec::new())
        }
    }
}

/// Read a catalog JSON file (an array of items, embedded or deferred)
pub fn read_items_file(path: &Path) -> Result<Vec<Item>, ViewerError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_no_resource_map_means_empty_catalog() {
        let client = CatalogClient::new(None).unwrap();
        let items = load_items(&ViewerConfig::default(), &client).await.unwrap();
        assert!(items.is_empty());
        assert!(client.history().is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_resource_map_follows_policy() {
        let client = CatalogClient::new(Some(Duration::from_secs(2))).unwrap();
        let mut config = ViewerConfig {
            resource_map: Some("http://127.0.0.1:9/resource-map".to_string()),
            ..ViewerConfig::default()
        };

        let items = load_items(&config, &client).await.unwrap();
        assert!(items.is_empty());

        config.fetch_failure = FetchFailurePolicy::Abort;
        assert!(load_items(&config, &client).await.is_err());
    }

    #[test]
    fn test_read_items_file() {
        let dir = std::env::temp_dir().join(format!("catalog-viewer-items-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("items.json");
        fs::write(
            &path,
            r#"[{"title": "One", "imgs": ["1.jpg"]}, {"title": "Two", "imgs_id": "two"}]"#,
        )
        .unwrap();

        let items = read_items_file(&path).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1], Item::deferred("Two", "two"));

        fs::write(&path, "not json").unwrap();
        assert!(matches!(read_items_file(&path), Err(ViewerError::Json(_))));

        fs::remove_dir_all(&dir).unwrap();
    }
}
