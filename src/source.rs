use std::path::PathBuf;

use async_trait::async_trait;
use log::{info, warn};
use thiserror::Error;

use crate::media::ContentItem;
use crate::settings::AppSettings;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("network request failed: {0}")]
    Network(String),
    #[error("malformed catalog payload: {0}")]
    Parse(String),
    #[error("catalog endpoint returned status {0}")]
    Status(u16),
    #[error("catalog file unreadable: {0}")]
    Io(#[from] std::io::Error),
}

/// Where the catalog comes from. The page itself never fetches; a host
/// drives one of these once at startup and feeds the result in.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn fetch_catalog(&self) -> Result<Vec<ContentItem>, SourceError>;
}

pub struct HttpSource {
    catalog_url: String,
    http: reqwest::Client,
}

impl HttpSource {
    pub fn new(catalog_url: impl Into<String>) -> Self {
        Self {
            catalog_url: catalog_url.into(),
            http: reqwest::Client::new(),
        }
    }

    pub fn from_settings(settings: &AppSettings) -> Self {
        Self::new(settings.catalog_url.clone())
    }
}

#[async_trait]
impl ContentSource for HttpSource {
    async fn fetch_catalog(&self) -> Result<Vec<ContentItem>, SourceError> {
        let response = self
            .http
            .get(&self.catalog_url)
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(SourceError::Status(response.status().as_u16()));
        }

        response
            .json::<Vec<ContentItem>>()
            .await
            .map_err(|e| SourceError::Parse(e.to_string()))
    }
}

/// Reads the catalog from a JSON file on disk. Handy for offline use and
/// for seeding a demo library.
pub struct LocalSource {
    path: PathBuf,
}

impl LocalSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ContentSource for LocalSource {
    async fn fetch_catalog(&self) -> Result<Vec<ContentItem>, SourceError> {
        let bytes = tokio::fs::read(&self.path).await?;
        serde_json::from_slice(&bytes).map_err(|e| SourceError::Parse(e.to_string()))
    }
}

/// Fetches once and folds failures into an empty catalog so the page
/// still reaches its ready state instead of hanging in loading.
pub async fn load_catalog(source: &dyn ContentSource) -> Vec<ContentItem> {
    match source.fetch_catalog().await {
        Ok(items) => {
            info!("loaded {} catalog items", items.len());
            items
        }
        Err(error) => {
            warn!("catalog load failed, starting empty: {}", error);
            Vec::new()
        }
    }
}
