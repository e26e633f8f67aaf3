//! Remote content store reached over HTTP.
//!
//! Wire contract:
//! - `GET {base}/collections/{name}/items` answers `{"items": [...]}`
//! - `GET {base}/collections/{name}/items/{id}` answers the record, or 404

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::Deserialize;
use serde_json::Value;

use super::ContentStore;
use crate::errors::AppError;
use crate::models::Collection;

#[derive(Deserialize)]
struct ListEnvelope {
    items: Vec<Value>,
}

/// Hosted content store client. No cache, no retries.
pub struct HttpContentStore {
    client: reqwest::Client,
    base_url: Url,
    api_key: Option<String>,
}

impl HttpContentStore {
    pub fn new(base_url: &str, api_key: Option<String>, timeout: Duration) -> Result<Self, AppError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| AppError::Validation(format!("Invalid content store URL: {}", e)))?;
        if base_url.cannot_be_a_base() {
            return Err(AppError::Validation(format!(
                "Content store URL cannot be a base: {}",
                base_url
            )));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url,
            api_key,
        })
    }

    fn url(&self, segments: &[&str]) -> Result<Url, AppError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::Internal("Content store URL cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get(&self, url: Url) -> Result<reqwest::Response, AppError> {
        let mut request = self.client.get(url);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }
        Ok(request.send().await?)
    }
}

#[async_trait]
impl ContentStore for HttpContentStore {
    fn backend_tag(&self) -> &'static str {
        "http"
    }

    async fn list(&self, collection: Collection) -> Result<Vec<Value>, AppError> {
        let url = self.url(&["collections", collection.as_str(), "items"])?;
        let resp = self.get(url).await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(AppError::Transport(format!(
                "Content store answered {} listing {}",
                status, collection
            )));
        }

        let envelope: ListEnvelope = resp.json().await.map_err(|e| {
            AppError::Transport(format!("Malformed {} list from content store: {}", collection, e))
        })?;
        Ok(envelope.items)
    }

    async fn find(&self, collection: Collection, id: &str) -> Result<Option<Value>, AppError> {
        let url = self.url(&["collections", collection.as_str(), "items", id])?;
        let resp = self.get(url).await?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(AppError::Transport(format!(
                "Content store answered {} fetching {} {}",
                status, collection, id
            )));
        }

        let record: Value = resp.json().await.map_err(|e| {
            AppError::Transport(format!("Malformed {} record from content store: {}", collection, e))
        })?;
        if !record.is_object() {
            return Err(AppError::Transport(format!(
                "Content store returned a non-object {} record",
                collection
            )));
        }
        Ok(Some(record))
    }
}
