//! Insert-only client for the member application table.
//!
//! The table lives in a hosted backend-as-a-service and is written through
//! its REST insert endpoint: `POST {url}/rest/v1/{table}`.

use std::time::Duration;

use reqwest::{header::HeaderValue, Url};

use crate::config::ApplicationsConfig;
use crate::errors::AppError;
use crate::models::MemberApplication;

pub struct ApplicationsClient {
    client: reqwest::Client,
    insert_url: Url,
    anon_key: String,
}

impl ApplicationsClient {
    pub fn new(config: &ApplicationsConfig, timeout: Duration) -> Result<Self, AppError> {
        let mut insert_url = Url::parse(&config.url)
            .map_err(|e| AppError::Validation(format!("Invalid application service URL: {}", e)))?;
        insert_url
            .path_segments_mut()
            .map_err(|_| {
                AppError::Validation("Application service URL cannot be a base".to_string())
            })?
            .pop_if_empty()
            .extend(["rest", "v1", config.table.as_str()]);

        HeaderValue::from_str(&config.anon_key)
            .map_err(|_| AppError::Validation("Invalid application service key".to_string()))?;

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            insert_url,
            anon_key: config.anon_key.clone(),
        })
    }

    /// Insert one application row.
    pub async fn submit(&self, application: &MemberApplication) -> Result<(), AppError> {
        let resp = self
            .client
            .post(self.insert_url.clone())
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .header("Prefer", "return=minimal")
            .json(&[application])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(%status, "Application insert rejected: {}", body);
            return Err(AppError::Transport(format!(
                "Application service answered {}",
                status
            )));
        }

        tracing::info!("Recorded member application");
        Ok(())
    }
}
