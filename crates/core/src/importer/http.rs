//! HTTP client for the record service.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::config::ImporterConfig;

use super::types::RecordPage;
use super::{ImportError, RecordSource};

/// Record service client backed by reqwest.
pub struct HttpRecordSource {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl HttpRecordSource {
    /// Create a client from importer configuration.
    pub fn new(config: &ImporterConfig) -> Result<Self, ImportError> {
        if config.base_url.is_empty() {
            return Err(ImportError::NotConfigured(
                "importer base URL is required".to_string(),
            ));
        }

        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl RecordSource for HttpRecordSource {
    async fn fetch_page(&self, page: u32) -> Result<RecordPage, ImportError> {
        let url = format!("{}/titles", self.base_url);

        debug!(page, "record service request");

        let mut request = self.client.get(&url).query(&[("page", page.to_string())]);
        if let Some(key) = &self.api_key {
            request = request.query(&[("api_key", key)]);
        }

        let response = request.send().await?;

        let status = response.status();
        if status == 401 {
            return Err(ImportError::NotConfigured(
                "record service rejected the API key".to_string(),
            ));
        }
        if status == 429 {
            return Err(ImportError::RateLimitExceeded);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ImportError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| ImportError::ParseError(format!("failed to parse record page: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_requires_base_url() {
        let config = ImporterConfig::default();
        let result = HttpRecordSource::new(&config);
        assert!(matches!(result, Err(ImportError::NotConfigured(_))));
    }

    #[test]
    fn test_new_trims_trailing_slash() {
        let config = ImporterConfig {
            base_url: "https://api.example.com/v1/".to_string(),
            ..ImporterConfig::default()
        };

        let source = HttpRecordSource::new(&config).unwrap();
        assert_eq!(source.base_url, "https://api.example.com/v1");
    }
}
