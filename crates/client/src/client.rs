//! HTTP plumbing for the provider API

use crate::config::ClientConfig;
use crate::endpoints::EnhanceApi;
use crate::error::{EnhanceError, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE, REFERER};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// Request correlation ID header
const X_REQUEST_ID: &str = "X-Request-ID";

/// Client for the image-enhancement provider
///
/// Wraps `reqwest` with the fixed header set the provider expects and a
/// correlation ID per outbound request. Transport errors are never retried
/// here: only the "still running" poll state loops, in
/// [`poll_task`](EnhancerClient::poll_task).
#[derive(Clone)]
pub struct EnhancerClient {
    inner: Client,
    config: Arc<ClientConfig>,
}

impl EnhancerClient {
    /// Create a new client with default configuration from environment
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::from_env()?)
    }

    /// Create a new client with specific configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Ok(value) = HeaderValue::from_str(&config.referer) {
            default_headers.insert(REFERER, value);
        }

        let inner = Client::builder()
            .timeout(config.timeout)
            .default_headers(default_headers)
            .build()
            .map_err(EnhanceError::Request)?;

        Ok(Self {
            inner,
            config: Arc::new(config),
        })
    }

    /// Get the current configuration
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Access the enhancement operations
    #[must_use]
    pub fn enhance(&self) -> EnhanceApi {
        EnhanceApi::new(self.clone())
    }

    /// POST a JSON body to an absolute URL and deserialize the response
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T> {
        let request_id = Uuid::new_v4().to_string();
        debug!(request_id = %request_id, url = %url, "Sending provider request");

        let response = self
            .inner
            .post(url)
            .header(X_REQUEST_ID, &request_id)
            .json(body)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Handle HTTP response and deserialize
    async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            response.json().await.map_err(EnhanceError::Request)
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(EnhanceError::ApiResponse {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let config = ClientConfig::default();
        let client = EnhancerClient::with_config(config);
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_rejects_invalid_config() {
        let config = ClientConfig::default().with_base_url("not-a-url");
        assert!(EnhancerClient::with_config(config).is_err());
    }
}
