use async_trait::async_trait;
use flash_core::model::{ResourceRequest, ResourceResponse};
use reqwest::{Client, Method};

use crate::error::NetworkError;

/// Outbound fetch capability used by the proxy.
#[async_trait]
pub trait Network: Send + Sync {
    /// Perform the request and return the response as received, whatever its
    /// status.
    ///
    /// # Errors
    ///
    /// Returns `NetworkError` when no response could be obtained.
    async fn fetch(&self, request: &ResourceRequest) -> Result<ResourceResponse, NetworkError>;
}

/// `reqwest`-backed network access.
#[derive(Clone, Default)]
pub struct HttpNetwork {
    client: Client,
}

impl HttpNetwork {
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    #[must_use]
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Network for HttpNetwork {
    async fn fetch(&self, request: &ResourceRequest) -> Result<ResourceResponse, NetworkError> {
        let method = Method::from_bytes(request.method().as_bytes())
            .map_err(|_| NetworkError::Method(request.method().to_string()))?;

        let response = self
            .client
            .request(method, request.url().clone())
            .send()
            .await?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response.bytes().await?.to_vec();

        Ok(ResourceResponse::new(status, headers, body))
    }
}
