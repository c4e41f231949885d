use std::sync::{Arc, Mutex, PoisonError};

use flash_core::model::{ResourceRequest, ResourceResponse};
use storage::CacheStorage;

use super::manifest::CacheConfig;
use super::network::Network;
use crate::error::OfflineError;

/// Lifecycle of the proxy for one cache region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProxyState {
    /// Constructed, install not attempted yet.
    Pending,
    Installing,
    /// Region fully stored; fetches are served cache-first.
    Active,
    /// Install failed; fetches go straight to the network.
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseSource {
    Cache,
    Network,
}

/// A response plus where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxiedResponse {
    pub response: ResourceResponse,
    pub source: ResponseSource,
}

/// Cache-first fetch wrapper over one named cache region.
///
/// The region is only written by [`OfflineCacheProxy::install`]; fetch
/// interception never writes back.
pub struct OfflineCacheProxy {
    config: CacheConfig,
    caches: Arc<dyn CacheStorage>,
    network: Arc<dyn Network>,
    state: Mutex<ProxyState>,
}

impl OfflineCacheProxy {
    #[must_use]
    pub fn new(
        config: CacheConfig,
        caches: Arc<dyn CacheStorage>,
        network: Arc<dyn Network>,
    ) -> Self {
        Self {
            config,
            caches,
            network,
            state: Mutex::new(ProxyState::Pending),
        }
    }

    #[must_use]
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> ProxyState {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// False until an install (or a previously stored region) completes.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.state() == ProxyState::Active
    }

    fn set_state(&self, next: ProxyState) {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = next;
    }

    /// Become active, reusing a region that is already stored under this
    /// name, otherwise running a full install.
    ///
    /// # Errors
    ///
    /// Returns `OfflineError` if the install fails.
    pub async fn activate(&self) -> Result<(), OfflineError> {
        if self.is_ready() {
            return Ok(());
        }
        if self.caches.has_region(&self.config.cache_name).await? {
            tracing::info!(cache = %self.config.cache_name, "reusing stored cache region");
            self.set_state(ProxyState::Active);
            return Ok(());
        }
        self.install().await
    }

    /// Fetch every manifest asset and store them as one region.
    ///
    /// All or nothing: a transport failure or a non-2xx status on any asset
    /// fails the install, nothing is stored, and the proxy is left `Failed`.
    ///
    /// # Errors
    ///
    /// Returns `OfflineError` describing the first asset that failed, or the
    /// storage failure.
    pub async fn install(&self) -> Result<(), OfflineError> {
        self.set_state(ProxyState::Installing);
        tracing::info!(
            cache = %self.config.cache_name,
            assets = self.config.manifest.len(),
            "installing offline cache"
        );

        match self.fetch_and_store().await {
            Ok(count) => {
                self.set_state(ProxyState::Active);
                tracing::info!(cache = %self.config.cache_name, count, "offline cache installed");
                Ok(())
            }
            Err(err) => {
                self.set_state(ProxyState::Failed);
                tracing::warn!(
                    cache = %self.config.cache_name,
                    error = %err,
                    "offline cache install failed; serving from network"
                );
                Err(err)
            }
        }
    }

    async fn fetch_and_store(&self) -> Result<usize, OfflineError> {
        let requests = self.config.requests()?;
        let mut entries = Vec::with_capacity(requests.len());

        for request in requests {
            let response = self.network.fetch(&request).await.map_err(|source| {
                OfflineError::AssetFetch {
                    url: request.url().to_string(),
                    source,
                }
            })?;
            if !response.is_success() {
                return Err(OfflineError::AssetStatus {
                    url: request.url().to_string(),
                    status: response.status,
                });
            }
            entries.push((request, response));
        }

        self.caches
            .store_region(&self.config.cache_name, &entries)
            .await?;
        Ok(entries.len())
    }

    /// Serve a request cache-first.
    ///
    /// While active, a cached entry is returned without touching the network.
    /// Misses, and every request while not active, go to the network and the
    /// response is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns `OfflineError::Network` when the request is not cached and the
    /// network cannot answer. No retry is attempted.
    pub async fn handle_fetch(
        &self,
        request: &ResourceRequest,
    ) -> Result<ProxiedResponse, OfflineError> {
        if self.is_ready() {
            match self
                .caches
                .match_request(&self.config.cache_name, request)
                .await
            {
                Ok(Some(response)) => {
                    tracing::debug!(url = %request.url(), "cache hit");
                    return Ok(ProxiedResponse {
                        response,
                        source: ResponseSource::Cache,
                    });
                }
                Ok(None) => tracing::debug!(url = %request.url(), "cache miss"),
                Err(err) => {
                    tracing::warn!(url = %request.url(), error = %err, "cache lookup failed");
                }
            }
        }

        let response = self.network.fetch(request).await?;
        Ok(ProxiedResponse {
            response,
            source: ResponseSource::Network,
        })
    }
}
