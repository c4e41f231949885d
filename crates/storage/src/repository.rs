use async_trait::async_trait;
use flash_core::model::{ResourceRequest, ResourceResponse};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Named regions of cached responses, keyed by request identity.
///
/// A region only becomes visible once `store_region` has written all of its
/// entries; a failed write leaves no trace.
#[async_trait]
pub trait CacheStorage: Send + Sync {
    /// Whether a completely stored region with this name exists.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn has_region(&self, name: &str) -> Result<bool, StorageError>;

    /// Create the region (if needed) and store every entry in one step.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if any entry cannot be stored; nothing from this
    /// call is kept in that case.
    async fn store_region(
        &self,
        name: &str,
        entries: &[(ResourceRequest, ResourceResponse)],
    ) -> Result<(), StorageError>;

    /// Look up a request in a region.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read. A missing region
    /// or entry is `Ok(None)`.
    async fn match_request(
        &self,
        name: &str,
        request: &ResourceRequest,
    ) -> Result<Option<ResourceResponse>, StorageError>;

    /// Names of every stored region, sorted.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn region_names(&self) -> Result<Vec<String>, StorageError>;
}

type Region = HashMap<ResourceRequest, ResourceResponse>;

/// Simple in-memory cache storage for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryCacheStorage {
    regions: Arc<Mutex<HashMap<String, Region>>>,
}

impl InMemoryCacheStorage {
    #[must_use]
    pub fn new() -> Self {
        Self {
            regions: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl CacheStorage for InMemoryCacheStorage {
    async fn has_region(&self, name: &str) -> Result<bool, StorageError> {
        let guard = self
            .regions
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.contains_key(name))
    }

    async fn store_region(
        &self,
        name: &str,
        entries: &[(ResourceRequest, ResourceResponse)],
    ) -> Result<(), StorageError> {
        let mut guard = self
            .regions
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let region = guard.entry(name.to_owned()).or_default();
        for (request, response) in entries {
            region.insert(request.clone(), response.clone());
        }
        Ok(())
    }

    async fn match_request(
        &self,
        name: &str,
        request: &ResourceRequest,
    ) -> Result<Option<ResourceResponse>, StorageError> {
        let guard = self
            .regions
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard
            .get(name)
            .and_then(|region| region.get(request))
            .cloned())
    }

    async fn region_names(&self) -> Result<Vec<String>, StorageError> {
        let guard = self
            .regions
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let mut names: Vec<String> = guard.keys().cloned().collect();
        names.sort();
        Ok(names)
    }
}

/// Storage backends behind trait objects for easy swapping.
#[derive(Clone)]
pub struct Storage {
    pub caches: Arc<dyn CacheStorage>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let caches: Arc<dyn CacheStorage> = Arc::new(InMemoryCacheStorage::new());
        Self { caches }
    }
}
