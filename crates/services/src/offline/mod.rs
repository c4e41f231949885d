//! Cache-first offline proxy for the app's static assets.

mod manifest;
mod network;
mod proxy;

pub use manifest::{CacheConfig, DEFAULT_CACHE_NAME, DEFAULT_MANIFEST};
pub use network::{HttpNetwork, Network};
pub use proxy::{OfflineCacheProxy, ProxiedResponse, ProxyState, ResponseSource};
