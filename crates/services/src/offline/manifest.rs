use flash_core::model::{ResourceError, ResourceRequest};
use url::Url;

/// Region name for the current asset set. Bump it to invalidate the cache.
pub const DEFAULT_CACHE_NAME: &str = "lang-app-v1";

/// Assets provisioned at install time.
pub const DEFAULT_MANIFEST: [&str; 6] = [
    "/",
    "/index.html",
    "/style.css",
    "/app.js",
    "/manifest.json",
    "/icon.png",
];

/// What to cache and where it lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CacheConfig {
    pub cache_name: String,
    pub origin: Url,
    pub manifest: Vec<String>,
}

impl CacheConfig {
    /// Config with the default manifest.
    #[must_use]
    pub fn new(cache_name: impl Into<String>, origin: Url) -> Self {
        Self {
            cache_name: cache_name.into(),
            origin,
            manifest: DEFAULT_MANIFEST.iter().map(|p| (*p).to_string()).collect(),
        }
    }

    #[must_use]
    pub fn with_manifest<I, S>(mut self, manifest: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.manifest = manifest.into_iter().map(Into::into).collect();
        self
    }

    /// Manifest paths resolved against the origin, in manifest order.
    ///
    /// # Errors
    ///
    /// Returns `ResourceError::InvalidUrl` for a path that cannot be joined.
    pub fn requests(&self) -> Result<Vec<ResourceRequest>, ResourceError> {
        self.manifest
            .iter()
            .map(|path| ResourceRequest::get_path(&self.origin, path))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_manifest_resolves_against_origin() {
        let config = CacheConfig::new(
            DEFAULT_CACHE_NAME,
            Url::parse("http://localhost:8000/").unwrap(),
        );
        let urls: Vec<String> = config
            .requests()
            .unwrap()
            .iter()
            .map(|r| r.url().to_string())
            .collect();
        assert_eq!(urls[0], "http://localhost:8000/");
        assert_eq!(urls[3], "http://localhost:8000/app.js");
        assert_eq!(urls.len(), DEFAULT_MANIFEST.len());
    }

    #[test]
    fn custom_manifest_replaces_default() {
        let config = CacheConfig::new("v2", Url::parse("https://x.example/app/").unwrap())
            .with_manifest(["a.css", "b.js"]);
        let urls: Vec<String> = config
            .requests()
            .unwrap()
            .iter()
            .map(|r| r.url().to_string())
            .collect();
        assert_eq!(urls, ["https://x.example/app/a.css", "https://x.example/app/b.js"]);
    }
}
