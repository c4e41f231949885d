use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Identity of an outbound resource request: method plus absolute URL.
///
/// This is the cache key used by the offline proxy. Methods are stored
/// upper-case so `get` and `GET` address the same entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ResourceRequestDraft")]
pub struct ResourceRequest {
    method: String,
    url: Url,
}

#[derive(Deserialize)]
struct ResourceRequestDraft {
    method: String,
    url: Url,
}

impl TryFrom<ResourceRequestDraft> for ResourceRequest {
    type Error = ResourceError;

    fn try_from(draft: ResourceRequestDraft) -> Result<Self, Self::Error> {
        Self::new(&draft.method, draft.url)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ResourceError {
    #[error("invalid request method: {0:?}")]
    InvalidMethod(String),

    #[error("invalid url {raw:?}: {reason}")]
    InvalidUrl { raw: String, reason: String },
}

impl ResourceRequest {
    /// # Errors
    ///
    /// Returns `ResourceError::InvalidMethod` for blank or non-token methods.
    pub fn new(method: &str, url: Url) -> Result<Self, ResourceError> {
        let method = method.trim();
        if method.is_empty() || !method.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(ResourceError::InvalidMethod(method.to_string()));
        }
        Ok(Self {
            method: method.to_ascii_uppercase(),
            url,
        })
    }

    #[must_use]
    pub fn get(url: Url) -> Self {
        Self {
            method: "GET".to_string(),
            url,
        }
    }

    /// Resolve `path` against `origin` and build a GET request.
    ///
    /// # Errors
    ///
    /// Returns `ResourceError::InvalidUrl` if the path cannot be joined.
    pub fn get_path(origin: &Url, path: &str) -> Result<Self, ResourceError> {
        origin
            .join(path)
            .map(Self::get)
            .map_err(|e| ResourceError::InvalidUrl {
                raw: path.to_string(),
                reason: e.to_string(),
            })
    }

    #[must_use]
    pub fn method(&self) -> &str {
        &self.method
    }

    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }
}

/// A response as stored in, or served from, the asset cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl ResourceResponse {
    #[must_use]
    pub fn new(status: u16, headers: Vec<(String, String)>, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// True for 2xx statuses.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin() -> Url {
        Url::parse("http://localhost:8000/").unwrap()
    }

    #[test]
    fn method_is_normalized() {
        let req = ResourceRequest::new("get", origin()).unwrap();
        assert_eq!(req, ResourceRequest::get(origin()));
    }

    #[test]
    fn invalid_method_is_rejected() {
        assert!(ResourceRequest::new("", origin()).is_err());
        assert!(ResourceRequest::new("GE T", origin()).is_err());
    }

    #[test]
    fn deserialized_method_is_normalized() {
        let json = r#"{"method":"get","url":"http://localhost:8000/app.js"}"#;
        let req: ResourceRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.method(), "GET");
        assert_eq!(req, ResourceRequest::get_path(&origin(), "/app.js").unwrap());

        let bad = r#"{"method":"G T","url":"http://localhost:8000/"}"#;
        assert!(serde_json::from_str::<ResourceRequest>(bad).is_err());
    }

    #[test]
    fn root_path_resolves_to_origin() {
        let req = ResourceRequest::get_path(&origin(), "/").unwrap();
        assert_eq!(req.url().as_str(), "http://localhost:8000/");
        let css = ResourceRequest::get_path(&origin(), "/style.css").unwrap();
        assert_eq!(css.url().as_str(), "http://localhost:8000/style.css");
    }

    #[test]
    fn header_lookup_ignores_case() {
        let resp = ResourceResponse::new(
            200,
            vec![("Content-Type".into(), "text/css".into())],
            b"body{}".to_vec(),
        );
        assert_eq!(resp.header("content-type"), Some("text/css"));
        assert!(resp.is_success());
        assert!(!ResourceResponse::new(404, Vec::new(), Vec::new()).is_success());
    }
}
