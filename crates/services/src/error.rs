//! Shared error types for the services crate.

use thiserror::Error;

use flash_core::model::ResourceError;
use storage::sqlite::SqliteInitError;
use storage::{StorageError, VocabularyLoadError};

/// Errors emitted while reading configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid origin url {raw:?}: {source}")]
    InvalidOrigin {
        raw: String,
        #[source]
        source: url::ParseError,
    },
    #[error("cache name must not be empty")]
    EmptyCacheName,
}

/// Errors emitted by a speech synthesizer.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SpeechError {
    #[error("speech is not available")]
    Unavailable,
    #[error("failed to start speech command {program:?}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors emitted by a `Network` implementation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum NetworkError {
    #[error("unsupported request method {0:?}")]
    Method(String),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("network unreachable: {0}")]
    Unreachable(String),
}

/// Errors emitted by `OfflineCacheProxy`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum OfflineError {
    #[error("failed to fetch {url} during install: {source}")]
    AssetFetch {
        url: String,
        #[source]
        source: NetworkError,
    },
    #[error("asset {url} returned status {status} during install")]
    AssetStatus { url: String, status: u16 },
    #[error(transparent)]
    Network(#[from] NetworkError),
    #[error(transparent)]
    Resource(#[from] ResourceError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Vocabulary(#[from] VocabularyLoadError),
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
