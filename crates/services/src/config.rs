use std::env;
use std::path::PathBuf;

use url::Url;

use crate::error::ConfigError;
use crate::offline::DEFAULT_CACHE_NAME;

pub const DEFAULT_CACHE_DB_URL: &str = "sqlite://flash-cache.sqlite3";
pub const DEFAULT_ORIGIN: &str = "http://localhost:8000/";
pub const DEFAULT_SPEECH_COMMAND: &str = "espeak-ng -v zh";

/// Runtime settings, read from `FLASH_*` environment variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// JSON vocabulary file; `None` uses the built-in starter set.
    pub vocab_path: Option<PathBuf>,
    pub cache_db_url: String,
    pub cache_name: String,
    /// Origin the cache manifest paths are resolved against.
    pub origin: Url,
    /// Program and leading arguments; the word is appended. `None` disables speech.
    pub speech_command: Option<Vec<String>>,
}

impl AppConfig {
    /// # Errors
    ///
    /// Returns `ConfigError` if `FLASH_ORIGIN` is not a valid URL or
    /// `FLASH_CACHE_NAME` is blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`AppConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let vocab_path = lookup("FLASH_VOCAB_PATH")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);
        let cache_db_url =
            lookup("FLASH_CACHE_DB").unwrap_or_else(|| DEFAULT_CACHE_DB_URL.to_string());
        let cache_name = lookup("FLASH_CACHE_NAME").unwrap_or_else(|| DEFAULT_CACHE_NAME.into());
        let origin = parse_origin(
            &lookup("FLASH_ORIGIN").unwrap_or_else(|| DEFAULT_ORIGIN.to_string()),
        )?;
        let speech_command = parse_speech_command(
            &lookup("FLASH_SPEECH_CMD").unwrap_or_else(|| DEFAULT_SPEECH_COMMAND.to_string()),
        );

        let config = Self {
            vocab_path,
            cache_db_url,
            cache_name,
            origin,
            speech_command,
        };
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns `ConfigError::EmptyCacheName` for a blank cache name.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cache_name.trim().is_empty() {
            return Err(ConfigError::EmptyCacheName);
        }
        Ok(())
    }
}

/// # Errors
///
/// Returns `ConfigError::InvalidOrigin` if `raw` is not an absolute URL.
pub fn parse_origin(raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw.trim()).map_err(|source| ConfigError::InvalidOrigin {
        raw: raw.to_string(),
        source,
    })
}

/// Split a command line on whitespace. Blank input disables speech.
#[must_use]
pub fn parse_speech_command(raw: &str) -> Option<Vec<String>> {
    let parts: Vec<String> = raw.split_whitespace().map(str::to_string).collect();
    if parts.is_empty() { None } else { Some(parts) }
}
