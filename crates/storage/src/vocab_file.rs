//! Loading a vocabulary list from a JSON file.
//!
//! The file is a JSON array of `{ "word", "pronunciation", "meaning" }`
//! objects. `pinyin` is accepted for `pronunciation`, other keys are ignored.

use std::path::{Path, PathBuf};

use flash_core::model::Vocabulary;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum VocabularyLoadError {
    #[error("failed to read vocabulary file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid vocabulary json: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parse a vocabulary from JSON text.
///
/// # Errors
///
/// Returns `VocabularyLoadError::Parse` for malformed JSON, blank words or
/// meanings, or an empty list.
pub fn parse_vocabulary(json: &str) -> Result<Vocabulary, VocabularyLoadError> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a vocabulary file.
///
/// # Errors
///
/// Returns `VocabularyLoadError` if the file cannot be read or parsed.
pub fn load_vocabulary(path: &Path) -> Result<Vocabulary, VocabularyLoadError> {
    let raw = std::fs::read_to_string(path).map_err(|source| VocabularyLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let vocabulary = parse_vocabulary(&raw)?;
    tracing::info!(path = %path.display(), entries = vocabulary.len(), "loaded vocabulary");
    Ok(vocabulary)
}
