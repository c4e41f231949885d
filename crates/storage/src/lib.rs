#![forbid(unsafe_code)]

pub mod repository;
pub mod sqlite;
pub mod vocab_file;

pub use repository::{CacheStorage, InMemoryCacheStorage, Storage, StorageError};
pub use vocab_file::{VocabularyLoadError, load_vocabulary, parse_vocabulary};
