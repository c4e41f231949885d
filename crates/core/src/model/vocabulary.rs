use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::entry::VocabEntry;

/// Fixed, ordered vocabulary indexed `0..len()`.
///
/// Built once at startup and never resized. Always holds at least one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<VocabEntry>", into = "Vec<VocabEntry>")]
pub struct Vocabulary {
    entries: Vec<VocabEntry>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum VocabularyError {
    #[error("vocabulary must contain at least one entry")]
    Empty,
}

impl Vocabulary {
    /// Build a vocabulary from an ordered list of entries.
    ///
    /// # Errors
    ///
    /// Returns `VocabularyError::Empty` if `entries` is empty.
    pub fn new(entries: Vec<VocabEntry>) -> Result<Self, VocabularyError> {
        if entries.is_empty() {
            return Err(VocabularyError::Empty);
        }
        Ok(Self { entries })
    }

    /// The three-word Mandarin starter set shipped with the app.
    #[must_use]
    pub fn starter() -> Self {
        let entries = [
            ("你好", "nǐ hǎo", "hello"),
            ("谢谢", "xièxie", "thank you"),
            ("再见", "zàijiàn", "goodbye"),
        ]
        .into_iter()
        .filter_map(|(word, pronunciation, meaning)| {
            VocabEntry::new(word, pronunciation, meaning).ok()
        })
        .collect();
        Self { entries }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&VocabEntry> {
        self.entries.get(index)
    }

    #[must_use]
    pub fn entries(&self) -> &[VocabEntry] {
        &self.entries
    }

    /// Number of distinct meaning strings (exact comparison).
    #[must_use]
    pub fn distinct_meaning_count(&self) -> usize {
        self.entries
            .iter()
            .map(VocabEntry::meaning)
            .collect::<HashSet<_>>()
            .len()
    }

    /// Distinct category names, sorted. Uncategorized entries add nothing.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter_map(VocabEntry::category)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

impl TryFrom<Vec<VocabEntry>> for Vocabulary {
    type Error = VocabularyError;

    fn try_from(entries: Vec<VocabEntry>) -> Result<Self, Self::Error> {
        Self::new(entries)
    }
}

impl From<Vocabulary> for Vec<VocabEntry> {
    fn from(vocabulary: Vocabulary) -> Self {
        vocabulary.entries
    }
}
