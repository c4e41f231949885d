use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ENTRY TYPES ───────────────────────────────────────────────────────────────
//

/// One word/pronunciation/meaning triple, optionally tagged with a category.
///
/// Entries are immutable once built; the fields are only reachable through
/// accessors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "VocabEntryDraft")]
pub struct VocabEntry {
    word: String,
    pronunciation: String,
    meaning: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<String>,
}

impl VocabEntry {
    /// Build a validated entry.
    ///
    /// # Errors
    ///
    /// Returns `VocabEntryError` if the word or meaning is blank.
    pub fn new(
        word: impl Into<String>,
        pronunciation: impl Into<String>,
        meaning: impl Into<String>,
    ) -> Result<Self, VocabEntryError> {
        let word = word.into();
        let meaning = meaning.into();
        if word.trim().is_empty() {
            return Err(VocabEntryError::EmptyWord);
        }
        if meaning.trim().is_empty() {
            return Err(VocabEntryError::EmptyMeaning { word });
        }

        Ok(Self {
            word,
            pronunciation: pronunciation.into(),
            meaning,
            category: None,
        })
    }

    /// Tag the entry with a category. A blank name leaves it uncategorized.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        let category = category.into();
        self.category = (!category.trim().is_empty()).then_some(category);
        self
    }

    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[must_use]
    pub fn pronunciation(&self) -> &str {
        &self.pronunciation
    }

    #[must_use]
    pub fn meaning(&self) -> &str {
        &self.meaning
    }

    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Text shown on the back of a card: `meaning (pronunciation)`.
    #[must_use]
    pub fn back_text(&self) -> String {
        format!("{} ({})", self.meaning, self.pronunciation)
    }
}

/// Unvalidated JSON shape. Older vocabulary files name the pronunciation
/// field `pinyin` and carry review bookkeeping keys, which are ignored.
#[derive(Debug, Deserialize)]
struct VocabEntryDraft {
    word: String,
    #[serde(default, alias = "pinyin")]
    pronunciation: String,
    meaning: String,
    #[serde(default)]
    category: Option<String>,
}

impl TryFrom<VocabEntryDraft> for VocabEntry {
    type Error = VocabEntryError;

    fn try_from(draft: VocabEntryDraft) -> Result<Self, Self::Error> {
        let entry = Self::new(draft.word, draft.pronunciation, draft.meaning)?;
        Ok(match draft.category {
            Some(category) => entry.with_category(category),
            None => entry,
        })
    }
}

//
// ─── ENTRY ERRORS ──────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VocabEntryError {
    #[error("vocabulary word must not be empty")]
    EmptyWord,

    #[error("meaning for '{word}' must not be empty")]
    EmptyMeaning { word: String },
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
