use std::sync::Arc;

use thiserror::Error;

use crate::model::{CategoryFilter, VocabEntry, Vocabulary};

/// Which side of the card is facing the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CardFace {
    #[default]
    Front,
    Back,
}

/// Display text for the current card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    /// Position in the vocabulary.
    pub index: usize,
    /// Position among the cards the current filter selects.
    pub position: usize,
    /// The word in its source script.
    pub front: String,
    /// `meaning (pronunciation)`.
    pub back: String,
    pub face: CardFace,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NavigatorError {
    #[error("no cards in category '{category}'")]
    EmptyCategory { category: String },
}

/// Walks a vocabulary one card at a time, wrapping at the end.
///
/// Owns the current position and the flip flag. A category filter narrows
/// the walk to a subset of indices; the vocabulary itself is never touched.
/// A fresh navigator starts on the first card, front-facing, unfiltered.
#[derive(Debug, Clone)]
pub struct CardNavigator {
    vocabulary: Arc<Vocabulary>,
    filter: CategoryFilter,
    // Vocabulary indices selected by `filter`; never empty.
    pool: Vec<usize>,
    current: usize,
    face: CardFace,
}

impl CardNavigator {
    #[must_use]
    pub fn new(vocabulary: Arc<Vocabulary>) -> Self {
        let pool = (0..vocabulary.len()).collect();
        Self {
            vocabulary,
            filter: CategoryFilter::All,
            pool,
            current: 0,
            face: CardFace::Front,
        }
    }

    /// Vocabulary index of the current card.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.pool[self.current]
    }

    /// Position of the current card within the filtered pool.
    #[must_use]
    pub fn position(&self) -> usize {
        self.current
    }

    /// Number of cards the current filter selects.
    #[must_use]
    pub fn pool_len(&self) -> usize {
        self.pool.len()
    }

    #[must_use]
    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    #[must_use]
    pub fn current_entry(&self) -> &VocabEntry {
        &self.vocabulary.entries()[self.current_index()]
    }

    #[must_use]
    pub fn face(&self) -> CardFace {
        self.face
    }

    #[must_use]
    pub fn is_flipped(&self) -> bool {
        self.face == CardFace::Back
    }

    #[must_use]
    pub fn vocabulary(&self) -> &Arc<Vocabulary> {
        &self.vocabulary
    }

    /// Text for both faces of the current card.
    #[must_use]
    pub fn render(&self) -> CardView {
        let entry = self.current_entry();
        CardView {
            index: self.current_index(),
            position: self.current,
            front: entry.word().to_owned(),
            back: entry.back_text(),
            face: self.face,
        }
    }

    /// Move to the next card (wrapping), render it and turn it front-up.
    pub fn advance(&mut self) -> CardView {
        self.current = (self.current + 1) % self.pool.len();
        self.face = CardFace::Front;
        self.render()
    }

    /// Flip the card. The index is untouched.
    pub fn toggle_flip(&mut self) -> CardFace {
        self.face = match self.face {
            CardFace::Front => CardFace::Back,
            CardFace::Back => CardFace::Front,
        };
        self.face
    }

    /// Restrict the walk to `filter` and show its first card, front-up.
    ///
    /// # Errors
    ///
    /// Returns `NavigatorError::EmptyCategory` if no entry matches; the
    /// navigator keeps its previous filter and card.
    pub fn set_filter(&mut self, filter: CategoryFilter) -> Result<CardView, NavigatorError> {
        let pool: Vec<usize> = self
            .vocabulary
            .entries()
            .iter()
            .enumerate()
            .filter(|(_, entry)| filter.matches(entry))
            .map(|(index, _)| index)
            .collect();
        if pool.is_empty() {
            return Err(NavigatorError::EmptyCategory {
                category: filter.label().to_owned(),
            });
        }
        self.filter = filter;
        self.pool = pool;
        self.reset();
        Ok(self.render())
    }

    /// Back to the first card of the current filter, front-up.
    pub fn reset(&mut self) {
        self.current = 0;
        self.face = CardFace::Front;
    }
}
