//! Multiple-choice question generation.
//!
//! A question picks its target uniformly at random, with replacement across
//! questions: the same word may come up twice in a row. Distractors are
//! drawn by rejection sampling over the whole vocabulary until the option
//! set holds `OPTION_COUNT` distinct meanings, then the options are put in a
//! uniform random order (Fisher–Yates).

use std::sync::Arc;

use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;

use crate::model::{OPTION_COUNT, QuizQuestion, Vocabulary};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("quiz needs at least 3 distinct meanings, vocabulary has {found}")]
    NotEnoughMeanings { found: usize },
}

/// Builds questions over a fixed vocabulary.
#[derive(Debug, Clone)]
pub struct QuizEngine {
    vocabulary: Arc<Vocabulary>,
}

impl QuizEngine {
    /// # Errors
    ///
    /// Returns `QuizError::NotEnoughMeanings` when the vocabulary has fewer
    /// distinct meanings than options per question; distractor sampling
    /// could never finish otherwise.
    pub fn new(vocabulary: Arc<Vocabulary>) -> Result<Self, QuizError> {
        let found = vocabulary.distinct_meaning_count();
        if found < OPTION_COUNT {
            return Err(QuizError::NotEnoughMeanings { found });
        }
        Ok(Self { vocabulary })
    }

    #[must_use]
    pub fn vocabulary(&self) -> &Arc<Vocabulary> {
        &self.vocabulary
    }

    /// Draw a fresh question.
    pub fn new_question<R: Rng>(&self, rng: &mut R) -> QuizQuestion {
        let entries = self.vocabulary.entries();
        let target = &entries[rng.random_range(0..entries.len())];

        let mut options: [String; OPTION_COUNT] = Default::default();
        options[0] = target.meaning().to_owned();
        let mut filled = 1;
        while filled < OPTION_COUNT {
            let candidate = entries[rng.random_range(0..entries.len())].meaning();
            if !options[..filled].iter().any(|opt| opt == candidate) {
                options[filled] = candidate.to_owned();
                filled += 1;
            }
        }
        options.shuffle(rng);

        QuizQuestion::new(target.clone(), options)
    }
}
