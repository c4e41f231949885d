use std::sync::{Arc, Mutex, PoisonError};

use flash_core::model::{AnswerVerdict, QuizQuestion, Vocabulary};
use flash_core::{QuizEngine, QuizError};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Shared quiz entry point: owns the engine and its random source.
pub struct QuizService {
    engine: QuizEngine,
    rng: Mutex<StdRng>,
}

impl QuizService {
    /// # Errors
    ///
    /// Returns `QuizError::NotEnoughMeanings` for vocabularies with fewer than
    /// three distinct meanings.
    pub fn new(vocabulary: Arc<Vocabulary>) -> Result<Self, QuizError> {
        Ok(Self {
            engine: QuizEngine::new(vocabulary)?,
            rng: Mutex::new(StdRng::from_os_rng()),
        })
    }

    /// Deterministic variant for tests and replays.
    ///
    /// # Errors
    ///
    /// Same as [`QuizService::new`].
    pub fn with_seed(vocabulary: Arc<Vocabulary>, seed: u64) -> Result<Self, QuizError> {
        Ok(Self {
            engine: QuizEngine::new(vocabulary)?,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        })
    }

    #[must_use]
    pub fn new_question(&self) -> QuizQuestion {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        let question = self.engine.new_question(&mut *rng);
        tracing::debug!(word = question.target().word(), "new quiz question");
        question
    }

    /// Evaluate one click on a choice. Nothing is recorded.
    #[must_use]
    pub fn evaluate(&self, question: &QuizQuestion, selected: &str) -> AnswerVerdict {
        let verdict = question.evaluate(selected);
        tracing::debug!(
            word = question.target().word(),
            selected,
            correct = verdict.is_correct(),
            "quiz answer evaluated"
        );
        verdict
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flash_core::model::VocabEntry;

    #[test]
    fn seeded_services_agree() {
        let vocab = Arc::new(Vocabulary::starter());
        let a = QuizService::with_seed(Arc::clone(&vocab), 9).unwrap();
        let b = QuizService::with_seed(vocab, 9).unwrap();
        for _ in 0..10 {
            assert_eq!(a.new_question(), b.new_question());
        }
    }

    #[test]
    fn evaluate_reports_verdict() {
        let service = QuizService::with_seed(Arc::new(Vocabulary::starter()), 1).unwrap();
        let question = service.new_question();
        let answer = question.target().meaning().to_owned();
        assert_eq!(service.evaluate(&question, &answer), AnswerVerdict::Correct);
        let wrong = question
            .options()
            .iter()
            .find(|opt| **opt != answer)
            .cloned()
            .unwrap();
        assert_eq!(service.evaluate(&question, &wrong), AnswerVerdict::Incorrect);
    }

    #[test]
    fn small_vocabulary_is_rejected_up_front() {
        let vocab = Vocabulary::new(vec![
            VocabEntry::new("你好", "nǐ hǎo", "hello").unwrap(),
            VocabEntry::new("谢谢", "xièxie", "thank you").unwrap(),
        ])
        .unwrap();
        assert!(matches!(
            QuizService::new(Arc::new(vocab)),
            Err(QuizError::NotEnoughMeanings { found: 2 })
        ));
    }
}
