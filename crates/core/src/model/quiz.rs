use serde::{Deserialize, Serialize};

use super::entry::VocabEntry;

/// Number of choices presented per question.
pub const OPTION_COUNT: usize = 3;

/// Outcome of evaluating one selected option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerVerdict {
    Correct,
    Incorrect,
}

impl AnswerVerdict {
    #[must_use]
    pub fn is_correct(self) -> bool {
        matches!(self, Self::Correct)
    }

    /// Short feedback line for display.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Correct => "✅ Correct!",
            Self::Incorrect => "❌ Wrong!",
        }
    }
}

/// A single multiple-choice question.
///
/// Ephemeral: built per question and dropped once the user moves on. Nothing
/// about past answers is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    target: VocabEntry,
    options: [String; OPTION_COUNT],
}

impl QuizQuestion {
    /// Assemble a question. `options` is the presented order.
    ///
    /// Callers uphold that the options are distinct and contain the target's
    /// meaning; `QuizEngine` is the only producer outside tests.
    #[must_use]
    pub(crate) fn new(target: VocabEntry, options: [String; OPTION_COUNT]) -> Self {
        Self { target, options }
    }

    #[must_use]
    pub fn target(&self) -> &VocabEntry {
        &self.target
    }

    /// Options in the order they should be shown.
    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn prompt(&self) -> String {
        format!("What does '{}' mean?", self.target.word())
    }

    /// Position of the correct option within the presented order.
    #[must_use]
    pub fn answer_index(&self) -> usize {
        self.options
            .iter()
            .position(|opt| opt == self.target.meaning())
            .unwrap_or_default()
    }

    /// Exact, case-sensitive comparison against the target meaning.
    ///
    /// May be called any number of times for the same question.
    #[must_use]
    pub fn evaluate(&self, selected: &str) -> AnswerVerdict {
        if selected == self.target.meaning() {
            AnswerVerdict::Correct
        } else {
            AnswerVerdict::Incorrect
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question() -> QuizQuestion {
        let target = VocabEntry::new("谢谢", "xièxie", "thank you").unwrap();
        QuizQuestion::new(
            target,
            ["goodbye".into(), "thank you".into(), "hello".into()],
        )
    }

    #[test]
    fn prompt_quotes_the_word() {
        assert_eq!(question().prompt(), "What does '谢谢' mean?");
    }

    #[test]
    fn evaluate_is_exact_and_case_sensitive() {
        let q = question();
        assert_eq!(q.evaluate("thank you"), AnswerVerdict::Correct);
        assert_eq!(q.evaluate("hello"), AnswerVerdict::Incorrect);
        assert_eq!(q.evaluate("Thank you"), AnswerVerdict::Incorrect);
        assert_eq!(q.evaluate("thank you "), AnswerVerdict::Incorrect);
    }

    #[test]
    fn repeated_evaluation_is_stable() {
        let q = question();
        assert!(q.evaluate("thank you").is_correct());
        assert!(q.evaluate("thank you").is_correct());
        assert!(!q.evaluate("goodbye").is_correct());
    }

    #[test]
    fn answer_index_tracks_presented_order() {
        assert_eq!(question().answer_index(), 1);
    }
}
