use flash_core::model::{AnswerVerdict, QuizQuestion};
use services::QuizService;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Choose(String),
    NextQuestion,
}

/// One rendered choice button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceVm {
    pub label: String,
    pub class: &'static str,
}

/// Current question plus the feedback for the last click, if any.
#[derive(Clone, Debug)]
pub struct QuizVm {
    question: QuizQuestion,
    last: Option<(String, AnswerVerdict)>,
}

impl QuizVm {
    #[must_use]
    pub fn start(quiz: &QuizService) -> Self {
        Self {
            question: quiz.new_question(),
            last: None,
        }
    }

    /// Every click is evaluated on its own; there is no lock after the first.
    pub fn apply(&mut self, quiz: &QuizService, intent: QuizIntent) -> Option<AnswerVerdict> {
        match intent {
            QuizIntent::Choose(selected) => {
                let verdict = quiz.evaluate(&self.question, &selected);
                self.last = Some((selected, verdict));
                Some(verdict)
            }
            QuizIntent::NextQuestion => {
                self.question = quiz.new_question();
                self.last = None;
                None
            }
        }
    }

    #[must_use]
    pub fn prompt(&self) -> String {
        self.question.prompt()
    }

    #[must_use]
    pub fn choices(&self) -> Vec<ChoiceVm> {
        self.question
            .options()
            .iter()
            .map(|label| {
                let class = match &self.last {
                    Some((picked, AnswerVerdict::Correct)) if picked == label => {
                        "choice choice--correct"
                    }
                    Some((picked, AnswerVerdict::Incorrect)) if picked == label => {
                        "choice choice--wrong"
                    }
                    _ => "choice",
                };
                ChoiceVm {
                    label: label.clone(),
                    class,
                }
            })
            .collect()
    }

    #[must_use]
    pub fn feedback(&self) -> Option<&'static str> {
        self.last.as_ref().map(|(_, verdict)| verdict.message())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use flash_core::model::Vocabulary;

    use super::*;

    fn quiz() -> QuizService {
        QuizService::with_seed(Arc::new(Vocabulary::starter()), 21).unwrap()
    }

    #[test]
    fn choosing_marks_the_picked_button() {
        let quiz = quiz();
        let mut vm = QuizVm::start(&quiz);
        assert_eq!(vm.feedback(), None);

        let wrong = vm
            .choices()
            .into_iter()
            .map(|c| c.label)
            .find(|label| {
                vm.apply(&quiz, QuizIntent::Choose(label.clone()))
                    == Some(AnswerVerdict::Incorrect)
            })
            .unwrap();
        assert_eq!(vm.feedback(), Some("❌ Wrong!"));
        let picked = vm.choices().into_iter().find(|c| c.label == wrong).unwrap();
        assert_eq!(picked.class, "choice choice--wrong");
    }

    #[test]
    fn each_click_is_evaluated() {
        let quiz = quiz();
        let mut vm = QuizVm::start(&quiz);
        let labels: Vec<String> = vm.choices().into_iter().map(|c| c.label).collect();

        let verdicts: Vec<_> = labels
            .iter()
            .filter_map(|label| vm.apply(&quiz, QuizIntent::Choose(label.clone())))
            .collect();
        assert_eq!(verdicts.len(), 3);
        assert_eq!(verdicts.iter().filter(|v| v.is_correct()).count(), 1);
    }

    #[test]
    fn next_question_clears_feedback() {
        let quiz = quiz();
        let mut vm = QuizVm::start(&quiz);
        let first = vm.choices()[0].label.clone();
        vm.apply(&quiz, QuizIntent::Choose(first));
        assert!(vm.feedback().is_some());

        assert_eq!(vm.apply(&quiz, QuizIntent::NextQuestion), None);
        assert_eq!(vm.feedback(), None);
        assert!(vm.choices().iter().all(|c| c.class == "choice"));
        assert!(vm.prompt().starts_with("What does '"));
    }
}
