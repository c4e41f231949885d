use std::sync::Arc;

use flash_core::QuizError;
use flash_core::model::Vocabulary;
use services::{QuizService, SpeechTrigger};

/// What the views need from the composition root.
pub trait UiApp: Send + Sync {
    fn vocabulary(&self) -> Arc<Vocabulary>;
    /// `Err` when the vocabulary cannot support a quiz; the cards still work.
    fn quiz(&self) -> Result<Arc<QuizService>, QuizError>;
    fn speech(&self) -> SpeechTrigger;
}

#[derive(Clone)]
pub struct AppContext {
    vocabulary: Arc<Vocabulary>,
    quiz: Result<Arc<QuizService>, QuizError>,
    speech: SpeechTrigger,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            vocabulary: app.vocabulary(),
            quiz: app.quiz(),
            speech: app.speech(),
        }
    }

    #[must_use]
    pub fn vocabulary(&self) -> Arc<Vocabulary> {
        Arc::clone(&self.vocabulary)
    }

    /// # Errors
    ///
    /// Returns the reason the quiz is unavailable.
    pub fn quiz(&self) -> Result<Arc<QuizService>, QuizError> {
        self.quiz.clone()
    }

    #[must_use]
    pub fn speech(&self) -> SpeechTrigger {
        self.speech.clone()
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
