use std::sync::Arc;

use flash_core::QuizError;
use flash_core::model::Vocabulary;
use storage::{Storage, load_vocabulary};

use crate::config::AppConfig;
use crate::error::AppServicesError;
use crate::offline::{CacheConfig, HttpNetwork, Network, OfflineCacheProxy};
use crate::quiz_service::QuizService;
use crate::speech::SpeechTrigger;

/// Assembles app-facing services around one vocabulary.
///
/// The quiz is optional: a vocabulary with too few distinct meanings still
/// drives the flashcards and the offline cache.
#[derive(Clone)]
pub struct AppServices {
    vocabulary: Arc<Vocabulary>,
    quiz: Result<Arc<QuizService>, QuizError>,
    speech: SpeechTrigger,
    offline: Arc<OfflineCacheProxy>,
}

impl AppServices {
    /// Wire services from already-built parts.
    #[must_use]
    pub fn new(
        vocabulary: Arc<Vocabulary>,
        quiz: Result<QuizService, QuizError>,
        speech: SpeechTrigger,
        storage: &Storage,
        network: Arc<dyn Network>,
        cache: CacheConfig,
    ) -> Self {
        let offline = Arc::new(OfflineCacheProxy::new(
            cache,
            Arc::clone(&storage.caches),
            network,
        ));
        Self {
            vocabulary,
            quiz: quiz.map(Arc::new),
            speech,
            offline,
        }
    }

    /// Build services backed by `SQLite` cache storage and real network and
    /// speech access.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the vocabulary cannot be loaded or if
    /// storage initialization fails.
    pub async fn from_config(config: &AppConfig) -> Result<Self, AppServicesError> {
        config.validate()?;
        let vocabulary = match &config.vocab_path {
            Some(path) => load_vocabulary(path)?,
            None => Vocabulary::starter(),
        };
        let vocabulary = Arc::new(vocabulary);
        let quiz = QuizService::new(Arc::clone(&vocabulary));
        if let Err(err) = &quiz {
            tracing::warn!(error = %err, "quiz unavailable for this vocabulary");
        }
        let speech = SpeechTrigger::from_command(config.speech_command.as_deref());
        let storage = Storage::sqlite(&config.cache_db_url).await?;
        let cache = CacheConfig::new(config.cache_name.clone(), config.origin.clone());

        Ok(Self::new(
            vocabulary,
            quiz,
            speech,
            &storage,
            Arc::new(HttpNetwork::new()),
            cache,
        ))
    }

    #[must_use]
    pub fn vocabulary(&self) -> Arc<Vocabulary> {
        Arc::clone(&self.vocabulary)
    }

    /// The quiz, or why this vocabulary cannot support one.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotEnoughMeanings` when the quiz is unavailable.
    pub fn quiz(&self) -> Result<Arc<QuizService>, QuizError> {
        self.quiz.clone()
    }

    #[must_use]
    pub fn speech(&self) -> SpeechTrigger {
        self.speech.clone()
    }

    #[must_use]
    pub fn offline(&self) -> Arc<OfflineCacheProxy> {
        Arc::clone(&self.offline)
    }
}
