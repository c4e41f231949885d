use thiserror::Error;

use crate::model::{ResourceError, VocabEntryError, VocabularyError};
use crate::navigator::NavigatorError;
use crate::quiz::QuizError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Entry(#[from] VocabEntryError),
    #[error(transparent)]
    Vocabulary(#[from] VocabularyError),
    #[error(transparent)]
    Resource(#[from] ResourceError),
    #[error(transparent)]
    Navigator(#[from] NavigatorError),
    #[error(transparent)]
    Quiz(#[from] QuizError),
}
