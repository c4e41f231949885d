mod category;
mod entry;
mod quiz;
mod resource;
mod vocabulary;

pub use category::{ALL_CATEGORIES, CategoryFilter};
pub use entry::{VocabEntry, VocabEntryError};
pub use quiz::{AnswerVerdict, OPTION_COUNT, QuizQuestion};
pub use resource::{ResourceError, ResourceRequest, ResourceResponse};
pub use vocabulary::{Vocabulary, VocabularyError};
