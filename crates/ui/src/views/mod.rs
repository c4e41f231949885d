mod flashcards;
mod quiz;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use flashcards::FlashcardView;
pub use quiz::QuizView;
