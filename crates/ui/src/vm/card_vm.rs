use std::sync::Arc;

use flash_core::model::{ALL_CATEGORIES, CategoryFilter, VocabEntry, Vocabulary};
use flash_core::{CardFace, CardNavigator, CardView};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CardIntent {
    Flip,
    Next,
    SelectCategory(CategoryFilter),
}

/// Flashcard state for one mounted card view.
#[derive(Clone, Debug)]
pub struct CardVm {
    navigator: CardNavigator,
    view: CardView,
    notice: Option<String>,
}

impl CardVm {
    #[must_use]
    pub fn new(vocabulary: Arc<Vocabulary>) -> Self {
        let navigator = CardNavigator::new(vocabulary);
        let view = navigator.render();
        Self {
            navigator,
            view,
            notice: None,
        }
    }

    pub fn apply(&mut self, intent: CardIntent) {
        match intent {
            CardIntent::Flip => {
                self.view.face = self.navigator.toggle_flip();
            }
            CardIntent::Next => {
                self.view = self.navigator.advance();
            }
            CardIntent::SelectCategory(filter) => match self.navigator.set_filter(filter) {
                Ok(view) => {
                    self.view = view;
                    self.notice = None;
                }
                Err(_) => self.notice = Some("No cards in this category".to_string()),
            },
        }
    }

    #[must_use]
    pub fn front(&self) -> &str {
        &self.view.front
    }

    #[must_use]
    pub fn back(&self) -> &str {
        &self.view.back
    }

    #[must_use]
    pub fn current_entry(&self) -> &VocabEntry {
        self.navigator.current_entry()
    }

    /// `"3 / 10"` style position label.
    #[must_use]
    pub fn position_label(&self) -> String {
        format!("{} / {}", self.view.position + 1, self.navigator.pool_len())
    }

    /// Selector labels: `"All"` followed by every category, sorted.
    #[must_use]
    pub fn category_options(&self) -> Vec<String> {
        std::iter::once(ALL_CATEGORIES)
            .chain(self.navigator.vocabulary().categories())
            .map(str::to_owned)
            .collect()
    }

    #[must_use]
    pub fn selected_category(&self) -> &str {
        self.navigator.filter().label()
    }

    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    #[must_use]
    pub fn card_class(&self) -> &'static str {
        match self.view.face {
            CardFace::Front => "flashcard",
            CardFace::Back => "flashcard flipped",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_shows_following_card_front_up() {
        let mut vm = CardVm::new(Arc::new(Vocabulary::starter()));
        vm.apply(CardIntent::Flip);
        assert_eq!(vm.card_class(), "flashcard flipped");

        vm.apply(CardIntent::Next);
        assert_eq!(vm.front(), "谢谢");
        assert_eq!(vm.back(), "thank you (xièxie)");
        assert_eq!(vm.card_class(), "flashcard");
        assert_eq!(vm.position_label(), "2 / 3");
    }

    #[test]
    fn flip_keeps_the_same_card() {
        let mut vm = CardVm::new(Arc::new(Vocabulary::starter()));
        vm.apply(CardIntent::Flip);
        vm.apply(CardIntent::Flip);
        assert_eq!(vm.front(), "你好");
        assert_eq!(vm.card_class(), "flashcard");
        assert_eq!(vm.current_entry().meaning(), "hello");
    }

    fn categorized() -> CardVm {
        let vocab = Vocabulary::new(vec![
            VocabEntry::new("猫", "māo", "cat").unwrap().with_category("animals"),
            VocabEntry::new("你好", "nǐ hǎo", "hello").unwrap().with_category("greetings"),
            VocabEntry::new("狗", "gǒu", "dog").unwrap().with_category("animals"),
        ])
        .unwrap();
        CardVm::new(Arc::new(vocab))
    }

    #[test]
    fn category_selection_narrows_the_deck() {
        let mut vm = categorized();
        assert_eq!(vm.category_options(), ["All", "animals", "greetings"]);
        assert_eq!(vm.selected_category(), "All");

        vm.apply(CardIntent::SelectCategory(CategoryFilter::from_label("animals")));
        assert_eq!(vm.selected_category(), "animals");
        assert_eq!(vm.front(), "猫");
        assert_eq!(vm.position_label(), "1 / 2");

        vm.apply(CardIntent::Next);
        assert_eq!(vm.front(), "狗");
        assert_eq!(vm.position_label(), "2 / 2");
    }

    #[test]
    fn empty_category_shows_notice_and_keeps_card() {
        let mut vm = categorized();
        vm.apply(CardIntent::Next);
        vm.apply(CardIntent::SelectCategory(CategoryFilter::from_label("food")));
        assert_eq!(vm.notice(), Some("No cards in this category"));
        assert_eq!(vm.front(), "你好");
        assert_eq!(vm.selected_category(), "All");

        vm.apply(CardIntent::SelectCategory(CategoryFilter::All));
        assert_eq!(vm.notice(), None);
    }
}
