use flash_core::model::{VocabEntry, Vocabulary};

use super::test_harness::{ViewKind, setup_view};

#[test]
fn flashcard_view_renders_first_card_front_up() {
    let view = setup_view(ViewKind::Cards, Vocabulary::starter());
    let html = view.render();
    assert!(html.contains("你好"), "missing word in {html}");
    assert!(html.contains("hello (nǐ hǎo)"), "missing back text in {html}");
    assert!(html.contains("1 / 3"), "missing position in {html}");
    assert!(!html.contains("flipped"), "card should start front-up: {html}");
}

#[test]
fn quiz_view_renders_question_and_three_choices() {
    let view = setup_view(ViewKind::Quiz, Vocabulary::starter());
    let html = view.render();
    assert!(html.contains("What does '"), "missing question in {html}");
    assert_eq!(html.matches("class=\"choice\"").count(), 3, "{html}");
    for meaning in ["hello", "thank you", "goodbye"] {
        assert!(html.contains(meaning), "missing {meaning} in {html}");
    }
    assert!(!html.contains("Correct!"), "no feedback before a click: {html}");
}

#[test]
fn flashcard_view_uses_loaded_vocabulary() {
    let vocab = Vocabulary::new(vec![
        VocabEntry::new("猫", "māo", "cat").unwrap(),
        VocabEntry::new("狗", "gǒu", "dog").unwrap(),
    ])
    .unwrap();
    let html = setup_view(ViewKind::Cards, vocab).render();
    assert!(html.contains("猫"), "{html}");
    assert!(html.contains("cat (māo)"), "{html}");
    assert!(html.contains("1 / 2"), "{html}");
}

#[test]
fn quiz_view_explains_when_vocabulary_is_too_small() {
    let vocab = Vocabulary::new(vec![
        VocabEntry::new("猫", "māo", "cat").unwrap(),
        VocabEntry::new("狗", "gǒu", "dog").unwrap(),
    ])
    .unwrap();
    let html = setup_view(ViewKind::Quiz, vocab).render();
    assert!(html.contains("quiz-unavailable"), "{html}");
    assert!(html.contains("at least 3 distinct meanings"), "{html}");
    assert!(!html.contains("What does '"), "{html}");
}

#[test]
fn flashcard_view_offers_category_filter() {
    let vocab = Vocabulary::new(vec![
        VocabEntry::new("猫", "māo", "cat").unwrap().with_category("animals"),
        VocabEntry::new("你好", "nǐ hǎo", "hello").unwrap().with_category("greetings"),
    ])
    .unwrap();
    let html = setup_view(ViewKind::Cards, vocab).render();
    assert!(html.contains("Filter by category"), "{html}");
    for label in ["All", "animals", "greetings"] {
        assert!(html.contains(&format!("value=\"{label}\"")), "missing {label} in {html}");
    }
}

#[test]
fn flashcard_view_hides_filter_without_categories() {
    let html = setup_view(ViewKind::Cards, Vocabulary::starter()).render();
    assert!(!html.contains("Filter by category"), "{html}");
}
