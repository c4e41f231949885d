use dioxus::prelude::*;

use flash_core::model::CategoryFilter;

use crate::context::AppContext;
use crate::vm::{CardIntent, CardVm};

#[component]
pub fn FlashcardView() -> Element {
    let ctx = use_context::<AppContext>();
    let vocabulary = ctx.vocabulary();
    let speech = ctx.speech();
    let mut vm = use_signal(move || CardVm::new(vocabulary));

    let card = vm.read().clone();
    let card_class = card.card_class();
    let front = card.front().to_string();
    let back = card.back().to_string();
    let position = card.position_label();
    let selected = card.selected_category().to_string();
    let notice = card.notice().map(str::to_string);
    let categories = card.category_options();
    let show_filter = categories.len() > 1;

    rsx! {
        div { class: "page cards-page",
            header { class: "view-header",
                h2 { class: "view-title", "Cards" }
                p { class: "view-subtitle", "Click the card to flip it." }
            }
            div { class: "view-divider" }
            if show_filter {
                label { class: "category-filter",
                    "Filter by category: "
                    select {
                        id: "category",
                        value: "{selected}",
                        onchange: move |evt: FormEvent| {
                            let filter = CategoryFilter::from_label(&evt.value());
                            vm.write().apply(CardIntent::SelectCategory(filter));
                        },
                        for name in categories {
                            option {
                                key: "{name}",
                                value: "{name}",
                                selected: name == selected,
                                "{name}"
                            }
                        }
                    }
                }
            }
            if let Some(message) = notice {
                p { class: "card-notice", "{message}" }
            }
            div {
                id: "flashcard",
                class: "{card_class}",
                onclick: move |_| vm.write().apply(CardIntent::Flip),
                div { class: "front", "{front}" }
                div { class: "back", "{back}" }
            }
            p { class: "card-position", "{position}" }
            div { class: "card-actions",
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| vm.write().apply(CardIntent::Next),
                    "➡️ Next"
                }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| speech.speak(vm.read().current_entry()),
                    "🔊 Speak"
                }
            }
        }
    }
}
