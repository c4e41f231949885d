use dioxus::prelude::*;

use crate::context::AppContext;
use crate::vm::{QuizIntent, QuizVm};

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let quiz = ctx.quiz();
    let quiz_for_init = quiz.clone();
    let vm = use_signal(move || quiz_for_init.as_ref().ok().map(|quiz| QuizVm::start(quiz)));

    let quiz = match quiz {
        Ok(quiz) => quiz,
        Err(err) => {
            let message = err.to_string();
            return rsx! {
                div { class: "page quiz-page",
                    header { class: "view-header",
                        h2 { class: "view-title", "Quiz" }
                    }
                    div { class: "view-divider" }
                    p { id: "quiz-unavailable", class: "quiz-unavailable", "{message}" }
                }
            };
        }
    };
    let Some(state) = vm.read().clone() else {
        return rsx! {};
    };

    let prompt = state.prompt();
    let feedback = state.feedback();
    let choices = state.choices().into_iter().map(|choice| {
        let mut vm = vm;
        let quiz = quiz.clone();
        let class = choice.class;
        let text = choice.label.clone();
        let label = choice.label;
        rsx! {
            button {
                key: "{text}",
                class: "{class}",
                r#type: "button",
                onclick: move |_| {
                    if let Some(state) = vm.write().as_mut() {
                        state.apply(&quiz, QuizIntent::Choose(label.clone()));
                    }
                },
                "{text}"
            }
        }
    });
    let next_quiz = quiz.clone();

    rsx! {
        div { class: "page quiz-page",
            header { class: "view-header",
                h2 { class: "view-title", "Quiz" }
            }
            div { class: "view-divider" }
            p { id: "question", class: "quiz-question", "{prompt}" }
            div { id: "choices", class: "quiz-choices", {choices} }
            if let Some(message) = feedback {
                p { class: "quiz-feedback", "{message}" }
            }
            button {
                class: "btn btn-secondary",
                r#type: "button",
                onclick: move |_| {
                    let mut vm = vm;
                    if let Some(state) = vm.write().as_mut() {
                        state.apply(&next_quiz, QuizIntent::NextQuestion);
                    }
                },
                "Next question"
            }
        }
    }
}
