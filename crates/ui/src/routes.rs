use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{FlashcardView, QuizView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", FlashcardView)] Cards {},
        #[route("/quiz", QuizView)] Quiz {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            nav { class: "sidebar",
                h1 { "🀄 Flashcards" }
                ul {
                    li { Link { to: Route::Cards {}, "Cards" } }
                    li { Link { to: Route::Quiz {}, "Quiz" } }
                }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
