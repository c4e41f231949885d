use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use flash_core::QuizError;
use flash_core::model::Vocabulary;
use services::{QuizService, SpeechTrigger};

use crate::context::{UiApp, build_app_context};
use crate::views::{FlashcardView, QuizView};

struct TestApp {
    vocabulary: Arc<Vocabulary>,
    quiz: Result<Arc<QuizService>, QuizError>,
}

impl UiApp for TestApp {
    fn vocabulary(&self) -> Arc<Vocabulary> {
        Arc::clone(&self.vocabulary)
    }

    fn quiz(&self) -> Result<Arc<QuizService>, QuizError> {
        self.quiz.clone()
    }

    fn speech(&self) -> SpeechTrigger {
        SpeechTrigger::silent()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Cards,
    Quiz,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    match props.view {
        ViewKind::Cards => rsx! { FlashcardView {} },
        ViewKind::Quiz => rsx! { QuizView {} },
    }
}

pub struct RenderedView {
    pub dom: VirtualDom,
}

impl RenderedView {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        self.dom.process_events();
        self.dom.render_immediate(&mut NoOpMutations);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn setup_view(view: ViewKind, vocabulary: Vocabulary) -> RenderedView {
    let vocabulary = Arc::new(vocabulary);
    let quiz = QuizService::with_seed(Arc::clone(&vocabulary), 17).map(Arc::new);
    let app = Arc::new(TestApp { vocabulary, quiz });
    let mut rendered = RenderedView {
        dom: VirtualDom::new_with_props(ViewHarness, ViewHarnessProps { app, view }),
    };
    rendered.rebuild();
    rendered
}
