use std::path::PathBuf;
use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::Clock;
use quiz_core::model::{Category, RoundCount};
use quiz_core::time::fixed_now;
use services::DatasetIndex;

use crate::context::{UiApp, build_app_context};
use crate::views::QuizView;

#[derive(Clone)]
struct TestApp {
    dataset: Arc<DatasetIndex>,
    default_rounds: RoundCount,
}

impl UiApp for TestApp {
    fn dataset(&self) -> Arc<DatasetIndex> {
        Arc::clone(&self.dataset)
    }

    fn default_rounds(&self) -> RoundCount {
        self.default_rounds
    }

    fn clock(&self) -> Clock {
        Clock::fixed(fixed_now())
    }

    fn rng_seed(&self) -> Option<u64> {
        Some(1)
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(app));
    rsx! { QuizView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Every category holds one image under `/data/<category>/`.
pub fn full_dataset() -> DatasetIndex {
    DatasetIndex::from_entries(Category::ALL.map(|category| {
        (
            category,
            vec![PathBuf::from(format!("/data/{category}/scan.jpg"))],
        )
    }))
}

pub fn setup_view_harness(dataset: DatasetIndex, default_rounds: RoundCount) -> ViewHarness {
    let app = Arc::new(TestApp {
        dataset: Arc::new(dataset),
        default_rounds,
    });
    let dom = VirtualDom::new_with_props(ViewHarnessRoot, ViewHarnessProps { app });
    ViewHarness { dom }
}
