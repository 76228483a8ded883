use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use learnify_core::model::ColorMode;
use services::{DashboardService, FactService, ManualPreference, PreferenceSource, ThemeSynchronizer};
use storage::repository::{CatalogRepository, InMemoryCatalog};

use crate::app::ThemedShell;
use crate::context::{UiApp, build_app_context};
use crate::views::DashboardView;
use crate::views::dashboard::DashboardTestHandles;

#[derive(Clone)]
struct TestApp {
    dashboard: Arc<DashboardService>,
    facts: Arc<FactService>,
    theme: ThemeSynchronizer,
    preference: Arc<ManualPreference>,
}

impl UiApp for TestApp {
    fn dashboard(&self) -> Arc<DashboardService> {
        Arc::clone(&self.dashboard)
    }

    fn facts(&self) -> Arc<FactService> {
        Arc::clone(&self.facts)
    }

    fn theme(&self) -> ThemeSynchronizer {
        self.theme.clone()
    }

    fn preference(&self) -> Arc<dyn PreferenceSource> {
        self.preference.clone()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Dashboard,
    /// A bare themed shell, without the animated dashboard inside.
    Shell,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    handles: DashboardTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());

    match props.view {
        ViewKind::Dashboard => rsx! { DashboardView {} },
        ViewKind::Shell => rsx! {
            ThemedShell {
                p { "shell" }
            }
        },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: DashboardTestHandles,
    pub preference: Arc<ManualPreference>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(Duration::from_millis(50), self.dom.wait_for_work()).await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Drive the dom until `done` holds, giving up after a bounded number of passes.
    pub async fn drive_until(&mut self, mut done: impl FnMut(&Self) -> bool) -> bool {
        for _ in 0..40 {
            if done(self) {
                return true;
            }
            self.drive_async().await;
        }
        done(self)
    }

    /// Run `f` inside the dom's runtime, as event handlers do.
    pub fn in_runtime<O>(&self, f: impl FnOnce() -> O) -> O {
        self.dom.in_runtime(f)
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

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with_catalog(view, Arc::new(InMemoryCatalog::seeded()), None)
}

pub fn setup_view_harness_with_catalog(
    view: ViewKind,
    catalog: Arc<dyn CatalogRepository>,
    preference: Option<ColorMode>,
) -> ViewHarness {
    let preference = Arc::new(ManualPreference::new(preference));
    let handles = DashboardTestHandles::default();
    let app = Arc::new(TestApp {
        dashboard: Arc::new(DashboardService::new(catalog)),
        facts: Arc::new(FactService::new(None)),
        theme: ThemeSynchronizer::new(),
        preference: Arc::clone(&preference),
    });

    let dom = VirtualDom::new_with_props(
        ViewHarnessRoot,
        ViewHarnessProps {
            app,
            view,
            handles: handles.clone(),
        },
    );

    ViewHarness {
        dom,
        handles,
        preference,
    }
}
