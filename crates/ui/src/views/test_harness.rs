use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::TutorialService;

use crate::app::App;
use crate::context::{UiApp, build_app_context};
use crate::views::{HomeView, LessonView, NotFoundView, Sidebar, Topbar};
use crate::vm::NavState;

pub const APP_NAME: &str = "CSS Mastery";

#[derive(Clone)]
struct TestApp {
    tutorial: Arc<TutorialService>,
}

impl UiApp for TestApp {
    fn app_name(&self) -> String {
        APP_NAME.to_string()
    }

    fn tutorial(&self) -> Arc<TutorialService> {
        Arc::clone(&self.tutorial)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewKind {
    Home,
    Lesson(String),
    NotFound(Vec<String>),
    Sidebar { path: String, state: NavState },
    Topbar(String),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: Option<ViewKind>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    let view = use_context_provider(|| props.view.clone());
    match view {
        Some(_) => rsx! { Router::<TestRoute> {} },
        // The full application, routed from `/`.
        None => rsx! { App {} },
    }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let Some(view) = use_context::<Option<ViewKind>>() else {
        return rsx! {};
    };
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Lesson(slug) => rsx! { LessonView { slug } },
        ViewKind::NotFound(segments) => rsx! { NotFoundView { segments } },
        ViewKind::Sidebar { path, state } => rsx! { SidebarHarness { path, state } },
        ViewKind::Topbar(path) => rsx! { TopbarHarness { path } },
    }
}

#[component]
fn SidebarHarness(path: String, state: NavState) -> Element {
    let nav = use_signal(|| state);
    rsx! { Sidebar { current_path: path, nav } }
}

#[component]
fn TopbarHarness(path: String) -> Element {
    let nav = use_signal(NavState::default);
    rsx! { Topbar { current_path: path, nav } }
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

fn test_app() -> Arc<TestApp> {
    let tutorial = TutorialService::builtin(APP_NAME).expect("builtin tutorial");
    Arc::new(TestApp {
        tutorial: Arc::new(tutorial),
    })
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app: test_app(),
            view: Some(view),
        },
    );
    ViewHarness { dom }
}

pub fn setup_app_harness() -> ViewHarness {
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app: test_app(),
            view: None,
        },
    );
    ViewHarness { dom }
}
