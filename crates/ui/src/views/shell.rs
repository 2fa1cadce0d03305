use dioxus::prelude::*;
use dioxus_router::{Outlet, use_route};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::scripts::scroll_to_top;
use crate::views::sidebar::Sidebar;
use crate::vm::{NavIntent, NavState};

/// Id of the scrollable content viewport.
pub const CONTENT_ID: &str = "content";

const MDN_URL: &str = "https://developer.mozilla.org/en-US/docs/Web/CSS";

/// Persistent frame around every page: navigation tree, top bar and the
/// routed content.
#[component]
pub fn Layout() -> Element {
    let route = use_route::<Route>();
    let current_path = route.to_string();
    let nav = use_signal(NavState::default);

    use_effect(use_reactive((&current_path,), |(path,)| {
        log::debug!("navigated to {path}");
        spawn(async move {
            scroll_to_top(CONTENT_ID).await;
        });
    }));

    rsx! {
        div { class: "shell",
            Sidebar { current_path: current_path.clone(), nav }
            div { class: "main",
                Topbar { current_path: current_path.clone(), nav }
                main { id: CONTENT_ID, class: "content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
pub fn Topbar(current_path: String, nav: Signal<NavState>) -> Element {
    let ctx = use_context::<AppContext>();
    let crumb = ctx.tutorial().breadcrumb(&current_path);
    let mut nav = nav;

    rsx! {
        header { class: "topbar",
            button {
                class: "menu-btn",
                r#type: "button",
                aria_label: "Open navigation",
                onclick: move |_| {
                    nav.with_mut(|state| state.apply(NavIntent::OpenMobile));
                },
                "☰"
            }

            div { class: "breadcrumb",
                span { "{crumb.app_name}" }
                if let Some(current) = crumb.current {
                    span { class: "sep", "/" }
                    span { class: "current", "{current.icon()} {current.label()}" }
                }
            }

            a {
                class: "mdn-link",
                href: MDN_URL,
                target: "_blank",
                rel: "noopener noreferrer",
                "MDN Docs ↗"
            }
        }
    }
}
