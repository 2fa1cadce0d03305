use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::routes::route_for_path;
use crate::vm::{NavEffect, NavGroupVm, NavIntent, NavState, build_nav_tree};

/// Navigation tree: brand, progress bar and the collapsible lesson groups.
#[component]
pub fn Sidebar(current_path: String, nav: Signal<NavState>) -> Element {
    let ctx = use_context::<AppContext>();
    let tutorial = ctx.tutorial();
    let navigator = use_navigator();
    let mut nav = nav;

    let progress = tutorial.progress(&current_path);
    let tree = build_nav_tree(tutorial.catalog(), &nav.read(), &current_path);
    let mobile_open = nav.read().mobile_open();

    let on_select = use_callback(move |path: String| {
        let effect = nav.with_mut(|state| state.apply(NavIntent::Select { path }));
        if let NavEffect::Navigate(path) = effect {
            let _ = navigator.push(route_for_path(&path));
        }
    });

    rsx! {
        nav { class: if mobile_open { "sidebar open" } else { "sidebar" },
            div { class: "brand",
                span { class: "brand-icon", "🎨" }
                div {
                    div { class: "brand-name", "{ctx.app_name()}" }
                    div { class: "brand-sub", "Interactive Tutorial" }
                }
            }

            div { class: if progress.is_complete() { "progress complete" } else { "progress" },
                div { class: "progress-bar",
                    div { class: "progress-fill", style: "width: {progress.percent}%" }
                }
                span { class: "progress-label", "{progress.label()}" }
            }

            div { class: "nav",
                for group in tree {
                    NavGroup {
                        key: "{group.name}",
                        group: group.clone(),
                        nav,
                        on_select,
                    }
                }
            }
        }

        if mobile_open {
            div {
                class: "backdrop",
                onclick: move |_| {
                    nav.with_mut(|state| state.apply(NavIntent::CloseMobile));
                },
            }
        }
    }
}

#[component]
fn NavGroup(group: NavGroupVm, nav: Signal<NavState>, on_select: Callback<String>) -> Element {
    let mut nav = nav;
    let name = group.name.clone();
    let chevron = if group.collapsed { "chevron up" } else { "chevron" };

    rsx! {
        div { class: "group",
            button {
                class: "group-label",
                r#type: "button",
                aria_expanded: "{!group.collapsed}",
                onclick: move |_| {
                    nav.with_mut(|state| state.apply(NavIntent::ToggleGroup(name.clone())));
                },
                span { "{group.name}" }
                span { class: "{chevron}", "▾" }
            }

            if !group.collapsed {
                ul { class: "list",
                    for item in group.items.iter() {
                        li { key: "{item.path}",
                            button {
                                class: if item.active { "link active" } else { "link" },
                                r#type: "button",
                                aria_current: if item.active { "page" } else { "false" },
                                onclick: {
                                    let path = item.path.clone();
                                    move |_| on_select.call(path.clone())
                                },
                                span { class: "link-icon", "{item.icon}" }
                                span { class: "link-label", "{item.label}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
