use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::route_for_path;
use crate::vm::{CurriculumGroupVm, HomeVm};

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let vm = HomeVm::from_service(&ctx.tutorial());

    rsx! {
        div { class: "page home",
            section { class: "hero",
                div { class: "hero-badge", "Interactive Learning Experience" }
                h1 { class: "hero-title",
                    "Master CSS with "
                    span { class: "hero-accent", "confidence" }
                }
                p { class: "hero-sub",
                    "A hands-on tutorial covering the essential CSS concepts, from fundamentals to modern techniques. Each lesson pairs real code with tips, and many include a live preview."
                }
                div { class: "hero-actions",
                    if let Some(start) = vm.start {
                        Link { class: "btn btn-primary", to: route_for_path(&start.path), "Start Learning →" }
                    }
                    if let Some(jump) = vm.jump {
                        Link { class: "btn btn-secondary", to: route_for_path(&jump.path),
                            "Jump to {jump.label} {jump.icon}"
                        }
                    }
                }
                div { class: "stats",
                    for stat in vm.stats {
                        div { key: "{stat.label}", class: "stat",
                            span { class: "stat-value", "{stat.value}" }
                            span { class: "stat-label", "{stat.label}" }
                        }
                    }
                }
            }

            section { class: "curriculum",
                h2 { class: "section-title", "Curriculum" }
                div { class: "groups",
                    for group in vm.groups {
                        CurriculumGroup { key: "{group.name}", group: group.clone() }
                    }
                }
            }

            section { class: "features",
                h2 { class: "section-title", "What you'll get" }
                div { class: "feature-grid",
                    for feature in vm.features {
                        div { key: "{feature.title}", class: "feature",
                            div { class: "feature-icon", "{feature.icon}" }
                            h4 { class: "feature-title", "{feature.title}" }
                            p { class: "feature-desc", "{feature.description}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CurriculumGroup(group: CurriculumGroupVm) -> Element {
    rsx! {
        div { class: "group",
            h3 { class: "group-title", "{group.name}" }
            div { class: "cards",
                for card in group.cards.iter() {
                    Link { key: "{card.path}", class: "card", to: route_for_path(&card.path),
                        span { class: "card-icon", "{card.icon}" }
                        span { class: "card-label", "{card.label}" }
                        span { class: "card-arrow", "›" }
                    }
                }
            }
        }
    }
}
