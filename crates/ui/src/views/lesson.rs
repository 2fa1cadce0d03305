use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::route_for_path;
use crate::views::code_block::CodeBlock;
use crate::views::demo::DemoStage;
use crate::views::not_found::NotFoundBody;
use crate::vm::{LessonPageVm, NeighborVm, SectionVm};

#[component]
pub fn LessonView(slug: String) -> Element {
    let ctx = use_context::<AppContext>();
    let path = format!("/{slug}");

    let Some(page) = ctx.tutorial().lesson_page(&path) else {
        return rsx! { NotFoundBody { path } };
    };
    let vm = LessonPageVm::from(&page);

    rsx! {
        div { class: "page lesson",
            header { class: "lesson-header",
                div { class: "icon-wrap", "{vm.icon}" }
                div { class: "meta",
                    div { class: "meta-top",
                        h1 { class: "lesson-title", "{vm.title}" }
                        span { class: "difficulty {vm.difficulty_class}", "{vm.difficulty}" }
                    }
                    p { class: "lesson-group", "{vm.group}" }
                    p { class: "description", "{vm.description}" }
                }
            }

            div { class: "lesson-content",
                for section in vm.sections {
                    LessonSectionView { key: "{section.title}", section: section.clone() }
                }
            }

            LessonFooter { previous: vm.previous, next: vm.next }
        }
    }
}

#[component]
fn LessonSectionView(section: SectionVm) -> Element {
    let has_demo = section.demo.is_some();

    rsx! {
        section { class: "lesson-section",
            div { class: "title-row",
                h3 { class: "section-title", "{section.title}" }
                if let Some(badge) = section.badge.clone() {
                    span { class: "badge badge--{badge}", "{badge}" }
                }
            }
            if let Some(subtitle) = section.subtitle.clone() {
                p { class: "subtitle", "{subtitle}" }
            }
            if let Some(html) = section.explanation_html.clone() {
                div { class: "explanation", dangerous_inner_html: "{html}" }
            }

            div { class: if has_demo { "section-grid" } else { "section-grid single" },
                div { class: "code-col",
                    div { class: "col-label", "Code" }
                    CodeBlock {
                        code: section.code.clone(),
                        language: section.language.clone(),
                        filename: section.filename.clone(),
                    }
                }
                if let Some(demo) = section.demo.clone() {
                    div { class: "demo-col",
                        div { class: "col-label", "Live Preview" }
                        div { class: "demo-box",
                            DemoStage { demo }
                        }
                    }
                }
            }

            if !section.tips.is_empty() {
                div { class: "tips",
                    div { class: "tips-header", "Tips & Best Practices" }
                    ul { class: "tips-list",
                        for (i, tip) in section.tips.iter().enumerate() {
                            li { key: "{i}", class: "tip", "{tip}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn LessonFooter(previous: Option<NeighborVm>, next: Option<NeighborVm>) -> Element {
    rsx! {
        nav { class: "lesson-footer",
            if let Some(prev) = previous {
                Link { class: "pager prev", to: route_for_path(&prev.path),
                    span { class: "pager-dir", "← Previous" }
                    span { class: "pager-label", "{prev.icon} {prev.label}" }
                }
            }
            if let Some(next) = next {
                Link { class: "pager next", to: route_for_path(&next.path),
                    span { class: "pager-dir", "Next →" }
                    span { class: "pager-label", "{next.icon} {next.label}" }
                }
            }
        }
    }
}
