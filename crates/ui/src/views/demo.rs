use dioxus::prelude::*;
use mastery_core::content::Demo;

/// Live preview: option buttons restyle the stage or its items in place.
#[component]
pub fn DemoStage(demo: Demo) -> Element {
    let mut selection = use_signal(|| demo.default_selection());
    let current = selection.read().clone();
    let stage_style = demo.stage_style(&current);
    let item_style = demo.item_style(&current);

    rsx! {
        div { class: "demo",
            for (ci, control) in demo.controls.iter().enumerate() {
                div { key: "{control.label}", class: "demo-controls",
                    span { class: "demo-label", "{control.label}:" }
                    for (oi, option) in control.options.iter().enumerate() {
                        button {
                            key: "{oi}",
                            class: if current.get(ci).copied() == Some(oi) { "demo-option active" } else { "demo-option" },
                            r#type: "button",
                            onclick: move |_| {
                                selection.with_mut(|picked| {
                                    if let Some(slot) = picked.get_mut(ci) {
                                        *slot = oi;
                                    }
                                });
                            },
                            "{option}"
                        }
                    }
                }
            }
            div { class: "demo-stage", style: "{stage_style}",
                for (i, item) in demo.items.iter().enumerate() {
                    div { key: "{i}", class: "demo-item", style: "{item_style}", "{item}" }
                }
            }
        }
    }
}
