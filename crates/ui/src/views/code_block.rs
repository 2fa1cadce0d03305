use dioxus::prelude::*;

use crate::vm::numbered_lines;

/// Editor-style frame around a code sample with a line-number gutter.
#[component]
pub fn CodeBlock(code: String, language: String, filename: Option<String>) -> Element {
    let lines = numbered_lines(&code);

    rsx! {
        div { class: "code-block",
            div { class: "code-header",
                div { class: "dots",
                    span { class: "dot", "data-color": "red" }
                    span { class: "dot", "data-color": "yellow" }
                    span { class: "dot", "data-color": "green" }
                }
                if let Some(filename) = filename {
                    span { class: "filename", "{filename}" }
                }
                span { class: "language", "{language}" }
            }
            pre { class: "code-body", "data-language": "{language}",
                code {
                    for (number, line) in lines {
                        div { key: "{number}", class: "code-line",
                            span { class: "line-no", "{number}" }
                            span { class: "line-text", "{line}" }
                        }
                    }
                }
            }
        }
    }
}
