use dioxus::document::eval;

const SCROLL_TOP_SCRIPT_TEMPLATE: &str = r#"
    const el = document.getElementById("{element_id}");
    if (el) { el.scrollTo({ top: 0, behavior: "instant" }); }
"#;

/// Jump (no smooth scrolling) to the top of the element with `element_id`.
pub async fn scroll_to_top(element_id: &str) {
    let script = scroll_top_script(element_id);
    let _ = eval(&script).await;
}

fn scroll_top_script(element_id: &str) -> String {
    SCROLL_TOP_SCRIPT_TEMPLATE.replace("{element_id}", element_id)
}

#[cfg(test)]
mod tests {
    use super::scroll_top_script;

    #[test]
    fn scroll_script_targets_element_without_animation() {
        let script = scroll_top_script("content");
        assert!(script.contains(r#"getElementById("content")"#));
        assert!(script.contains(r#"behavior: "instant""#));
    }
}
