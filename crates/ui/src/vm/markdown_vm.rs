use std::collections::{HashMap, HashSet};

/// Render lesson prose (Markdown) to sanitised HTML.
#[must_use]
pub fn markdown_to_html(input: &str) -> String {
    let mut options = pulldown_cmark::Options::empty();
    options.insert(pulldown_cmark::Options::ENABLE_STRIKETHROUGH);

    let parser = pulldown_cmark::Parser::new_ext(input, options);
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);
    sanitize_html(&html)
}

#[must_use]
pub fn sanitize_html(html: &str) -> String {
    let tags: HashSet<&str> = [
        "p", "br", "em", "strong", "del", "code", "pre", "ul", "ol", "li", "a",
    ]
    .into_iter()
    .collect();

    let mut attributes: HashMap<&str, HashSet<&str>> = HashMap::new();
    attributes.insert("a", ["href"].into_iter().collect());

    ammonia::Builder::new()
        .tags(tags)
        .tag_attributes(attributes)
        .clean(html)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::{markdown_to_html, sanitize_html};

    #[test]
    fn inline_code_and_emphasis_survive() {
        let html = markdown_to_html("Use `gap` over **margins**.");
        assert!(html.contains("<code>gap</code>"), "{html}");
        assert!(html.contains("<strong>margins</strong>"), "{html}");
    }

    #[test]
    fn markdown_to_html_sanitizes_links() {
        let html = markdown_to_html("[Link](javascript:alert(1))");
        assert!(html.contains("Link"));
        assert!(!html.contains("javascript:"));
    }

    #[test]
    fn sanitize_drops_scripts_and_styles() {
        let html = sanitize_html("<p style=\"color:red\">hi</p><script>alert(1)</script>");
        assert_eq!(html, "<p>hi</p>");
    }
}
