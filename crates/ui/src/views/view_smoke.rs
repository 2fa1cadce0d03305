use crate::vm::{NavIntent, NavState};

use super::test_harness::{APP_NAME, ViewKind, setup_app_harness, setup_view_harness};

fn render(view: ViewKind) -> String {
    let mut harness = setup_view_harness(view);
    harness.rebuild();
    harness.render()
}

#[test]
fn home_view_smoke_renders_curriculum_and_calls_to_action() {
    let html = render(ViewKind::Home);
    assert!(html.contains("Start Learning"), "missing start link in {html}");
    assert!(html.contains("Jump to Flexbox"), "missing jump link in {html}");
    assert!(html.contains("Curriculum"), "missing curriculum in {html}");
    for group in ["Fundamentals", "Layout", "Visual Effects", "Advanced"] {
        assert!(html.contains(group), "missing group {group} in {html}");
    }
    assert!(html.contains("Skill Levels"), "missing stats in {html}");
}

#[test]
fn lesson_view_smoke_renders_sections_code_and_demo() {
    let html = render(ViewKind::Lesson("flexbox".into()));
    assert!(html.contains("Flexbox"), "missing title in {html}");
    assert!(html.contains("Flex Container Basics"), "missing section in {html}");
    assert!(html.contains("flex-container.css"), "missing filename in {html}");
    assert!(html.contains("Live Preview"), "missing demo in {html}");
    assert!(html.contains("row-reverse"), "missing demo option in {html}");
    assert!(html.contains("Tips"), "missing tips in {html}");
    assert!(html.contains("Next"), "missing pager in {html}");
}

#[test]
fn lesson_view_smoke_unknown_slug_falls_back_to_not_found() {
    let html = render(ViewKind::Lesson("does-not-exist".into()));
    assert!(html.contains("Page not found"), "missing fallback in {html}");
    assert!(html.contains("/does-not-exist"), "missing path in {html}");
}

#[test]
fn not_found_view_smoke_echoes_nested_path() {
    let html = render(ViewKind::NotFound(vec!["grid".into(), "extra".into()]));
    assert!(html.contains("Page not found"), "missing heading in {html}");
    assert!(html.contains("/grid/extra"), "missing path in {html}");
}

#[test]
fn sidebar_smoke_marks_exactly_one_active_entry() {
    let html = render(ViewKind::Sidebar {
        path: "/flexbox".into(),
        state: NavState::default(),
    });
    assert!(html.contains("39% complete"), "missing progress in {html}");
    assert_eq!(html.matches(r#"aria-current="page""#).count(), 1, "{html}");
    assert!(html.contains("Selectors"), "missing entry in {html}");
}

#[test]
fn sidebar_smoke_marks_the_last_lesson_complete() {
    let html = render(ViewKind::Sidebar {
        path: "/modern".into(),
        state: NavState::default(),
    });
    assert!(html.contains("100% complete"), "missing progress in {html}");
    assert!(html.contains(r#"class="progress complete""#), "{html}");

    let html = render(ViewKind::Sidebar {
        path: "/flexbox".into(),
        state: NavState::default(),
    });
    assert!(!html.contains("progress complete"), "{html}");
}

#[test]
fn sidebar_smoke_collapsed_group_hides_its_entries() {
    let mut state = NavState::default();
    state.apply(NavIntent::ToggleGroup("Advanced".into()));
    let html = render(ViewKind::Sidebar {
        path: "/".into(),
        state,
    });
    assert!(html.contains("Advanced"), "missing group header in {html}");
    assert!(!html.contains("CSS Variables"), "collapsed entry rendered in {html}");
    assert!(html.contains(r#"aria-expanded="false""#), "{html}");
}

#[test]
fn topbar_smoke_renders_breadcrumb() {
    let html = render(ViewKind::Topbar("/grid".into()));
    assert!(html.contains(APP_NAME), "missing app name in {html}");
    assert!(html.contains("CSS Grid"), "missing current entry in {html}");

    let html = render(ViewKind::Topbar("/nowhere".into()));
    assert!(html.contains(APP_NAME), "missing app name in {html}");
    assert!(!html.contains(r#"class="current""#), "unexpected crumb in {html}");
}

#[test]
fn app_smoke_starts_on_the_welcome_page() {
    let mut harness = setup_app_harness();
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("6% complete"), "missing progress in {html}");
    assert!(html.contains("Start Learning"), "missing home in {html}");
    assert!(html.contains(r#"id="content""#), "missing scroll viewport in {html}");
}
