use mastery_core::model::Difficulty;
use services::TutorialService;

fn service() -> TutorialService {
    TutorialService::builtin("CSS Mastery").expect("builtin service")
}

#[test]
fn navigation_walk_through_every_lesson() {
    let service = service();
    let mut path = service.start_entry().expect("start entry").path().to_string();
    let mut visited = vec!["/".to_string()];
    let mut last_percent = service.progress("/").percent;
    assert_eq!(last_percent, 6);

    loop {
        let page = service.lesson_page(&path).expect("lesson page");
        assert_eq!(page.entry.path(), path);
        assert_eq!(page.content.slug, page.entry.slug());

        let percent = service.progress(&path).percent;
        assert!(percent > last_percent, "{path}: {percent} <= {last_percent}");
        last_percent = percent;
        visited.push(path.clone());

        match page.next {
            Some(next) => path = next.path().to_string(),
            None => break,
        }
    }

    assert_eq!(visited.len(), service.catalog().len());
    assert_eq!(visited.last().map(String::as_str), Some("/modern"));
    assert_eq!(last_percent, 100);
}

#[test]
fn breadcrumb_tracks_the_current_lesson() {
    let service = service();

    let crumb = service.breadcrumb("/flexbox");
    assert_eq!(crumb.app_name, "CSS Mastery");
    let current = crumb.current.expect("current entry");
    assert_eq!(current.label(), "Flexbox");
    assert_eq!(current.icon(), "↔️");

    let home = service.breadcrumb("/");
    assert_eq!(home.current.map(|e| e.label().to_string()), Some("Welcome".into()));
}

#[test]
fn unknown_paths_degrade_quietly() {
    let service = service();
    let path = "/does-not-exist";

    assert_eq!(service.progress(path).percent, 0);
    assert!(service.entry(path).is_none());
    assert!(service.breadcrumb(path).current.is_none());
    assert!(service.lesson_page(path).is_none());
}

#[test]
fn lesson_page_carries_group_and_neighbors() {
    let service = service();
    let page = service.lesson_page("/display").expect("display page");

    assert_eq!(page.group, "Layout");
    assert_eq!(page.previous.as_ref().map(|e| e.path()), Some("/typography"));
    assert_eq!(page.next.as_ref().map(|e| e.path()), Some("/flexbox"));
    assert_eq!(page.content.difficulty, Difficulty::Beginner);

    let grid = service.lesson_page("/grid").expect("grid page");
    assert_eq!(grid.content.difficulty, Difficulty::Intermediate);
    assert!(grid.content.sections.iter().any(|s| s.demo.is_some()));
}

#[test]
fn root_is_not_a_lesson_page() {
    let service = service();
    assert!(service.lesson_page("/").is_none());
    assert_eq!(service.start_entry().map(|e| e.path()), Some("/selectors"));
}

#[test]
fn library_statistics() {
    let service = service();
    assert_eq!(service.lessons().len(), 17);
    assert!(service.section_count() >= 60);
    assert!(service.demo_count() > 0);
    assert!(service.demo_count() <= service.section_count());
}

#[test]
fn breadcrumb_serializes_for_inspection() {
    let service = service();
    let json = serde_json::to_value(service.breadcrumb("/grid")).expect("serialize");
    assert_eq!(json["app_name"], "CSS Mastery");
    assert_eq!(json["current"]["slug"], "grid");
}
