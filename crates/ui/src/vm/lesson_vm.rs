use mastery_core::content::{Demo, LessonSection};
use mastery_core::model::LessonEntry;
use services::LessonPage;

use crate::vm::markdown_vm::markdown_to_html;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NeighborVm {
    pub path: String,
    pub label: String,
    pub icon: String,
}

impl From<&LessonEntry> for NeighborVm {
    fn from(entry: &LessonEntry) -> Self {
        Self {
            path: entry.path().to_string(),
            label: entry.label().to_string(),
            icon: entry.icon().to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionVm {
    pub title: String,
    pub subtitle: Option<String>,
    pub explanation_html: Option<String>,
    pub code: String,
    pub language: String,
    pub filename: Option<String>,
    pub demo: Option<Demo>,
    pub tips: Vec<String>,
    pub badge: Option<String>,
}

impl From<&LessonSection> for SectionVm {
    fn from(section: &LessonSection) -> Self {
        Self {
            title: section.title.to_string(),
            subtitle: section.subtitle.map(str::to_string),
            explanation_html: section.explanation.map(markdown_to_html),
            code: section.trimmed_code().to_string(),
            language: section.language.to_string(),
            filename: section.filename.map(str::to_string),
            demo: section.demo.clone(),
            tips: section.tips.iter().map(|tip| (*tip).to_string()).collect(),
            badge: section.badge.map(|badge| badge.label().to_string()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonPageVm {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub difficulty: String,
    pub difficulty_class: String,
    pub group: String,
    pub sections: Vec<SectionVm>,
    pub previous: Option<NeighborVm>,
    pub next: Option<NeighborVm>,
}

impl From<&LessonPage> for LessonPageVm {
    fn from(page: &LessonPage) -> Self {
        let content = page.content;
        Self {
            icon: content.icon.to_string(),
            title: content.title.to_string(),
            description: content.description.to_string(),
            difficulty: content.difficulty.label().to_string(),
            difficulty_class: content.difficulty.css_class().to_string(),
            group: page.group.clone(),
            sections: content.sections.iter().map(SectionVm::from).collect(),
            previous: page.previous.as_ref().map(NeighborVm::from),
            next: page.next.as_ref().map(NeighborVm::from),
        }
    }
}

/// Numbered lines for the code block gutter, starting at 1.
#[must_use]
pub fn numbered_lines(code: &str) -> Vec<(usize, String)> {
    code.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use services::TutorialService;

    use super::*;

    #[test]
    fn maps_lesson_page_with_neighbors() {
        let service = TutorialService::builtin("Test").unwrap();
        let page = service.lesson_page("/selectors").unwrap();
        let vm = LessonPageVm::from(&page);

        assert_eq!(vm.title, "CSS Selectors");
        assert_eq!(vm.difficulty, "Beginner");
        assert_eq!(vm.difficulty_class, "beginner");
        assert_eq!(vm.group, "Fundamentals");
        assert_eq!(vm.previous.as_ref().map(|n| n.path.as_str()), Some("/"));
        assert_eq!(vm.next.as_ref().map(|n| n.path.as_str()), Some("/box-model"));
        assert_eq!(vm.sections.len(), page.content.sections.len());
    }

    #[test]
    fn section_explanations_render_as_html() {
        let service = TutorialService::builtin("Test").unwrap();
        let page = service.lesson_page("/box-model").unwrap();
        let vm = LessonPageVm::from(&page);
        let sizing = vm.sections.iter().find(|s| s.title == "box-sizing").unwrap();
        let html = sizing.explanation_html.as_deref().unwrap();
        assert!(html.contains("<code>content-box</code>"), "{html}");
        assert!(sizing.demo.is_some());
    }

    #[test]
    fn badges_and_languages_come_through() {
        let service = TutorialService::builtin("Test").unwrap();
        let page = service.lesson_page("/variables").unwrap();
        let vm = LessonPageVm::from(&page);
        assert!(vm.sections.iter().any(|s| s.badge.as_deref() == Some("pro")));
        assert!(vm.sections.iter().any(|s| s.language == "javascript"));
        assert!(vm.sections.iter().all(|s| !s.code.starts_with('\n')));
    }

    #[test]
    fn numbered_lines_start_at_one() {
        let lines = numbered_lines("a {\n  color: red;\n}");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], (1, "a {".to_string()));
        assert_eq!(lines[2], (3, "}".to_string()));
    }
}
