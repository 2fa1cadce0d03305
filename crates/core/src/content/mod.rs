//! Static lesson material compiled into the binary.
//!
//! Every non-root catalog entry has exactly one [`LessonContent`] keyed by
//! slug. Explanations are Markdown; code samples are shown verbatim.

mod demo;
mod library;

use serde::Serialize;

use crate::model::{Badge, Difficulty};

pub use demo::{Demo, DemoControl, DemoTarget};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LessonContent {
    pub slug: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub difficulty: Difficulty,
    pub sections: &'static [LessonSection],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LessonSection {
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub explanation: Option<&'static str>,
    pub code: &'static str,
    pub language: &'static str,
    pub filename: Option<&'static str>,
    pub demo: Option<Demo>,
    pub tips: &'static [&'static str],
    pub badge: Option<Badge>,
}

impl LessonSection {
    pub(crate) const fn new(title: &'static str, code: &'static str) -> Self {
        Self {
            title,
            subtitle: None,
            explanation: None,
            code,
            language: "css",
            filename: None,
            demo: None,
            tips: &[],
            badge: None,
        }
    }

    /// Code with leading/trailing blank lines removed.
    #[must_use]
    pub fn trimmed_code(&self) -> &'static str {
        self.code.trim()
    }
}

/// All lessons, in curriculum order.
#[must_use]
pub fn library() -> &'static [LessonContent] {
    library::LESSONS
}

#[must_use]
pub fn lesson(slug: &str) -> Option<&'static LessonContent> {
    library::LESSONS.iter().find(|lesson| lesson.slug == slug)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn every_lesson_entry_has_content() {
        let catalog = Catalog::builtin().unwrap();
        for entry in catalog.entries().filter(|entry| !entry.is_root()) {
            let content = lesson(entry.slug())
                .unwrap_or_else(|| panic!("missing content for {}", entry.slug()));
            assert!(!content.sections.is_empty(), "{} has no sections", entry.slug());
        }
        assert_eq!(library().len(), catalog.len() - 1);
    }

    #[test]
    fn library_follows_catalog_order() {
        let catalog = Catalog::builtin().unwrap();
        let catalog_slugs: Vec<_> = catalog
            .entries()
            .filter(|entry| !entry.is_root())
            .map(|entry| entry.slug().to_string())
            .collect();
        let library_slugs: Vec<_> = library().iter().map(|l| l.slug.to_string()).collect();
        assert_eq!(catalog_slugs, library_slugs);
    }

    #[test]
    fn sections_have_titles_code_and_unique_names() {
        for lesson in library() {
            let mut titles = HashSet::new();
            for section in lesson.sections {
                assert!(!section.title.is_empty(), "{}", lesson.slug);
                assert!(!section.trimmed_code().is_empty(), "{} / {}", lesson.slug, section.title);
                assert!(titles.insert(section.title), "duplicate section in {}", lesson.slug);
            }
        }
    }

    #[test]
    fn demo_defaults_are_in_range() {
        for section in library().iter().flat_map(|lesson| lesson.sections) {
            if let Some(demo) = &section.demo {
                assert!(!demo.controls.is_empty(), "{}", section.title);
                for control in demo.controls {
                    assert!(
                        control.default < control.options.len(),
                        "{}: {}",
                        section.title,
                        control.label
                    );
                }
            }
        }
    }

    #[test]
    fn lesson_lookup_by_slug() {
        let flexbox = lesson("flexbox").unwrap();
        assert_eq!(flexbox.title, "Flexbox");
        assert_eq!(flexbox.difficulty, Difficulty::Beginner);
        assert!(lesson("home").is_none());
        assert!(lesson("does-not-exist").is_none());
    }
}
