use std::collections::HashSet;
use std::sync::Arc;

use mastery_core::content::{self, LessonContent};
use mastery_core::model::LessonEntry;
use mastery_core::{Catalog, Progress};

use crate::error::TutorialServiceError;
use crate::view::{Breadcrumb, LessonPage};

/// Read-only facade over the catalog and the lesson library.
///
/// Every query takes the router's current path. Paths that match nothing are
/// a normal outcome (an unknown URL) and come back as `None` / 0%.
#[derive(Clone)]
pub struct TutorialService {
    app_name: String,
    catalog: Arc<Catalog>,
    lessons: &'static [LessonContent],
}

impl TutorialService {
    /// Pair a catalog with its lesson content.
    ///
    /// # Errors
    ///
    /// Returns `TutorialServiceError::MissingContent` when a non-root entry has
    /// no lesson, and `TutorialServiceError::OrphanLesson` when a lesson is not
    /// reachable from the catalog.
    pub fn new(
        app_name: impl Into<String>,
        catalog: Arc<Catalog>,
        lessons: &'static [LessonContent],
    ) -> Result<Self, TutorialServiceError> {
        let mut slugs = HashSet::new();
        for entry in catalog.entries().filter(|entry| !entry.is_root()) {
            if !lessons.iter().any(|lesson| lesson.slug == entry.slug()) {
                return Err(TutorialServiceError::MissingContent {
                    slug: entry.slug().to_string(),
                });
            }
            slugs.insert(entry.slug());
        }
        if let Some(orphan) = lessons.iter().find(|lesson| !slugs.contains(lesson.slug)) {
            return Err(TutorialServiceError::OrphanLesson {
                slug: orphan.slug.to_string(),
            });
        }

        Ok(Self {
            app_name: app_name.into(),
            catalog,
            lessons,
        })
    }

    /// The shipped CSS curriculum with its compiled-in lessons.
    ///
    /// # Errors
    ///
    /// Returns `TutorialServiceError` if the built-in data is inconsistent.
    pub fn builtin(app_name: impl Into<String>) -> Result<Self, TutorialServiceError> {
        let catalog = Arc::new(Catalog::builtin()?);
        let service = Self::new(app_name, catalog, content::library())?;
        log::info!(
            "loaded catalog: {} groups, {} entries, {} lessons",
            service.catalog.groups().len(),
            service.catalog.len(),
            service.lessons.len()
        );
        Ok(service)
    }

    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn lessons(&self) -> &'static [LessonContent] {
        self.lessons
    }

    #[must_use]
    pub fn progress(&self, path: &str) -> Progress {
        mastery_core::progress(&self.catalog, path)
    }

    #[must_use]
    pub fn entry(&self, path: &str) -> Option<&LessonEntry> {
        let entry = self.catalog.find(path);
        if entry.is_none() {
            log::debug!("no catalog entry for path {path}");
        }
        entry
    }

    #[must_use]
    pub fn breadcrumb(&self, path: &str) -> Breadcrumb {
        Breadcrumb {
            app_name: self.app_name.clone(),
            current: self.entry(path).cloned(),
        }
    }

    /// Resolve a lesson route. `None` for the root entry and unknown paths.
    #[must_use]
    pub fn lesson_page(&self, path: &str) -> Option<LessonPage> {
        let entry = self.entry(path)?;
        let content = self
            .lessons
            .iter()
            .find(|lesson| lesson.slug == entry.slug())?;
        let group = self
            .catalog
            .group_of(path)
            .map(|group| group.name().to_string())
            .unwrap_or_default();
        let (previous, next) = self.catalog.neighbors(path);

        Some(LessonPage {
            entry: entry.clone(),
            content,
            group,
            previous: previous.cloned(),
            next: next.cloned(),
        })
    }

    /// First lesson after the welcome page; where "Start Learning" points.
    #[must_use]
    pub fn start_entry(&self) -> Option<&LessonEntry> {
        self.catalog.entries().find(|entry| !entry.is_root())
    }

    /// Number of lesson sections across the whole library.
    #[must_use]
    pub fn section_count(&self) -> usize {
        self.lessons.iter().map(|lesson| lesson.sections.len()).sum()
    }

    /// Number of sections that ship a live preview.
    #[must_use]
    pub fn demo_count(&self) -> usize {
        self.lessons
            .iter()
            .flat_map(|lesson| lesson.sections)
            .filter(|section| section.demo.is_some())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use mastery_core::model::LessonGroup;

    use super::*;

    #[test]
    fn new_rejects_entries_without_content() {
        let catalog = Catalog::new(vec![LessonGroup::new(
            "Extra",
            vec![LessonEntry::new("/houdini", "houdini", "Houdini", "🪄")],
        )])
        .unwrap();
        let err = TutorialService::new("Test", Arc::new(catalog), &[]).err().unwrap();
        assert!(matches!(err, TutorialServiceError::MissingContent { slug } if slug == "houdini"));
    }

    #[test]
    fn new_rejects_lessons_missing_from_catalog() {
        let catalog = Catalog::new(vec![LessonGroup::new(
            "Only home",
            vec![LessonEntry::new("/", "home", "Welcome", "🏠")],
        )])
        .unwrap();
        let err = TutorialService::new("Test", Arc::new(catalog), content::library())
            .err()
            .unwrap();
        assert!(matches!(err, TutorialServiceError::OrphanLesson { slug } if slug == "selectors"));
    }

    #[test]
    fn root_entry_needs_no_content() {
        let catalog = Catalog::new(vec![LessonGroup::new(
            "Only home",
            vec![LessonEntry::new("/", "home", "Welcome", "🏠")],
        )])
        .unwrap();
        let service = TutorialService::new("Test", Arc::new(catalog), &[]).unwrap();
        assert!(service.lesson_page("/").is_none());
        assert!(service.start_entry().is_none());
    }
}
