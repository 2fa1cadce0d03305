use serde::{Deserialize, Serialize};

//
// ─── ENTRIES ───────────────────────────────────────────────────────────────────
//

/// A single navigable lesson in the catalog.
///
/// `path` is the routing key: it is what the router reports as the current
/// location and what progress and active-item matching compare against.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LessonEntry {
    path: String,
    slug: String,
    label: String,
    icon: String,
}

impl LessonEntry {
    #[must_use]
    pub fn new(
        path: impl Into<String>,
        slug: impl Into<String>,
        label: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            slug: slug.into(),
            label: label.into(),
            icon: icon.into(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn slug(&self) -> &str {
        &self.slug
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn icon(&self) -> &str {
        &self.icon
    }

    /// True for the welcome page mounted at `/`.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.path == "/"
    }
}

//
// ─── GROUPS ────────────────────────────────────────────────────────────────────
//

/// An ordered, named run of lessons ("Fundamentals", "Layout", ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonGroup {
    name: String,
    items: Vec<LessonEntry>,
}

impl LessonGroup {
    #[must_use]
    pub fn new(name: impl Into<String>, items: Vec<LessonEntry>) -> Self {
        Self {
            name: name.into(),
            items,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn items(&self) -> &[LessonEntry] {
        &self.items
    }

    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.items.iter().any(|item| item.path == path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_entry_is_detected_by_path() {
        let home = LessonEntry::new("/", "home", "Welcome", "🏠");
        let grid = LessonEntry::new("/grid", "grid", "CSS Grid", "⊞");
        assert!(home.is_root());
        assert!(!grid.is_root());
    }

    #[test]
    fn group_contains_matches_exact_paths_only() {
        let group = LessonGroup::new(
            "Layout",
            vec![LessonEntry::new("/grid", "grid", "CSS Grid", "⊞")],
        );
        assert!(group.contains("/grid"));
        assert!(!group.contains("/grid/"));
        assert!(!group.contains("/"));
    }
}
