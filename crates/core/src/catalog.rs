use std::collections::HashSet;

use serde::Serialize;

use crate::error::CatalogError;
use crate::model::{LessonEntry, LessonGroup};

/// The full ordered curriculum.
///
/// Built once, validated at construction and never mutated afterwards. The
/// flattened entry order (groups in order, items in order) is the single
/// source of truth for progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    groups: Vec<LessonGroup>,
}

impl Catalog {
    /// Validates and wraps a list of groups.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` when a group name is empty or repeated, when an
    /// entry has a malformed path or an empty slug/label, or when a path or
    /// slug appears more than once across the whole catalog.
    pub fn new(groups: Vec<LessonGroup>) -> Result<Self, CatalogError> {
        let mut group_names = HashSet::new();
        let mut paths = HashSet::new();
        let mut slugs = HashSet::new();

        for group in &groups {
            if group.name().trim().is_empty() {
                return Err(CatalogError::EmptyGroupName);
            }
            if !group_names.insert(group.name()) {
                return Err(CatalogError::DuplicateGroup {
                    name: group.name().to_string(),
                });
            }

            for entry in group.items() {
                validate_entry(entry)?;
                if !paths.insert(entry.path()) {
                    return Err(CatalogError::DuplicatePath {
                        path: entry.path().to_string(),
                    });
                }
                if !slugs.insert(entry.slug()) {
                    return Err(CatalogError::DuplicateSlug {
                        slug: entry.slug().to_string(),
                    });
                }
            }
        }

        Ok(Self { groups })
    }

    /// The CSS curriculum shipped with the application.
    ///
    /// # Errors
    ///
    /// Only fails if the compiled-in definition is edited into an invalid
    /// state; the catalog tests guard against that.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(builtin_groups())
    }

    #[must_use]
    pub fn groups(&self) -> &[LessonGroup] {
        &self.groups
    }

    /// Every entry in curriculum order.
    pub fn entries(&self) -> impl Iterator<Item = &LessonEntry> + '_ {
        self.groups.iter().flat_map(|group| group.items().iter())
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries().map(LessonEntry::path)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.iter().map(|group| group.items().len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Exact-match lookup by routing path.
    #[must_use]
    pub fn find(&self, path: &str) -> Option<&LessonEntry> {
        self.entries().find(|entry| entry.path() == path)
    }

    #[must_use]
    pub fn find_by_slug(&self, slug: &str) -> Option<&LessonEntry> {
        self.entries().find(|entry| entry.slug() == slug)
    }

    /// Zero-based index of `path` in the flattened sequence.
    #[must_use]
    pub fn position(&self, path: &str) -> Option<usize> {
        self.entries().position(|entry| entry.path() == path)
    }

    #[must_use]
    pub fn group_of(&self, path: &str) -> Option<&LessonGroup> {
        self.groups.iter().find(|group| group.contains(path))
    }

    /// Previous and next entries around `path` in curriculum order.
    ///
    /// Both sides are `None` when `path` is not in the catalog.
    #[must_use]
    pub fn neighbors(&self, path: &str) -> (Option<&LessonEntry>, Option<&LessonEntry>) {
        let Some(index) = self.position(path) else {
            return (None, None);
        };
        let previous = index
            .checked_sub(1)
            .and_then(|prev| self.entries().nth(prev));
        let next = self.entries().nth(index + 1);
        (previous, next)
    }
}

fn validate_entry(entry: &LessonEntry) -> Result<(), CatalogError> {
    if !entry.path().starts_with('/') {
        return Err(CatalogError::InvalidPath {
            path: entry.path().to_string(),
        });
    }
    let empty = |field: &'static str| CatalogError::EmptyField {
        path: entry.path().to_string(),
        field,
    };
    if entry.slug().trim().is_empty() {
        return Err(empty("slug"));
    }
    if entry.label().trim().is_empty() {
        return Err(empty("label"));
    }
    Ok(())
}

//
// ─── BUILT-IN CURRICULUM ───────────────────────────────────────────────────────
//

type EntryRow = (&'static str, &'static str, &'static str, &'static str);

const FUNDAMENTALS: &[EntryRow] = &[
    ("/", "home", "Welcome", "🏠"),
    ("/selectors", "selectors", "Selectors", "🎯"),
    ("/box-model", "box-model", "Box Model", "📦"),
    ("/colors", "colors", "Colors", "🎨"),
    ("/typography", "typography", "Typography", "✍️"),
];

const LAYOUT: &[EntryRow] = &[
    ("/display", "display", "Display & Flow", "🧩"),
    ("/flexbox", "flexbox", "Flexbox", "↔️"),
    ("/grid", "grid", "CSS Grid", "⊞"),
    ("/positioning", "positioning", "Positioning", "📌"),
];

const VISUAL_EFFECTS: &[EntryRow] = &[
    ("/backgrounds", "backgrounds", "Backgrounds", "🖼️"),
    ("/transitions", "transitions", "Transitions", "🔄"),
    ("/transforms", "transforms", "Transforms", "🔀"),
    ("/animations", "animations", "Animations", "✨"),
    ("/filters", "filters", "Filters & Effects", "🔮"),
];

const ADVANCED: &[EntryRow] = &[
    ("/variables", "variables", "CSS Variables", "🔧"),
    ("/pseudo", "pseudo", "Pseudo-classes", "🔬"),
    ("/responsive", "responsive", "Responsive Design", "📱"),
    ("/modern", "modern", "Modern CSS", "🚀"),
];

fn builtin_groups() -> Vec<LessonGroup> {
    [
        ("Fundamentals", FUNDAMENTALS),
        ("Layout", LAYOUT),
        ("Visual Effects", VISUAL_EFFECTS),
        ("Advanced", ADVANCED),
    ]
    .into_iter()
    .map(|(name, rows)| {
        let items = rows
            .iter()
            .map(|&(path, slug, label, icon)| LessonEntry::new(path, slug, label, icon))
            .collect();
        LessonGroup::new(name, items)
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(path: &str, slug: &str) -> LessonEntry {
        LessonEntry::new(path, slug, slug.to_uppercase(), "•")
    }

    #[test]
    fn builtin_catalog_has_four_groups_and_eighteen_entries() {
        let catalog = Catalog::builtin().unwrap();
        let names: Vec<_> = catalog.groups().iter().map(LessonGroup::name).collect();
        assert_eq!(names, ["Fundamentals", "Layout", "Visual Effects", "Advanced"]);
        assert_eq!(catalog.len(), 18);
        assert_eq!(catalog.paths().next(), Some("/"));
        assert_eq!(catalog.paths().last(), Some("/modern"));
    }

    #[test]
    fn builtin_paths_are_unique() {
        let catalog = Catalog::builtin().unwrap();
        let unique: HashSet<_> = catalog.paths().collect();
        assert_eq!(unique.len(), catalog.len());
    }

    #[test]
    fn new_rejects_duplicate_paths_across_groups() {
        let err = Catalog::new(vec![
            LessonGroup::new("A", vec![entry("/a", "a")]),
            LessonGroup::new("B", vec![entry("/a", "b")]),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            CatalogError::DuplicatePath {
                path: "/a".to_string()
            }
        );
    }

    #[test]
    fn new_rejects_duplicate_slugs() {
        let err = Catalog::new(vec![LessonGroup::new(
            "A",
            vec![entry("/a", "same"), entry("/b", "same")],
        )])
        .unwrap_err();
        assert_eq!(
            err,
            CatalogError::DuplicateSlug {
                slug: "same".to_string()
            }
        );
    }

    #[test]
    fn new_rejects_duplicate_or_blank_group_names() {
        let err = Catalog::new(vec![
            LessonGroup::new("A", vec![entry("/a", "a")]),
            LessonGroup::new("A", vec![entry("/b", "b")]),
        ])
        .unwrap_err();
        assert_eq!(err, CatalogError::DuplicateGroup { name: "A".into() });

        let err = Catalog::new(vec![LessonGroup::new("  ", Vec::new())]).unwrap_err();
        assert_eq!(err, CatalogError::EmptyGroupName);
    }

    #[test]
    fn new_rejects_relative_paths_and_blank_fields() {
        let err = Catalog::new(vec![LessonGroup::new("A", vec![entry("a", "a")])]).unwrap_err();
        assert_eq!(err, CatalogError::InvalidPath { path: "a".into() });

        let blank_label = LessonEntry::new("/a", "a", "", "•");
        let err = Catalog::new(vec![LessonGroup::new("A", vec![blank_label])]).unwrap_err();
        assert_eq!(
            err,
            CatalogError::EmptyField {
                path: "/a".into(),
                field: "label"
            }
        );
    }

    #[test]
    fn find_is_exact_match() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.find("/grid").map(LessonEntry::label), Some("CSS Grid"));
        assert!(catalog.find("/grid/").is_none());
        assert!(catalog.find("/GRID").is_none());
        assert!(catalog.find("/does-not-exist").is_none());
    }

    #[test]
    fn position_and_group_follow_flattened_order() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.position("/"), Some(0));
        assert_eq!(catalog.position("/display"), Some(5));
        assert_eq!(catalog.position("/modern"), Some(17));
        assert_eq!(catalog.position("/nope"), None);
        assert_eq!(catalog.group_of("/filters").map(LessonGroup::name), Some("Visual Effects"));
        assert_eq!(catalog.find_by_slug("box-model").map(LessonEntry::path), Some("/box-model"));
    }

    #[test]
    fn neighbors_cross_group_boundaries() {
        let catalog = Catalog::builtin().unwrap();

        let (prev, next) = catalog.neighbors("/");
        assert!(prev.is_none());
        assert_eq!(next.map(LessonEntry::path), Some("/selectors"));

        let (prev, next) = catalog.neighbors("/typography");
        assert_eq!(prev.map(LessonEntry::path), Some("/colors"));
        assert_eq!(next.map(LessonEntry::path), Some("/display"));

        let (prev, next) = catalog.neighbors("/modern");
        assert_eq!(prev.map(LessonEntry::path), Some("/responsive"));
        assert!(next.is_none());

        assert_eq!(catalog.neighbors("/missing"), (None, None));
    }

    #[test]
    fn serializes_as_group_list() {
        let catalog = Catalog::new(vec![LessonGroup::new("A", vec![entry("/a", "a")])]).unwrap();
        let json = serde_json::to_value(&catalog).unwrap();
        assert_eq!(json[0]["name"], "A");
        assert_eq!(json[0]["items"][0]["path"], "/a");
    }
}
