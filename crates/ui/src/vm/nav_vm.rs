use std::collections::HashMap;

use mastery_core::Catalog;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavIntent {
    ToggleGroup(String),
    OpenMobile,
    CloseMobile,
    Select { path: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavEffect {
    None,
    Navigate(String),
}

/// Ephemeral navigation state owned by the shell.
///
/// Groups are expanded unless their flag says otherwise; nothing here
/// outlives the mounted view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    collapsed: HashMap<String, bool>,
    mobile_open: bool,
}

impl NavState {
    #[must_use]
    pub fn is_collapsed(&self, group: &str) -> bool {
        self.collapsed.get(group).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn mobile_open(&self) -> bool {
        self.mobile_open
    }

    pub fn apply(&mut self, intent: NavIntent) -> NavEffect {
        match intent {
            NavIntent::ToggleGroup(group) => {
                let flag = self.collapsed.entry(group).or_insert(false);
                *flag = !*flag;
                NavEffect::None
            }
            NavIntent::OpenMobile => {
                self.mobile_open = true;
                NavEffect::None
            }
            NavIntent::CloseMobile => {
                self.mobile_open = false;
                NavEffect::None
            }
            NavIntent::Select { path } => {
                self.mobile_open = false;
                NavEffect::Navigate(path)
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavItemVm {
    pub path: String,
    pub label: String,
    pub icon: String,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavGroupVm {
    pub name: String,
    pub collapsed: bool,
    /// Empty while collapsed.
    pub items: Vec<NavItemVm>,
}

#[must_use]
pub fn build_nav_tree(catalog: &Catalog, state: &NavState, current_path: &str) -> Vec<NavGroupVm> {
    catalog
        .groups()
        .iter()
        .map(|group| {
            let collapsed = state.is_collapsed(group.name());
            let items = if collapsed {
                Vec::new()
            } else {
                group
                    .items()
                    .iter()
                    .map(|entry| NavItemVm {
                        path: entry.path().to_string(),
                        label: entry.label().to_string(),
                        icon: entry.icon().to_string(),
                        // Exact match; `/` must not light up for every page.
                        active: entry.path() == current_path,
                    })
                    .collect()
            };
            NavGroupVm {
                name: group.name().to_string(),
                collapsed,
                items,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_paths(tree: &[NavGroupVm]) -> Vec<&str> {
        tree.iter()
            .flat_map(|group| &group.items)
            .filter(|item| item.active)
            .map(|item| item.path.as_str())
            .collect()
    }

    #[test]
    fn groups_start_expanded() {
        let state = NavState::default();
        assert!(!state.is_collapsed("Layout"));
        assert!(!state.mobile_open());
    }

    #[test]
    fn toggle_twice_restores_state_and_leaves_others_alone() {
        let mut state = NavState::default();
        state.apply(NavIntent::ToggleGroup("Advanced".into()));
        state.apply(NavIntent::ToggleGroup("Layout".into()));
        assert!(state.is_collapsed("Advanced"));
        assert!(state.is_collapsed("Layout"));

        state.apply(NavIntent::ToggleGroup("Advanced".into()));
        assert!(!state.is_collapsed("Advanced"));
        assert!(state.is_collapsed("Layout"));
    }

    #[test]
    fn select_closes_mobile_overlay_and_navigates() {
        let mut state = NavState::default();
        assert_eq!(state.apply(NavIntent::OpenMobile), NavEffect::None);
        assert!(state.mobile_open());

        let effect = state.apply(NavIntent::Select {
            path: "/grid".into(),
        });
        assert_eq!(effect, NavEffect::Navigate("/grid".into()));
        assert!(!state.mobile_open());

        state.apply(NavIntent::OpenMobile);
        state.apply(NavIntent::CloseMobile);
        assert!(!state.mobile_open());
    }

    #[test]
    fn exactly_one_active_entry_for_a_known_path() {
        let catalog = Catalog::builtin().unwrap();
        let state = NavState::default();

        let tree = build_nav_tree(&catalog, &state, "/flexbox");
        assert_eq!(active_paths(&tree), ["/flexbox"]);

        let tree = build_nav_tree(&catalog, &state, "/");
        assert_eq!(active_paths(&tree), ["/"]);
    }

    #[test]
    fn unknown_path_has_no_active_entry() {
        let catalog = Catalog::builtin().unwrap();
        let tree = build_nav_tree(&catalog, &NavState::default(), "/does-not-exist");
        assert!(active_paths(&tree).is_empty());
    }

    #[test]
    fn collapsed_groups_expose_no_entries_until_reopened() {
        let catalog = Catalog::builtin().unwrap();
        let mut state = NavState::default();
        state.apply(NavIntent::ToggleGroup("Advanced".into()));

        let tree = build_nav_tree(&catalog, &state, "/variables");
        let advanced = tree.iter().find(|g| g.name == "Advanced").unwrap();
        assert!(advanced.collapsed);
        assert!(advanced.items.is_empty());
        assert!(active_paths(&tree).is_empty());

        state.apply(NavIntent::ToggleGroup("Advanced".into()));
        let tree = build_nav_tree(&catalog, &state, "/variables");
        let advanced = tree.iter().find(|g| g.name == "Advanced").unwrap();
        assert_eq!(advanced.items.first().map(|i| i.path.as_str()), Some("/variables"));
        assert_eq!(active_paths(&tree), ["/variables"]);
    }
}
