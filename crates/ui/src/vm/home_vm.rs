use std::collections::HashSet;

use mastery_core::model::LessonEntry;
use services::TutorialService;

const JUMP_TARGET: &str = "/flexbox";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkVm {
    pub path: String,
    pub label: String,
    pub icon: String,
}

impl From<&LessonEntry> for LinkVm {
    fn from(entry: &LessonEntry) -> Self {
        Self {
            path: entry.path().to_string(),
            label: entry.label().to_string(),
            icon: entry.icon().to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatVm {
    pub value: String,
    pub label: &'static str,
}

pub type CurriculumCardVm = LinkVm;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurriculumGroupVm {
    pub name: String,
    pub cards: Vec<CurriculumCardVm>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureVm {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

const FEATURES: [FeatureVm; 4] = [
    FeatureVm {
        icon: "💻",
        title: "Live Demos",
        description: "Key concepts come with a preview you can restyle with a click.",
    },
    FeatureVm {
        icon: "📋",
        title: "Code Examples",
        description: "Ready-to-use code for each CSS technique, line by line.",
    },
    FeatureVm {
        icon: "💡",
        title: "Best Practices",
        description: "Professional tips and patterns used in real-world production code.",
    },
    FeatureVm {
        icon: "📈",
        title: "Logical Progression",
        description: "Topics build on each other from basics to advanced techniques.",
    },
];

/// Welcome page data: calls to action, headline numbers and the curriculum.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HomeVm {
    pub start: Option<LinkVm>,
    pub jump: Option<LinkVm>,
    pub stats: Vec<StatVm>,
    pub groups: Vec<CurriculumGroupVm>,
    pub features: Vec<FeatureVm>,
}

impl HomeVm {
    #[must_use]
    pub fn from_service(tutorial: &TutorialService) -> Self {
        let catalog = tutorial.catalog();
        let levels: HashSet<_> = tutorial
            .lessons()
            .iter()
            .map(|lesson| lesson.difficulty)
            .collect();
        let sections = tutorial.section_count();

        let stats = vec![
            StatVm {
                value: catalog.len().to_string(),
                label: "Lessons",
            },
            StatVm {
                value: format!("{}+", sections / 10 * 10),
                label: "Examples",
            },
            StatVm {
                value: levels.len().to_string(),
                label: "Skill Levels",
            },
            StatVm {
                value: tutorial.demo_count().to_string(),
                label: "Live Demos",
            },
        ];

        let groups = catalog
            .groups()
            .iter()
            .map(|group| CurriculumGroupVm {
                name: group.name().to_string(),
                cards: group.items().iter().map(LinkVm::from).collect(),
            })
            .collect();

        Self {
            start: tutorial.start_entry().map(LinkVm::from),
            jump: catalog.find(JUMP_TARGET).map(LinkVm::from),
            stats,
            groups,
            features: FEATURES.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_links_point_into_the_curriculum() {
        let service = TutorialService::builtin("Test").unwrap();
        let vm = HomeVm::from_service(&service);

        assert_eq!(vm.start.as_ref().map(|l| l.path.as_str()), Some("/selectors"));
        assert_eq!(vm.jump.as_ref().map(|l| l.label.as_str()), Some("Flexbox"));
        assert_eq!(vm.groups.len(), 4);
        assert_eq!(vm.groups.iter().map(|g| g.cards.len()).sum::<usize>(), 18);
        assert_eq!(vm.features.len(), 4);
    }

    #[test]
    fn stats_are_derived_from_the_library() {
        let service = TutorialService::builtin("Test").unwrap();
        let vm = HomeVm::from_service(&service);

        let value = |label: &str| {
            vm.stats
                .iter()
                .find(|s| s.label == label)
                .map(|s| s.value.clone())
                .unwrap()
        };
        assert_eq!(value("Lessons"), "18");
        assert_eq!(value("Examples"), "60+");
        assert_eq!(value("Skill Levels"), "3");
        assert_eq!(value("Live Demos"), service.demo_count().to_string());
    }
}
