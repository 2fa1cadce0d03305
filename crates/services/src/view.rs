use serde::Serialize;

use mastery_core::content::LessonContent;
use mastery_core::model::LessonEntry;

/// Header trail shown above every page: the app name, then the current
/// lesson when the path matches one.
///
/// Presentation-agnostic: the UI decides how to join and style the parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
    pub app_name: String,
    pub current: Option<LessonEntry>,
}

/// Everything a lesson page needs, resolved from one path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonPage {
    pub entry: LessonEntry,
    pub content: &'static LessonContent,
    pub group: String,
    pub previous: Option<LessonEntry>,
    pub next: Option<LessonEntry>,
}
