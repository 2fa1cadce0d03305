use dioxus::prelude::*;
use dioxus_router::Routable;

use crate::views::{HomeView, Layout, LessonView, NotFoundView};

/// Lessons share one dynamic route keyed by slug; anything deeper falls
/// through to the not-found page.
#[derive(Clone, Debug, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/:slug", LessonView)] Lesson { slug: String },
        #[route("/:..segments", NotFoundView)] NotFound { segments: Vec<String> },
}

/// Map a catalog path back onto a typed route.
#[must_use]
pub fn route_for_path(path: &str) -> Route {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        return Route::Home {};
    }
    if trimmed.contains('/') {
        return Route::NotFound {
            segments: trimmed.split('/').map(str::to_string).collect(),
        };
    }
    Route::Lesson {
        slug: trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use mastery_core::Catalog;

    use super::*;

    #[test]
    fn every_catalog_path_round_trips_through_the_router() {
        let catalog = Catalog::builtin().unwrap();
        for path in catalog.paths() {
            assert_eq!(route_for_path(path).to_string(), path);
        }
    }

    #[test]
    fn nested_paths_are_not_found() {
        assert_eq!(
            route_for_path("/grid/extra"),
            Route::NotFound {
                segments: vec!["grid".into(), "extra".into()]
            }
        );
        assert_eq!(route_for_path(""), Route::Home {});
    }
}
