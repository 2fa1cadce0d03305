use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;

#[component]
pub fn NotFoundView(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    rsx! { NotFoundBody { path } }
}

/// Fallback for any path the catalog does not know.
#[component]
pub fn NotFoundBody(path: String) -> Element {
    rsx! {
        div { class: "page not-found",
            h2 { "Page not found" }
            p { "There is no lesson at " code { "{path}" } "." }
            Link { class: "btn btn-primary", to: Route::Home {}, "Back to the welcome page" }
        }
    }
}
