use dioxus::prelude::*;
use shared_types::Page;

use crate::config::app_config;
use crate::routes::Route;

/// Pages offered as a way out of a dead link.
const SUGGESTED: &[Page] = &[Page::Landing, Page::Courses, Page::Instructor, Page::Contact];

/// Catch-all for URLs with no page. Renders outside the site layout.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));
    let site_name = app_config().site.name.clone();
    tracing::warn!(%path, "no page for path");

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        section { class: "missing-page",
            span { class: "missing-code", "404" }
            h1 { class: "missing-title", "We couldn't find that page" }
            p { class: "missing-path",
                code { "{path}" }
                " isn't part of {site_name}. Try one of these instead:"
            }
            ul { class: "missing-links",
                for page in SUGGESTED.iter().copied() {
                    li { key: "{page.as_str()}",
                        Link { to: Route::from(page), "{page.title()}" }
                    }
                }
            }
        }
    }
}
