pub mod contact;
pub mod courses;
pub mod dashboard;
pub mod instructor;
pub mod landing;
pub mod login;
pub mod not_found;
pub mod signup;

use crate::components::{SiteFooter, SiteHeader};
use crate::config::app_config;
use dioxus::prelude::*;
use shared_types::Page;

use contact::Contact;
use courses::Courses;
use dashboard::admin::AdminDashboard;
use dashboard::instructor::InstructorDashboard;
use dashboard::StudentDashboard;
use instructor::Instructor;
use landing::Landing;
use login::Login;
use not_found::NotFound;
use signup::Signup;

/// Application routes. Every [`Page`] maps to exactly one variant.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
    #[route("/")]
    Landing {},
    #[route("/login")]
    Login {},
    #[route("/signup")]
    Signup {},
    #[route("/courses")]
    Courses {},
    #[route("/instructor")]
    Instructor {},
    #[route("/contact")]
    Contact {},
    // ── Dashboards ──
    #[route("/dashboard/student")]
    StudentDashboard {},
    #[route("/dashboard/instructor")]
    InstructorDashboard {},
    #[route("/dashboard/admin")]
    AdminDashboard {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

impl Route {
    /// The page this route shows. `None` for unknown URLs.
    pub fn page(&self) -> Option<Page> {
        match self {
            Route::Landing {} => Some(Page::Landing),
            Route::Login {} => Some(Page::Login),
            Route::Signup {} => Some(Page::Signup),
            Route::Courses {} => Some(Page::Courses),
            Route::Instructor {} => Some(Page::Instructor),
            Route::Contact {} => Some(Page::Contact),
            Route::StudentDashboard {} => Some(Page::StudentDashboard),
            Route::InstructorDashboard {} => Some(Page::InstructorDashboard),
            Route::AdminDashboard {} => Some(Page::AdminDashboard),
            Route::NotFound { .. } => None,
        }
    }
}

impl From<Page> for Route {
    fn from(page: Page) -> Self {
        match page {
            Page::Landing => Route::Landing {},
            Page::Login => Route::Login {},
            Page::Signup => Route::Signup {},
            Page::Courses => Route::Courses {},
            Page::Instructor => Route::Instructor {},
            Page::Contact => Route::Contact {},
            Page::StudentDashboard => Route::StudentDashboard {},
            Page::InstructorDashboard => Route::InstructorDashboard {},
            Page::AdminDashboard => Route::AdminDashboard {},
        }
    }
}

/// What the root layout draws around a route's page.
#[derive(Debug, Clone, PartialEq)]
struct ShellParts {
    title: String,
    /// Page to highlight in the site header; `None` hides the header.
    header: Option<Page>,
    footer: bool,
}

impl ShellParts {
    fn for_route(route: &Route, site_name: &str) -> Self {
        let page = route.page().unwrap_or_default();
        let chrome = page.shows_layout();
        Self {
            title: format!("{} · {site_name}", page.title()),
            header: chrome.then_some(page),
            footer: chrome,
        }
    }
}

/// Root layout. Wraps content pages in the site header and footer and
/// leaves full-screen pages bare.
#[component]
fn Shell() -> Element {
    let route: Route = use_route();
    let parts = ShellParts::for_route(&route, &app_config().site.name);

    rsx! {
        document::Title { "{parts.title}" }

        div { class: "site-shell",
            if let Some(current) = parts.header {
                SiteHeader { current }
            }
            main { class: "site-main",
                Outlet::<Route> {}
            }
            if parts.footer {
                SiteFooter {}
            }
        }
    }
}
