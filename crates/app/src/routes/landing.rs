use crate::config::app_config;
use crate::navigation::navigate;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBrain, LdTrendingUp, LdVideo};
use dioxus_free_icons::Icon;
use shared_types::Page;
use shared_ui::{Button, ButtonVariant, Card, CardDescription, CardHeader, CardTitle};

/// Public home page.
#[component]
pub fn Landing() -> Element {
    rsx! {
        LandingContent { on_navigate: move |page: Page| navigate(page) }
    }
}

/// Hero, feature highlights and calls to action.
///
/// Also rendered as the student dashboard's overview panel, which is why
/// navigation goes through `on_navigate` instead of the router directly.
#[component]
pub fn LandingContent(on_navigate: EventHandler<Page>) -> Element {
    let site_name = app_config().site.name.clone();
    let tagline = app_config().site.tagline.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./landing.css") }

        section { class: "landing-hero",
            h1 { class: "landing-title", "Welcome to {site_name}" }
            p { class: "landing-subtitle", "{tagline}" }
            div { class: "landing-actions",
                Button {
                    onclick: move |_| on_navigate.call(Page::Courses),
                    "Browse Courses"
                }
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| on_navigate.call(Page::Signup),
                    "Get Started"
                }
            }
        }

        section { class: "landing-features",
            Card { elevated: true,
                CardHeader {
                    span { class: "landing-feature-icon",
                        Icon::<LdBrain> { icon: LdBrain, width: 28, height: 28 }
                    }
                    CardTitle { "AI Powered Learning" }
                    CardDescription { "Lessons adapt to how you learn, so practice lands where you need it most." }
                }
            }
            Card { elevated: true,
                CardHeader {
                    span { class: "landing-feature-icon",
                        Icon::<LdVideo> { icon: LdVideo, width: 28, height: 28 }
                    }
                    CardTitle { "Interactive Video" }
                    CardDescription { "Pause, annotate and answer questions right inside every lecture." }
                }
            }
            Card { elevated: true,
                CardHeader {
                    span { class: "landing-feature-icon",
                        Icon::<LdTrendingUp> { icon: LdTrendingUp, width: 28, height: 28 }
                    }
                    CardTitle { "Progress Tracking" }
                    CardDescription { "See course progress and attendance at a glance from your dashboard." }
                }
            }
        }

        section { class: "landing-cta",
            h2 { "Already enrolled?" }
            p { "Log in to pick up where you left off." }
            Button {
                onclick: move |_| on_navigate.call(Page::Login),
                "Log In"
            }
        }
    }
}
