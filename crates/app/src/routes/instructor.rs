use crate::navigation::navigate;
use dioxus::prelude::*;
use shared_types::{mock_courses, Page};
use shared_ui::{Avatar, Button, ButtonVariant, Card, CardContent, PageHeader};

/// Public list of instructors, one per catalog course.
#[component]
pub fn Instructor() -> Element {
    let courses = mock_courses();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./catalog.css") }

        div { class: "catalog-page",
            PageHeader {
                title: "Our Instructors",
                description: "Meet the people behind every course.",
            }
            div { class: "catalog-grid",
                for course in courses {
                    Card { key: "{course.id}",
                        CardContent {
                            div { class: "instructor-row",
                                Avatar {}
                                div { class: "instructor-info",
                                    h3 { class: "instructor-name", "{course.teacher}" }
                                    p { class: "instructor-course", "{course.name}" }
                                    Button {
                                        variant: ButtonVariant::Secondary,
                                        onclick: move |_| navigate(Page::Contact),
                                        "Get in Touch"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
