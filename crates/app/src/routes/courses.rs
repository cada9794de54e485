use crate::notify;
use dioxus::prelude::*;
use shared_types::mock_courses;
use shared_ui::{
    use_toast, Badge, BadgeVariant, Button, Card, CardContent, CardDescription, CardFooter,
    CardHeader, CardTitle, PageHeader,
};

/// Public course catalog.
#[component]
pub fn Courses() -> Element {
    let toast = use_toast();
    let courses = mock_courses();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./catalog.css") }

        div { class: "catalog-page",
            PageHeader {
                title: "Explore Courses",
                description: "Hands-on programs taught by instructors who follow your progress.",
            }
            div { class: "catalog-grid",
                for course in courses {
                    Card { key: "{course.id}", elevated: true,
                        CardHeader {
                            CardTitle { "{course.name}" }
                            CardDescription { "Taught by {course.teacher}" }
                        }
                        CardContent {
                            Badge { variant: BadgeVariant::Muted, "Open for enrollment" }
                        }
                        CardFooter {
                            Button {
                                onclick: {
                                    let name = course.name.clone();
                                    move |_| notify::success(toast, format!("Enrollment request sent for {name}"))
                                },
                                "Enroll Now"
                            }
                        }
                    }
                }
            }
        }
    }
}
