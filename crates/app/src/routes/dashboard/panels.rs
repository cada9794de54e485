use dioxus::prelude::*;
use shared_types::Course;
use shared_ui::{
    use_toast, Avatar, Button, ButtonVariant, Card, CardContent, CardDescription, CardFooter,
    CardHeader, CardTitle, PageHeader, ProgressBar, ProgressTone,
};

use crate::notify;

/// "My Courses": progress and attendance per enrolled course.
#[component]
pub(super) fn CoursesPanel(courses: Vec<Course>) -> Element {
    let toast = use_toast();

    rsx! {
        div { class: "dashboard-panel",
            PageHeader {
                title: "My Courses",
                description: "Track your progress and attendance.",
            }
            div { class: "dashboard-grid",
                for course in courses {
                    Card { key: "{course.id}", elevated: true,
                        CardHeader {
                            CardTitle { "{course.name}" }
                            CardDescription { "Instructor: {course.teacher}" }
                        }
                        CardContent {
                            ProgressBar {
                                value: course.progress,
                                tone: ProgressTone::Teal,
                                label: "Progress",
                            }
                            ProgressBar {
                                value: course.attendance,
                                tone: ProgressTone::Blue,
                                label: "Attendance",
                            }
                        }
                        CardFooter {
                            Button {
                                onclick: {
                                    let name = course.name.clone();
                                    move |_| notify::placeholder(toast, &format!("View Details for {name}"))
                                },
                                "View Details"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// "Instructors": the teacher of each enrolled course.
#[component]
pub(super) fn InstructorsPanel(courses: Vec<Course>) -> Element {
    let toast = use_toast();

    rsx! {
        div { class: "dashboard-panel",
            PageHeader {
                title: "My Instructors",
                description: "Reach out to the people teaching your courses.",
            }
            div { class: "dashboard-grid",
                for course in courses {
                    Card { key: "{course.id}",
                        CardContent {
                            div { class: "dashboard-instructor",
                                Avatar {}
                                div { class: "dashboard-instructor-info",
                                    h3 { class: "dashboard-instructor-name", "{course.teacher}" }
                                    p { class: "dashboard-instructor-course", "{course.name}" }
                                    ProgressBar {
                                        value: course.progress,
                                        tone: ProgressTone::Green,
                                        label: "Course progress",
                                        inline_value: true,
                                    }
                                    Button {
                                        variant: ButtonVariant::Secondary,
                                        onclick: {
                                            let teacher = course.teacher.clone();
                                            move |_| notify::success(toast, format!("Message request sent to {teacher}"))
                                        },
                                        "Contact Instructor"
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
