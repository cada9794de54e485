use dioxus::prelude::*;
use shared_types::DashboardState;
use shared_ui::{
    use_toast, Avatar, AvatarSize, Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent,
    CardHeader, CardTitle, ProgressBar,
};

use crate::notify;

const ACCOUNT_ACTIONS: &[&str] = &[
    "Edit Profile",
    "Change Password",
    "Notification Settings",
    "Privacy Settings",
];

/// Profile management overlay. Replaces the main panel while open.
#[component]
pub(super) fn ProfileManagement(
    state: Signal<DashboardState>,
    on_close: EventHandler<()>,
) -> Element {
    let toast = use_toast();
    let snapshot = state.read();
    let (name, email, role) = match snapshot.user.as_ref() {
        Some(u) => (
            u.name_or("Student").to_string(),
            u.email.clone(),
            u.role_label().to_string(),
        ),
        None => ("Student".to_string(), String::new(), "Student".to_string()),
    };
    let enrolled = snapshot.enrollment_summary().to_vec();
    drop(snapshot);

    rsx! {
        div { class: "dashboard-panel profile-overlay",
            div { class: "profile-overlay-header",
                h2 { class: "profile-overlay-title", "Profile Management" }
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| on_close.call(()),
                    "Close"
                }
            }

            div { class: "profile-overlay-grid",
                Card {
                    CardContent {
                        div { class: "profile-summary",
                            Avatar { size: AvatarSize::Large }
                            h3 { class: "profile-name", "{name}" }
                            if !email.is_empty() {
                                p { class: "profile-email", "{email}" }
                            }
                            Badge { variant: BadgeVariant::Primary, "{role}" }
                        }
                    }
                }

                Card {
                    CardHeader {
                        CardTitle { "Account Settings" }
                    }
                    CardContent {
                        div { class: "profile-actions",
                            for action in ACCOUNT_ACTIONS.iter().copied() {
                                Button {
                                    key: "{action}",
                                    variant: ButtonVariant::Secondary,
                                    onclick: move |_| {
                                        notify::placeholder(toast, action);
                                        on_close.call(());
                                    },
                                    "{action}"
                                }
                            }
                        }
                    }
                }

                Card {
                    CardHeader {
                        CardTitle { "Enrollment Details" }
                    }
                    CardContent {
                        for course in enrolled {
                            div { key: "{course.id}", class: "profile-enrollment",
                                p { class: "profile-enrollment-name", "{course.name}" }
                                ProgressBar { value: course.progress, label: "Progress" }
                            }
                        }
                    }
                }
            }
        }
    }
}
