use crate::navigation::navigate;
use crate::notify;
use dioxus::prelude::*;
use shared_types::Page;
use shared_ui::{
    use_toast, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle,
    Form, Input,
};

/// Sign-up form. Nothing is created; submitting always succeeds and moves on
/// to the login page.
#[component]
pub fn Signup() -> Element {
    let toast = use_toast();

    let handle_signup = move |_: FormEvent| {
        tracing::info!("sign-up submitted");
        notify::success(toast, "Account created! Please log in to continue.");
        navigate(Page::Login);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            Card {
                class: "auth-card",

                CardHeader {
                    CardTitle { "Create Account" }
                    CardDescription { "Join to track your courses, progress and attendance" }
                }

                CardContent {
                    Form { onsubmit: handle_signup,
                        Input {
                            label: "Full Name",
                            name: "name",
                            placeholder: "Enter your name",
                            required: true,
                        }
                        Input {
                            label: "Email",
                            name: "email",
                            input_type: "email",
                            placeholder: "you@example.com",
                            required: true,
                        }
                        Input {
                            label: "Password",
                            name: "password",
                            input_type: "password",
                            placeholder: "At least 8 characters",
                            required: true,
                        }
                        Button { button_type: "submit", "Sign Up" }
                    }
                }

                div { class: "auth-footer",
                    span { "Already have an account?" }
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| navigate(Page::Login),
                        "Log in"
                    }
                }
            }
        }
    }
}
