use crate::navigation::navigate;
use crate::notify;
use crate::session::use_session;
use crate::storage::BrowserStore;
use dioxus::prelude::*;
use shared_types::{KeyValueStore, Page, User, UserRole, ALL_ROLES, USER_STORAGE_KEY};
use shared_ui::{
    use_toast, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle,
    Form, FormSelect, Input,
};

/// Demo sign-in. Whatever is entered becomes the stored user; there is no
/// credential check.
#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let toast = use_toast();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut role = use_signal(UserRole::default);

    let handle_login = move |_: FormEvent| {
        let user = User::new(name().trim(), email().trim(), role());
        let mut store = BrowserStore;
        if let Err(e) = user
            .to_storage()
            .and_then(|raw| store.set(USER_STORAGE_KEY, &raw))
        {
            tracing::warn!(error = %e, "could not persist signed-in user");
        }

        let destination = role().dashboard();
        tracing::info!(role = role().as_str(), "signed in");
        notify::success(toast, format!("Welcome, {}!", user.name_or("learner")));
        session.set_user(user);
        navigate(destination);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            Card {
                class: "auth-card",

                CardHeader {
                    CardTitle { "Log In" }
                    CardDescription { "Enter your details to open your dashboard" }
                }

                CardContent {
                    Form { onsubmit: handle_login,
                        Input {
                            label: "Full Name",
                            name: "name",
                            placeholder: "Enter your name",
                            required: true,
                            on_input: move |e: FormEvent| name.set(e.value()),
                        }
                        Input {
                            label: "Email",
                            name: "email",
                            input_type: "email",
                            placeholder: "you@example.com",
                            required: true,
                            on_input: move |e: FormEvent| email.set(e.value()),
                        }
                        Input {
                            label: "Password",
                            name: "password",
                            input_type: "password",
                            placeholder: "••••••••",
                            required: true,
                        }
                        FormSelect {
                            label: "I am a",
                            name: "role",
                            value: role().as_str().to_string(),
                            onchange: move |e: Event<FormData>| {
                                role.set(UserRole::from_str_or_default(&e.value()))
                            },
                            for r in ALL_ROLES.iter().copied() {
                                option { key: "{r.as_str()}", value: r.as_str(), "{r.display_name()}" }
                            }
                        }
                        Button { button_type: "submit", "Log In" }
                    }
                }

                div { class: "auth-footer",
                    span { "New here?" }
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| navigate(Page::Signup),
                        "Create an account"
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| navigate(Page::Landing),
                        "Back to home"
                    }
                }
            }
        }
    }
}
