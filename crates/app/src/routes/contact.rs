use crate::notify;
use dioxus::prelude::*;
use shared_ui::{
    use_toast, Button, Card, CardContent, CardDescription, CardHeader, CardTitle, Form, FormRow,
    Input, Textarea,
};

/// Public contact page.
#[component]
pub fn Contact() -> Element {
    rsx! {
        div { class: "contact-page",
            ContactForm {}
        }
    }
}

/// Contact / complaint form. Every field is required; submitting always
/// reports success. The dashboard prefills name and email from the stored user.
#[component]
pub fn ContactForm(
    #[props(default)] initial_name: String,
    #[props(default)] initial_email: String,
) -> Element {
    let toast = use_toast();

    let handle_submit = move |_: FormEvent| {
        tracing::info!("contact form submitted");
        notify::success(toast, notify::CONTACT_SENT);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./contact.css") }

        Card { class: "contact-card",
            CardHeader {
                CardTitle { "Contact / Complaint" }
                CardDescription { "We're here to help. Please fill out the form below." }
            }
            CardContent {
                Form { onsubmit: handle_submit,
                    FormRow {
                        Input {
                            label: "Your Name",
                            name: "name",
                            placeholder: "Enter your name",
                            initial_value: initial_name,
                            required: true,
                        }
                        Input {
                            label: "Your Email",
                            name: "email",
                            input_type: "email",
                            placeholder: "Enter your email",
                            initial_value: initial_email,
                            required: true,
                        }
                    }
                    Input {
                        label: "Subject",
                        name: "subject",
                        placeholder: "What is this regarding?",
                        required: true,
                    }
                    Textarea {
                        label: "Message",
                        name: "message",
                        placeholder: "Please describe your issue or question...",
                        rows: 5,
                        required: true,
                    }
                    Button { button_type: "submit", "Send Message" }
                }
            }
        }
    }
}
