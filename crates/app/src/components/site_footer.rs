use crate::config::app_config;
use crate::navigation::navigate;
use dioxus::prelude::*;
use shared_types::Page;

const FOOTER_LINKS: &[Page] = &[Page::Courses, Page::Instructor, Page::Contact, Page::Signup];

#[component]
pub fn SiteFooter() -> Element {
    let site = &app_config().site;
    let name = site.name.clone();
    let tagline = site.tagline.clone();
    let email = site.support_email.clone();
    let mailto = format!("mailto:{email}");

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./site_footer.css") }

        footer { class: "site-footer",
            div { class: "site-footer-inner",
                div { class: "site-footer-brand",
                    p { class: "site-footer-name", "{name}" }
                    p { class: "site-footer-tagline", "{tagline}" }
                }
                div { class: "site-footer-links",
                    p { class: "site-footer-heading", "Quick Links" }
                    for page in FOOTER_LINKS.iter().copied() {
                        button {
                            key: "{page.as_str()}",
                            class: "site-footer-link",
                            onclick: move |_| navigate(page),
                            "{page.title()}"
                        }
                    }
                }
                div { class: "site-footer-contact",
                    p { class: "site-footer-heading", "Support" }
                    a { href: "{mailto}", "{email}" }
                }
            }
            p { class: "site-footer-copy", "© {name}. All rights reserved." }
        }
    }
}
