use crate::config::app_config;
use crate::navigation::navigate;
use crate::session::use_session;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdGraduationCap, LdMenu, LdX};
use dioxus_free_icons::Icon;
use shared_types::Page;
use shared_ui::{Button, ButtonVariant};

/// Entries in the public navigation bar.
const NAV_PAGES: &[Page] = &[Page::Landing, Page::Courses, Page::Instructor, Page::Contact];

/// Public site header: brand, navigation, and sign-in actions.
#[component]
pub fn SiteHeader(current: Page) -> Element {
    let session = use_session();
    let mut show_menu = use_signal(|| false);
    let site_name = app_config().site.name.clone();

    // Signed-in visitors get a shortcut to their dashboard instead of the auth buttons.
    let dashboard = session
        .current_user
        .read()
        .as_ref()
        .map(|u| u.user_role().dashboard());

    let mut go = move |page: Page| {
        show_menu.set(false);
        navigate(page);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./site_header.css") }

        header { class: "site-header",
            div { class: "site-header-inner",
                button {
                    class: "site-brand",
                    onclick: move |_| go(Page::Landing),
                    span { class: "site-brand-mark",
                        Icon::<LdGraduationCap> { icon: LdGraduationCap, width: 24, height: 24 }
                    }
                    span { class: "site-brand-name", "{site_name}" }
                }

                nav { class: "site-nav",
                    for page in NAV_PAGES.iter().copied() {
                        Button {
                            key: "{page.as_str()}",
                            variant: ButtonVariant::Nav,
                            active: page == current,
                            onclick: move |_| go(page),
                            "{page.title()}"
                        }
                    }
                }

                div { class: "site-actions",
                    if let Some(target) = dashboard {
                        Button {
                            onclick: move |_| go(target),
                            "My Dashboard"
                        }
                    } else {
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: move |_| go(Page::Login),
                            "Log In"
                        }
                        Button {
                            onclick: move |_| go(Page::Signup),
                            "Sign Up"
                        }
                    }
                    button {
                        class: "site-menu-toggle",
                        aria_label: "Toggle navigation",
                        onclick: move |_| show_menu.set(!show_menu()),
                        if show_menu() {
                            Icon::<LdX> { icon: LdX, width: 24, height: 24 }
                        } else {
                            Icon::<LdMenu> { icon: LdMenu, width: 24, height: 24 }
                        }
                    }
                }
            }

            if show_menu() {
                nav { class: "site-mobile-nav",
                    for page in NAV_PAGES.iter().copied() {
                        Button {
                            key: "{page.as_str()}",
                            variant: ButtonVariant::Nav,
                            active: page == current,
                            onclick: move |_| go(page),
                            "{page.title()}"
                        }
                    }
                }
            }
        }
    }
}
