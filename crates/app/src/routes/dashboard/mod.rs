pub mod admin;
pub mod instructor;
mod panels;
mod profile;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdLogOut, LdMenu, LdUser, LdX};
use dioxus_free_icons::Icon;
use shared_types::{
    sign_out, DashboardState, KeyValueStore, Page, Panel, SubPage, User, UserRole, ALL_SUB_PAGES,
    USER_STORAGE_KEY,
};
use shared_ui::{use_toast, Avatar, AvatarSize, Button, ButtonVariant, Card, CardContent};

use crate::config::app_config;
use crate::navigation::navigate;
use crate::notify;
use crate::routes::contact::ContactForm;
use crate::routes::landing::LandingContent;
use crate::session::{use_session, SessionState};
use crate::storage::BrowserStore;

use panels::{CoursesPanel, InstructorsPanel};
use profile::ProfileManagement;

/// Student dashboard route. Leaving the dashboard for the login page also
/// ends the router-level session.
#[component]
pub fn StudentDashboard() -> Element {
    let mut session = use_session();

    rsx! {
        StudentDashboardView {
            on_navigate: move |page: Page| leave_dashboard(&mut session, page),
        }
    }
}

/// Every exit from a dashboard goes through here. Landing on the login page
/// ends the router-level session.
fn leave_dashboard(session: &mut SessionState, target: Page) {
    if target == Page::Login {
        session.clear();
    }
    navigate(target);
}

/// Staff logout: the storage step [`DashboardState::logout`] uses, then
/// [`leave_dashboard`].
fn staff_logout(session: &mut SessionState, role: UserRole) {
    let target = sign_out(&mut BrowserStore);
    tracing::info!(role = role.as_str(), "staff logged out");
    leave_dashboard(session, target);
}

/// The dashboard itself. Owns its state; the only way out is `on_navigate`.
#[component]
pub fn StudentDashboardView(on_navigate: EventHandler<Page>) -> Element {
    let toast = use_toast();
    let mut state = use_signal(|| {
        let (state, error) = DashboardState::load(&BrowserStore);
        if let Some(e) = error {
            tracing::warn!(error = %e, "ignoring stored user");
        }
        state
    });

    let mut select = move |sub_page: SubPage| {
        tracing::debug!(panel = sub_page.as_str(), "dashboard panel");
        state.write().set_sub_page(sub_page);
    };

    let mut logout = move || {
        let target = state.write().logout(&mut BrowserStore);
        tracing::info!("student logged out");
        on_navigate.call(target);
    };

    // Landing CTAs that have a dashboard panel stay inside the dashboard.
    let landing_navigate = move |page: Page| match page {
        Page::Courses => select(SubPage::Courses),
        Page::Instructor => select(SubPage::Instructor),
        Page::Contact => select(SubPage::Contact),
        other => on_navigate.call(other),
    };

    let site_name = app_config().site.name.clone();
    let snapshot = state.read().clone();
    let greeting = snapshot.greeting();
    let profile_label = snapshot.profile_label().to_string();
    let (user_name, user_email) = snapshot
        .user
        .as_ref()
        .map(|u| (u.name.clone(), u.email.clone()))
        .unwrap_or_default();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard",
            header { class: "dashboard-header",
                div { class: "dashboard-header-inner",
                    div { class: "dashboard-identity",
                        Avatar { size: AvatarSize::Large, solid: true }
                        div {
                            h1 { class: "dashboard-title", "Student Dashboard" }
                            p { class: "dashboard-greeting", "{greeting}" }
                        }
                    }

                    nav { class: "dashboard-nav",
                        for sub_page in ALL_SUB_PAGES.iter().copied() {
                            Button {
                                key: "{sub_page.as_str()}",
                                variant: ButtonVariant::Nav,
                                active: snapshot.sub_page == sub_page && !snapshot.show_profile_menu,
                                onclick: move |_| select(sub_page),
                                "{sub_page.nav_label()}"
                            }
                        }
                    }

                    div { class: "dashboard-profile",
                        button {
                            class: "dashboard-profile-button",
                            onclick: move |_| state.write().toggle_profile_menu(),
                            Icon::<LdUser> { icon: LdUser, width: 20, height: 20 }
                            span { "{profile_label}" }
                        }

                        if snapshot.show_profile_menu {
                            div { class: "dashboard-dropdown",
                                div { class: "dashboard-dropdown-user",
                                    p { class: "dashboard-dropdown-name", "{user_name}" }
                                    p { class: "dashboard-dropdown-email", "{user_email}" }
                                }
                                button {
                                    class: "dashboard-dropdown-item",
                                    onclick: move |_| {
                                        notify::placeholder(toast, "My Profile");
                                        state.write().close_profile_menu();
                                    },
                                    "My Profile"
                                }
                                button {
                                    class: "dashboard-dropdown-item",
                                    onclick: move |_| {
                                        notify::placeholder(toast, "Settings");
                                        state.write().close_profile_menu();
                                    },
                                    "Settings"
                                }
                                button {
                                    class: "dashboard-dropdown-item",
                                    "data-danger": "true",
                                    onclick: move |_| logout(),
                                    "Logout"
                                }
                            }
                        }

                        button {
                            class: "dashboard-menu-toggle",
                            aria_label: "Toggle dashboard menu",
                            onclick: move |_| state.write().toggle_mobile_menu(),
                            if snapshot.show_mobile_menu {
                                Icon::<LdX> { icon: LdX, width: 24, height: 24 }
                            } else {
                                Icon::<LdMenu> { icon: LdMenu, width: 24, height: 24 }
                            }
                        }
                    }
                }

                if snapshot.show_mobile_menu {
                    nav { class: "dashboard-mobile-nav",
                        for sub_page in ALL_SUB_PAGES.iter().copied() {
                            Button {
                                key: "{sub_page.as_str()}",
                                variant: ButtonVariant::Nav,
                                active: snapshot.sub_page == sub_page,
                                onclick: move |_| state.write().choose_from_mobile_menu(sub_page),
                                "{sub_page.nav_label()}"
                            }
                        }
                    }
                }
            }

            main { class: "dashboard-main",
                match snapshot.visible_panel() {
                    Panel::Profile => rsx! {
                        ProfileManagement {
                            state,
                            on_close: move |_| state.write().close_profile_menu(),
                        }
                    },
                    Panel::Content(SubPage::Landing) => rsx! {
                        LandingContent { on_navigate: landing_navigate }
                    },
                    Panel::Content(SubPage::Courses) => rsx! {
                        CoursesPanel { courses: snapshot.courses.clone() }
                    },
                    Panel::Content(SubPage::Instructor) => rsx! {
                        InstructorsPanel { courses: snapshot.courses.clone() }
                    },
                    Panel::Content(SubPage::Contact) => rsx! {
                        div { class: "dashboard-panel",
                            ContactForm {
                                initial_name: user_name.clone(),
                                initial_email: user_email.clone(),
                            }
                        }
                    },
                }

                if snapshot.shows_logout_button() {
                    div { class: "dashboard-logout",
                        Button {
                            variant: ButtonVariant::Danger,
                            onclick: move |_| logout(),
                            Icon::<LdLogOut> { icon: LdLogOut, width: 18, height: 18 }
                            "Logout"
                        }
                    }
                }
            }

            footer { class: "dashboard-footer",
                p { "© {site_name}. Keep learning." }
            }
        }
    }
}

/// One figure on a staff dashboard.
#[derive(Debug, Clone, PartialEq)]
struct SummaryCard {
    label: &'static str,
    value: String,
}

/// Shared frame for the instructor and admin dashboards: header with
/// welcome line, a row of summary cards, and logout.
#[component]
fn StaffDashboard(title: String, role: UserRole, cards: Vec<SummaryCard>) -> Element {
    let mut session = use_session();
    let name = use_hook(|| stored_user_name(&BrowserStore, role));

    let logout = move |_: MouseEvent| staff_logout(&mut session, role);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard",
            header { class: "dashboard-header",
                div { class: "dashboard-header-inner",
                    div { class: "dashboard-identity",
                        Avatar { size: AvatarSize::Large, solid: true }
                        div {
                            h1 { class: "dashboard-title", "{title}" }
                            p { class: "dashboard-greeting", "Welcome back, {name}!" }
                        }
                    }
                    Button {
                        variant: ButtonVariant::Danger,
                        onclick: logout,
                        Icon::<LdLogOut> { icon: LdLogOut, width: 18, height: 18 }
                        "Logout"
                    }
                }
            }

            main { class: "dashboard-main",
                div { class: "dashboard-grid",
                    for card in cards {
                        Card { key: "{card.label}",
                            CardContent {
                                p { class: "summary-label", "{card.label}" }
                                p { class: "summary-value", "{card.value}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Name of the stored user, or the role's display name when nothing usable is stored.
fn stored_user_name(store: &impl KeyValueStore, role: UserRole) -> String {
    store
        .get(USER_STORAGE_KEY)
        .and_then(|raw| match User::from_storage(&raw) {
            Ok(user) => Some(user.name_or(role.display_name()).to_string()),
            Err(e) => {
                tracing::warn!(error = %e, "ignoring stored user");
                None
            }
        })
        .unwrap_or_else(|| role.display_name().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::MemoryStore;

    #[test]
    fn staff_name_comes_from_storage() {
        let store = MemoryStore::with_entry(
            USER_STORAGE_KEY,
            r#"{"name":"Dr. Fariha","email":"f@learnhub.example","role":"instructor"}"#,
        );
        assert_eq!(stored_user_name(&store, UserRole::Instructor), "Dr. Fariha");
    }

    #[test]
    fn staff_name_falls_back_to_role() {
        let empty = MemoryStore::new();
        assert_eq!(stored_user_name(&empty, UserRole::Admin), "Administrator");

        let broken = MemoryStore::with_entry(USER_STORAGE_KEY, "{not json");
        assert_eq!(stored_user_name(&broken, UserRole::Instructor), "Instructor");
    }

    #[test]
    fn staff_sign_out_clears_browser_store() {
        let mut store = BrowserStore;
        store
            .set(USER_STORAGE_KEY, r#"{"name":"Mr. Ali","role":"instructor"}"#)
            .unwrap();
        assert_eq!(stored_user_name(&store, UserRole::Instructor), "Mr. Ali");

        assert_eq!(sign_out(&mut store), Page::Login);
        assert_eq!(store.get(USER_STORAGE_KEY), None);
        assert_eq!(stored_user_name(&store, UserRole::Instructor), "Instructor");
    }
}
