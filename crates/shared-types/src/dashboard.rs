use crate::course::{mock_courses, Course};
use crate::error::AppError;
use crate::page::{Page, SubPage};
use crate::storage::KeyValueStore;
use crate::user::{User, USER_STORAGE_KEY};

/// Number of courses listed under "Enrollment Details" in the profile overlay.
pub const ENROLLMENT_SUMMARY_LEN: usize = 2;

/// What occupies the dashboard's main area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Profile,
    Content(SubPage),
}

/// State owned by the student dashboard.
///
/// Lives entirely inside the dashboard. The router never reads it; the only
/// thing handed back out is the [`Page`] returned by [`DashboardState::logout`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardState {
    pub user: Option<User>,
    pub sub_page: SubPage,
    pub courses: Vec<Course>,
    pub show_profile_menu: bool,
    pub show_mobile_menu: bool,
}

impl DashboardState {
    /// Read the stored user and build the mount-time state.
    ///
    /// Returns the decode error alongside the state so the caller can log it.
    /// The state itself always comes back with no user in that case.
    pub fn load(store: &impl KeyValueStore) -> (Self, Option<AppError>) {
        let raw = store.get(USER_STORAGE_KEY);
        let decoded = raw.as_deref().map(decode_user);
        let error = decoded.as_ref().and_then(|r| r.as_ref().err().cloned());
        let state = Self {
            user: decoded.and_then(Result::ok),
            courses: mock_courses(),
            ..Self::default()
        };
        (state, error)
    }

    pub fn set_sub_page(&mut self, sub_page: SubPage) {
        self.sub_page = sub_page;
    }

    /// Switch panels by key. Unknown keys show the overview.
    pub fn set_sub_page_key(&mut self, key: &str) {
        self.set_sub_page(SubPage::from_key(key));
    }

    /// Pick a panel from the mobile menu, which then closes.
    pub fn choose_from_mobile_menu(&mut self, sub_page: SubPage) {
        self.set_sub_page(sub_page);
        self.show_mobile_menu = false;
    }

    pub fn toggle_profile_menu(&mut self) {
        self.show_profile_menu = !self.show_profile_menu;
    }

    pub fn close_profile_menu(&mut self) {
        self.show_profile_menu = false;
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.show_mobile_menu = !self.show_mobile_menu;
    }

    /// The single panel currently visible in the main area.
    pub fn visible_panel(&self) -> Panel {
        if self.show_profile_menu {
            Panel::Profile
        } else {
            Panel::Content(self.sub_page)
        }
    }

    /// The standalone logout button only appears for a known user with the overlay closed.
    pub fn shows_logout_button(&self) -> bool {
        self.user.is_some() && !self.show_profile_menu
    }

    /// Clear the stored and local user, close the menu, and name the page to go to.
    pub fn logout(&mut self, store: &mut impl KeyValueStore) -> Page {
        self.user = None;
        self.show_profile_menu = false;
        sign_out(store)
    }

    /// Header greeting, e.g. "Welcome back, Sara Ahmed!".
    pub fn greeting(&self) -> String {
        let name = self
            .user
            .as_ref()
            .map(|u| u.name_or("Student"))
            .unwrap_or("Student");
        format!("Welcome back, {name}!")
    }

    /// Text on the profile button.
    pub fn profile_label(&self) -> &str {
        self.user
            .as_ref()
            .and_then(User::first_name)
            .unwrap_or("Profile")
    }

    /// Courses shown in the profile overlay.
    pub fn enrollment_summary(&self) -> &[Course] {
        let len = self.courses.len().min(ENROLLMENT_SUMMARY_LEN);
        &self.courses[..len]
    }
}

fn decode_user(raw: &str) -> Result<User, AppError> {
    User::from_storage(raw)
}

/// Forget the stored user and name the page every logout lands on.
///
/// Shared by the student dashboard and the staff dashboards.
pub fn sign_out(store: &mut impl KeyValueStore) -> Page {
    store.remove(USER_STORAGE_KEY);
    Page::Login
}
