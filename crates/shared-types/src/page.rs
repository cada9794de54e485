use serde::{Deserialize, Serialize};

/// Top-level view shown by the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Page {
    #[default]
    Landing,
    Login,
    Signup,
    Courses,
    Instructor,
    Contact,
    StudentDashboard,
    InstructorDashboard,
    AdminDashboard,
}

/// All pages in navigation order.
pub const ALL_PAGES: &[Page] = &[
    Page::Landing,
    Page::Login,
    Page::Signup,
    Page::Courses,
    Page::Instructor,
    Page::Contact,
    Page::StudentDashboard,
    Page::InstructorDashboard,
    Page::AdminDashboard,
];

/// Pages that take over the whole viewport. The shared header and footer
/// are never rendered around these.
pub const FULL_SCREEN_PAGES: &[Page] = &[
    Page::Login,
    Page::Signup,
    Page::StudentDashboard,
    Page::InstructorDashboard,
    Page::AdminDashboard,
];

impl Page {
    /// Stable identifier, also used in log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Landing => "landing",
            Page::Login => "login",
            Page::Signup => "signup",
            Page::Courses => "courses",
            Page::Instructor => "instructor",
            Page::Contact => "contact",
            Page::StudentDashboard => "studentDashboard",
            Page::InstructorDashboard => "instructorDashboard",
            Page::AdminDashboard => "adminDashboard",
        }
    }

    /// Parse an identifier produced by [`Page::as_str`].
    pub fn from_key(s: &str) -> Option<Self> {
        ALL_PAGES.iter().copied().find(|p| p.as_str() == s)
    }

    /// Human-readable title for headers and the document title.
    pub fn title(&self) -> &'static str {
        match self {
            Page::Landing => "Home",
            Page::Login => "Log In",
            Page::Signup => "Sign Up",
            Page::Courses => "Courses",
            Page::Instructor => "Instructors",
            Page::Contact => "Contact",
            Page::StudentDashboard => "Student Dashboard",
            Page::InstructorDashboard => "Instructor Dashboard",
            Page::AdminDashboard => "Admin Dashboard",
        }
    }

    pub fn is_full_screen(&self) -> bool {
        FULL_SCREEN_PAGES.contains(self)
    }

    /// Whether the shared header and footer wrap this page.
    pub fn shows_layout(&self) -> bool {
        !self.is_full_screen()
    }
}

/// Panel shown inside the student dashboard, independent of [`Page`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SubPage {
    #[default]
    Landing,
    Courses,
    Instructor,
    Contact,
}

/// Dashboard panels in tab order.
pub const ALL_SUB_PAGES: &[SubPage] = &[
    SubPage::Landing,
    SubPage::Courses,
    SubPage::Instructor,
    SubPage::Contact,
];

impl SubPage {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubPage::Landing => "landing",
            SubPage::Courses => "courses",
            SubPage::Instructor => "instructor",
            SubPage::Contact => "contact",
        }
    }

    /// Parse a panel key. Anything unrecognized lands on the overview panel.
    pub fn from_key(s: &str) -> Self {
        match s {
            "courses" => SubPage::Courses,
            "instructor" => SubPage::Instructor,
            "contact" => SubPage::Contact,
            _ => SubPage::Landing,
        }
    }

    /// Label on the dashboard tab bar.
    pub fn nav_label(&self) -> &'static str {
        match self {
            SubPage::Landing => "Dashboard",
            SubPage::Courses => "My Courses",
            SubPage::Instructor => "Instructors",
            SubPage::Contact => "Contact",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_default_is_landing() {
        assert_eq!(Page::default(), Page::Landing);
    }

    #[test]
    fn page_keys_roundtrip() {
        for page in ALL_PAGES {
            assert_eq!(Page::from_key(page.as_str()), Some(*page));
        }
    }

    #[test]
    fn page_keys_are_unique() {
        let mut keys: Vec<&str> = ALL_PAGES.iter().map(Page::as_str).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), ALL_PAGES.len());
    }

    #[test]
    fn page_from_unknown_key_is_none() {
        assert_eq!(Page::from_key("coursedetails"), None);
        assert_eq!(Page::from_key(""), None);
    }

    #[test]
    fn full_screen_pages_hide_layout() {
        for page in FULL_SCREEN_PAGES {
            assert!(!page.shows_layout(), "{page:?} should hide the layout");
        }
    }

    #[test]
    fn content_pages_show_layout() {
        for page in [Page::Landing, Page::Courses, Page::Instructor, Page::Contact] {
            assert!(page.shows_layout(), "{page:?} should show the layout");
        }
    }

    #[test]
    fn page_serializes_as_camel_case_key() {
        let json = serde_json::to_string(&Page::StudentDashboard).unwrap();
        assert_eq!(json, "\"studentDashboard\"");
    }

    #[test]
    fn sub_page_unknown_key_falls_back_to_landing() {
        assert_eq!(SubPage::from_key("settings"), SubPage::Landing);
        assert_eq!(SubPage::from_key(""), SubPage::Landing);
        assert_eq!(SubPage::from_key("Courses"), SubPage::Landing);
    }

    #[test]
    fn sub_page_keys_roundtrip() {
        for sub in ALL_SUB_PAGES {
            assert_eq!(SubPage::from_key(sub.as_str()), *sub);
        }
    }
}
