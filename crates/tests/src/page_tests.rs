use pretty_assertions::assert_eq;
use shared_types::{Page, SubPage, ALL_PAGES, ALL_SUB_PAGES, FULL_SCREEN_PAGES};

#[test]
fn test_every_page_key_round_trips() {
    for page in ALL_PAGES {
        assert_eq!(Page::from_key(page.as_str()), Some(*page));
    }
}

#[test]
fn test_page_keys_are_unique() {
    let mut keys: Vec<&str> = ALL_PAGES.iter().map(Page::as_str).collect();
    keys.sort_unstable();
    keys.dedup();
    assert_eq!(keys.len(), ALL_PAGES.len());
}

#[test]
fn test_unknown_page_key_is_rejected() {
    assert_eq!(Page::from_key("coursedetails"), None);
    assert_eq!(Page::from_key(""), None);
}

#[test]
fn test_full_screen_pages_hide_layout() {
    for page in ALL_PAGES {
        let excluded = FULL_SCREEN_PAGES.contains(page);
        assert_eq!(page.shows_layout(), !excluded, "{page:?}");
    }
}

#[test]
fn test_exclusion_set_members() {
    assert_eq!(
        FULL_SCREEN_PAGES,
        &[
            Page::Login,
            Page::Signup,
            Page::StudentDashboard,
            Page::InstructorDashboard,
            Page::AdminDashboard,
        ]
    );
    assert!(Page::Landing.shows_layout());
    assert!(Page::Contact.shows_layout());
}

#[test]
fn test_page_serializes_as_camel_case_key() {
    let json = serde_json::to_string(&Page::StudentDashboard).unwrap();
    assert_eq!(json, "\"studentDashboard\"");
}

#[test]
fn test_unknown_sub_page_falls_back_to_landing() {
    assert_eq!(SubPage::from_key("grades"), SubPage::Landing);
    for sub_page in ALL_SUB_PAGES {
        assert_eq!(SubPage::from_key(sub_page.as_str()), *sub_page);
    }
}
