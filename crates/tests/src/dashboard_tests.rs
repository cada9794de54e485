use crate::common;
use pretty_assertions::assert_eq;
use shared_types::{mock_courses, MemoryStore, Panel, SubPage, ALL_SUB_PAGES};

#[test]
fn test_courses_are_identical_on_every_mount() {
    let first = common::mount(&MemoryStore::new());
    let second = common::mount(&MemoryStore::new());
    assert_eq!(first.courses, second.courses);
    assert_eq!(first.courses, mock_courses());
}

#[test]
fn test_courses_do_not_depend_on_user() {
    let anonymous = common::mount(&MemoryStore::new());
    let signed_in = common::mount(&common::store_with_user(&common::student_json("Sara Ahmed")));
    assert!(anonymous.user.is_none());
    assert!(signed_in.user.is_some());
    assert_eq!(anonymous.courses, signed_in.courses);
}

#[test]
fn test_profile_overlay_hides_every_panel() {
    let mut state = common::mount(&MemoryStore::new());
    for sub_page in ALL_SUB_PAGES {
        state.set_sub_page(*sub_page);
        assert_eq!(state.visible_panel(), Panel::Content(*sub_page));

        state.toggle_profile_menu();
        assert_eq!(state.visible_panel(), Panel::Profile);

        state.toggle_profile_menu();
        assert_eq!(state.visible_panel(), Panel::Content(*sub_page));
    }
}

#[test]
fn test_unknown_sub_page_key_shows_overview() {
    let mut state = common::mount(&MemoryStore::new());
    state.set_sub_page_key("instructor");
    assert_eq!(state.sub_page, SubPage::Instructor);
    state.set_sub_page_key("gradebook");
    assert_eq!(state.sub_page, SubPage::Landing);
}

#[test]
fn test_mobile_menu_closes_after_choice() {
    let mut state = common::mount(&MemoryStore::new());
    state.toggle_mobile_menu();
    assert!(state.show_mobile_menu);
    state.choose_from_mobile_menu(SubPage::Contact);
    assert!(!state.show_mobile_menu);
    assert_eq!(state.sub_page, SubPage::Contact);
}

#[test]
fn test_logout_button_visibility() {
    let mut anonymous = common::mount(&MemoryStore::new());
    assert!(!anonymous.shows_logout_button());
    anonymous.toggle_profile_menu();
    assert!(!anonymous.shows_logout_button());

    let mut state = common::mount(&common::store_with_user(&common::student_json("Sara Ahmed")));
    assert!(state.shows_logout_button());
    state.toggle_profile_menu();
    assert!(!state.shows_logout_button());
}

#[test]
fn test_greeting_and_profile_label() {
    let state = common::mount(&common::store_with_user(&common::student_json("Sara Ahmed")));
    assert_eq!(state.greeting(), "Welcome back, Sara Ahmed!");
    assert_eq!(state.profile_label(), "Sara");

    let anonymous = common::mount(&MemoryStore::new());
    assert_eq!(anonymous.greeting(), "Welcome back, Student!");
    assert_eq!(anonymous.profile_label(), "Profile");
}

#[test]
fn test_enrollment_summary_lists_first_two_courses() {
    let state = common::mount(&MemoryStore::new());
    let names: Vec<&str> = state
        .enrollment_summary()
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(names, vec!["AI Powered Learning", "Interactive Video Ecosystem"]);
}
