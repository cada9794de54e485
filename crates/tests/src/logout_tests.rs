use crate::common;
use pretty_assertions::assert_eq;
use shared_types::{KeyValueStore, Page, SubPage, ALL_SUB_PAGES, USER_STORAGE_KEY};

#[test]
fn test_logout_from_every_panel_returns_login() {
    for sub_page in ALL_SUB_PAGES {
        let mut store = common::store_with_user(&common::student_json("Sara Ahmed"));
        let mut state = common::mount(&store);
        state.set_sub_page(*sub_page);

        assert_eq!(state.logout(&mut store), Page::Login);
        assert_eq!(store.get(USER_STORAGE_KEY), None);
        assert!(state.user.is_none());
    }
}

#[test]
fn test_logout_with_overlay_open_closes_it() {
    let mut store = common::store_with_user(&common::student_json("Sara Ahmed"));
    let mut state = common::mount(&store);
    state.set_sub_page(SubPage::Courses);
    state.toggle_profile_menu();

    assert_eq!(state.logout(&mut store), Page::Login);
    assert!(!state.show_profile_menu);
    assert_eq!(store.get(USER_STORAGE_KEY), None);
}

#[test]
fn test_logout_without_stored_user_still_returns_login() {
    let mut store = shared_types::MemoryStore::new();
    let mut state = common::mount(&store);
    assert_eq!(state.logout(&mut store), Page::Login);
    assert!(store.is_empty());
}

#[test]
fn test_logout_leaves_other_keys_alone() {
    let mut store = common::store_with_user(&common::student_json("Sara Ahmed"));
    store.set("theme", "dark").unwrap();
    let mut state = common::mount(&store);

    state.logout(&mut store);
    assert_eq!(store.get("theme").as_deref(), Some("dark"));
}
