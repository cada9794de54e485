use crate::common;
use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, DashboardState, User, UserRole};

#[test]
fn test_malformed_user_yields_no_user() {
    for raw in ["{not json", "null", "[1,2,3]", "42", "\"sara\"", ""] {
        let store = common::store_with_user(raw);
        let (state, error) = DashboardState::load(&store);
        assert!(state.user.is_none(), "{raw:?}");
        assert_eq!(
            error.map(|e| e.kind),
            Some(AppErrorKind::InvalidData),
            "{raw:?}"
        );
    }
}

#[test]
fn test_missing_fields_default_to_empty() {
    let state = common::mount(&common::store_with_user("{}"));
    let user = state.user.as_ref().expect("empty object is a valid user");
    assert_eq!(user.name, "");
    assert_eq!(user.email, "");
    assert_eq!(user.user_role(), UserRole::Student);
    assert_eq!(state.greeting(), "Welcome back, Student!");
}

#[test]
fn test_unknown_fields_survive_a_round_trip() {
    let raw = r#"{"name":"Sara","email":"s@x","role":"student","avatar":"a.png"}"#;
    let user = User::from_storage(raw).unwrap();
    let again: serde_json::Value = serde_json::from_str(&user.to_storage().unwrap()).unwrap();
    assert_eq!(again["avatar"], "a.png");
}

#[test]
fn test_role_picks_dashboard() {
    let instructor = User::from_storage(r#"{"name":"Ali","role":"Instructor"}"#).unwrap();
    assert_eq!(
        instructor.user_role().dashboard(),
        shared_types::Page::InstructorDashboard
    );

    let odd = User::from_storage(r#"{"name":"Ali","role":"janitor"}"#).unwrap();
    assert_eq!(odd.user_role(), UserRole::Student);
}

#[test]
fn test_null_fields_keep_the_user() {
    let state = common::mount(&common::store_with_user(
        r#"{"name":"Sara Ahmed","email":"sara@x.pk","role":null}"#,
    ));
    let user = state.user.as_ref().expect("null role is still a user");
    assert_eq!(user.role, "");
    assert_eq!(state.greeting(), "Welcome back, Sara Ahmed!");
    assert!(state.shows_logout_button());
}

#[test]
fn test_non_string_fields_keep_the_user() {
    let (state, error) = DashboardState::load(&common::store_with_user(
        r#"{"name":"Sara Ahmed","email":null,"role":3,"verified":true}"#,
    ));
    assert!(error.is_none());
    let user = state.user.as_ref().expect("scalar fields are still a user");
    assert_eq!(user.email, "");
    assert_eq!(user.role, "3");
    assert_eq!(user.extra["verified"], serde_json::Value::Bool(true));
    assert_eq!(state.profile_label(), "Sara");
}
