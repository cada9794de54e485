use crate::error::AppError;
use crate::page::Page;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Storage key under which the signed-in user is kept.
pub const USER_STORAGE_KEY: &str = "user";

/// The signed-in user as kept in local storage.
///
/// The record is never validated. Missing or `null` fields read as empty
/// strings and scalar fields keep their JSON text. Extra fields survive a
/// load/save cycle untouched. Only non-object JSON is rejected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct User {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub role: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: UserRole) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role: role.as_str().to_string(),
            extra: Map::new(),
        }
    }

    /// Decode the raw storage value.
    pub fn from_storage(raw: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Encode for storage.
    pub fn to_storage(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Role exactly as stored, or the default role's name when blank.
    pub fn role_label(&self) -> &str {
        let role = self.role.trim();
        if role.is_empty() {
            UserRole::default().display_name()
        } else {
            role
        }
    }

    pub fn user_role(&self) -> UserRole {
        UserRole::from_str_or_default(&self.role)
    }

    /// Name, or `fallback` when the stored name is blank.
    pub fn name_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        let name = self.name.trim();
        if name.is_empty() {
            fallback
        } else {
            name
        }
    }

    /// First word of the name, if any.
    pub fn first_name(&self) -> Option<&str> {
        self.name.split_whitespace().next()
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

/// Role carried in `User.role`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Student,
    Instructor,
    Admin,
}

pub const ALL_ROLES: &[UserRole] = &[UserRole::Student, UserRole::Instructor, UserRole::Admin];

impl UserRole {
    /// Parse a role string. Unknown values default to Student.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "instructor" | "teacher" => UserRole::Instructor,
            "admin" => UserRole::Admin,
            _ => UserRole::Student,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Student => "student",
            UserRole::Instructor => "instructor",
            UserRole::Admin => "admin",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::Student => "Student",
            UserRole::Instructor => "Instructor",
            UserRole::Admin => "Administrator",
        }
    }

    /// Landing page after sign-in.
    pub fn dashboard(&self) -> Page {
        match self {
            UserRole::Student => Page::StudentDashboard,
            UserRole::Instructor => Page::InstructorDashboard,
            UserRole::Admin => Page::AdminDashboard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_minimal_record() {
        let user =
            User::from_storage(r#"{"name":"Ayesha Khan","email":"a@x.pk","role":"student"}"#)
                .unwrap();
        assert_eq!(user.name, "Ayesha Khan");
        assert_eq!(user.email, "a@x.pk");
        assert_eq!(user.user_role(), UserRole::Student);
        assert!(user.extra.is_empty());
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let user = User::from_storage("{}").unwrap();
        assert_eq!(user, User::default());
        assert_eq!(user.name_or("Student"), "Student");
    }

    #[test]
    fn extra_fields_survive_roundtrip() {
        let raw = r#"{"name":"Ali","email":"ali@x.pk","role":"admin","token":"abc","age":21}"#;
        let user = User::from_storage(raw).unwrap();
        assert_eq!(user.extra.get("token"), Some(&Value::from("abc")));

        let again = User::from_storage(&user.to_storage().unwrap()).unwrap();
        assert_eq!(user, again);
    }

    #[test]
    fn malformed_json_is_invalid_data() {
        for raw in ["not json", "{\"name\":", "[1,2,3]", "null", "42"] {
            let err = User::from_storage(raw).unwrap_err();
            assert_eq!(err.kind, crate::AppErrorKind::InvalidData, "input: {raw}");
        }
    }

    #[test]
    fn null_and_scalar_fields_are_kept_as_text() {
        let user = User::from_storage(r#"{"name":"Sara Ahmed","email":null,"role":7}"#).unwrap();
        assert_eq!(user.name, "Sara Ahmed");
        assert_eq!(user.email, "");
        assert_eq!(user.role, "7");

        let user = User::from_storage(r#"{"name":true,"role":null}"#).unwrap();
        assert_eq!(user.name, "true");
        assert_eq!(user.user_role(), UserRole::Student);
    }

    #[test]
    fn role_label_shows_stored_text() {
        let mut user = User::new("Ali", "ali@x.pk", UserRole::Student);
        user.role = "teacher".into();
        assert_eq!(user.role_label(), "teacher");
        user.role = "janitor".into();
        assert_eq!(user.role_label(), "janitor");
        user.role = "  ".into();
        assert_eq!(user.role_label(), "Student");
    }

    #[test]
    fn first_name_takes_first_word() {
        let user = User::new("  Sara   Ahmed ", "s@x.pk", UserRole::Student);
        assert_eq!(user.first_name(), Some("Sara"));
        assert_eq!(User::default().first_name(), None);
    }

    #[test]
    fn role_parsing_is_lenient() {
        assert_eq!(UserRole::from_str_or_default("ADMIN"), UserRole::Admin);
        assert_eq!(UserRole::from_str_or_default("teacher"), UserRole::Instructor);
        assert_eq!(UserRole::from_str_or_default("janitor"), UserRole::Student);
        for role in ALL_ROLES {
            assert_eq!(UserRole::from_str_or_default(role.as_str()), *role);
        }
    }

    #[test]
    fn each_role_has_a_full_screen_dashboard() {
        for role in ALL_ROLES {
            assert!(role.dashboard().is_full_screen());
        }
    }
}
