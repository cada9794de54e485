use serde_json::json;
use shared_types::{DashboardState, MemoryStore, USER_STORAGE_KEY};

/// Raw JSON for a stored student.
pub fn student_json(name: &str) -> String {
    json!({
        "name": name,
        "email": "sara@learnhub.example",
        "role": "student",
    })
    .to_string()
}

/// Store holding `raw` under the user key.
pub fn store_with_user(raw: &str) -> MemoryStore {
    MemoryStore::with_entry(USER_STORAGE_KEY, raw)
}

/// Dashboard state as mounted against `store`, ignoring any decode error.
pub fn mount(store: &MemoryStore) -> DashboardState {
    DashboardState::load(store).0
}
