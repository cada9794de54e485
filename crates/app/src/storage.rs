use shared_types::{AppError, KeyValueStore};

/// `window.localStorage` in the browser.
///
/// Desktop and native test builds have no `window`; there the store is a
/// process-wide map that lives as long as the app.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

#[cfg(target_arch = "wasm32")]
impl BrowserStore {
    fn local_storage() -> Result<web_sys::Storage, AppError> {
        web_sys::window()
            .ok_or_else(|| AppError::storage_unavailable("no window object"))?
            .local_storage()
            .map_err(|_| AppError::storage_unavailable("localStorage access denied"))?
            .ok_or_else(|| AppError::storage_unavailable("localStorage disabled"))
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        match Self::local_storage() {
            Ok(storage) => storage.get_item(key).ok().flatten(),
            Err(e) => {
                tracing::warn!(error = %e, key, "storage read skipped");
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        Self::local_storage()?
            .set_item(key, value)
            .map_err(|_| AppError::storage_unavailable(format!("write to '{key}' rejected")))
    }

    fn remove(&mut self, key: &str) {
        match Self::local_storage() {
            Ok(storage) => {
                if storage.remove_item(key).is_err() {
                    tracing::warn!(key, "storage remove rejected");
                }
            }
            Err(e) => tracing::warn!(error = %e, key, "storage remove skipped"),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod fallback {
    use shared_types::MemoryStore;
    use std::sync::{LazyLock, Mutex, MutexGuard};

    static STORE: LazyLock<Mutex<MemoryStore>> = LazyLock::new(|| Mutex::new(MemoryStore::new()));

    pub fn store() -> MutexGuard<'static, MemoryStore> {
        STORE.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        fallback::store().get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        fallback::store().set(key, value)
    }

    fn remove(&mut self, key: &str) {
        fallback::store().remove(key)
    }
}
