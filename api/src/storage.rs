//! Persistent key/value storage for session data.
//!
//! On the web this is `window.localStorage`. Off wasm a process-local map
//! stands in so the session logic keeps working in native builds and tests.

// Re-export the public API from the appropriate module
#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

/// Storage key holding the bearer token issued at login.
pub const TOKEN_KEY: &str = "token";

/// Storage key holding the serialized profile of the logged-in user.
pub const USER_KEY: &str = "user";

/// The bearer token from the last login, if one is stored.
pub fn bearer_token() -> Option<String> {
    get_item(TOKEN_KEY)
}

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use web_sys::Storage;

    fn local_storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    pub fn get_item(key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok()?
    }

    pub fn set_item(key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }

    pub fn remove_item(key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    use std::collections::HashMap;
    use std::sync::{Mutex, OnceLock};

    fn store() -> &'static Mutex<HashMap<String, String>> {
        static STORE: OnceLock<Mutex<HashMap<String, String>>> = OnceLock::new();
        STORE.get_or_init(|| Mutex::new(HashMap::new()))
    }

    pub fn get_item(key: &str) -> Option<String> {
        store().lock().ok()?.get(key).cloned()
    }

    pub fn set_item(key: &str, value: &str) {
        if let Ok(mut store) = store().lock() {
            store.insert(key.to_string(), value.to_string());
        }
    }

    pub fn remove_item(key: &str) {
        if let Ok(mut store) = store().lock() {
            store.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove_roundtrip() {
        set_item("storage-test-key", "storage-test-value");
        assert_eq!(
            get_item("storage-test-key"),
            Some("storage-test-value".to_string())
        );

        remove_item("storage-test-key");
        assert_eq!(get_item("storage-test-key"), None);
    }

    #[test]
    fn bearer_token_reads_the_token_key() {
        assert_eq!(bearer_token(), None);
        set_item(TOKEN_KEY, "jwt-abc123");
        assert_eq!(bearer_token(), Some("jwt-abc123".to_string()));
        remove_item(TOKEN_KEY);
    }
}
