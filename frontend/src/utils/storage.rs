//! Persistent key/value storage for session bookkeeping.
//!
//! In the browser this is `window.localStorage`. Host builds (SSR rendering
//! and tests) use a thread-local map with the same surface.

#[cfg(target_arch = "wasm32")]
mod backend {
    use web_sys::{Storage, Window};

    pub fn window() -> Result<Window, String> {
        web_sys::window().ok_or_else(|| "No window object".to_string())
    }

    pub fn local_storage() -> Result<Storage, String> {
        window()?
            .local_storage()
            .map_err(|_| "No localStorage".to_string())?
            .ok_or_else(|| "No localStorage".to_string())
    }

    pub fn get_item(key: &str) -> Option<String> {
        local_storage()
            .ok()
            .and_then(|storage| storage.get_item(key).ok().flatten())
    }

    pub fn set_item(key: &str, value: &str) -> Result<(), String> {
        local_storage()?
            .set_item(key, value)
            .map_err(|_| format!("Failed to store {}", key))
    }

    pub fn remove_item(key: &str) {
        if let Ok(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod backend {
    use std::cell::RefCell;
    use std::collections::HashMap;

    thread_local! {
        static MEMORY: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
    }

    pub fn get_item(key: &str) -> Option<String> {
        MEMORY.with(|memory| memory.borrow().get(key).cloned())
    }

    pub fn set_item(key: &str, value: &str) -> Result<(), String> {
        MEMORY.with(|memory| {
            memory
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
        });
        Ok(())
    }

    pub fn remove_item(key: &str) {
        MEMORY.with(|memory| {
            memory.borrow_mut().remove(key);
        });
    }
}

pub use backend::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;

    #[test]
    fn memory_storage_round_trips_and_removes() {
        set_item("storage-test", "value").unwrap();
        assert_eq!(get_item("storage-test").as_deref(), Some("value"));
        remove_item("storage-test");
        assert!(get_item("storage-test").is_none());
    }
}
