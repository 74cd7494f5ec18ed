//! Key/value persistence - browser localStorage behind a small trait
//!
//! All values are strings. When localStorage is unavailable (private mode,
//! sandboxed iframe) the gallery keeps working on a session-only map.

use std::collections::HashMap;

use dioxus::logger::tracing::warn;

use crate::error::{GalleryError, Result};

/// Origin-scoped string store
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// `window.localStorage`
pub struct LocalStore {
    storage: web_sys::Storage,
}

impl LocalStore {
    pub fn open() -> Result<Self> {
        let window = web_sys::window().ok_or(GalleryError::NoWindow)?;
        let storage = window
            .local_storage()
            .ok()
            .flatten()
            .ok_or(GalleryError::StorageUnavailable)?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(|err| GalleryError::StorageWrite {
                key: key.to_string(),
                reason: crate::error::js_message(&err),
            })
    }
}

/// Session-only store; also the test double
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// localStorage if the browser grants it, otherwise a session-only map.
pub fn open_store() -> Box<dyn KeyValueStore> {
    match LocalStore::open() {
        Ok(store) => Box::new(store),
        Err(err) => {
            warn!("{err}; usage and theme will not survive a reload");
            Box::new(MemoryStore::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k"), None);
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("v"));
        store.set("k", "w").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("w"));
    }
}
