//! Key/Value Storage
//!
//! String-valued stores the page persists into: browser `localStorage` /
//! `sessionStorage`, and an in-memory store for tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use wasm_bindgen::JsValue;

use crate::error::{ShopError, ShopResult};

/// Minimal key/value store interface
pub trait KeyValueStore {
    fn get(&self, key: &str) -> ShopResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> ShopResult<()>;
    fn remove(&self, key: &str) -> ShopResult<()>;
}

/// Browser Web Storage area
pub struct BrowserStore {
    storage: web_sys::Storage,
}

impl BrowserStore {
    /// `window.localStorage`
    pub fn local() -> ShopResult<Self> {
        let window = web_sys::window()
            .ok_or_else(|| ShopError::StorageUnavailable("no window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| ShopError::StorageUnavailable(js_error(e)))?
            .ok_or_else(|| ShopError::StorageUnavailable("localStorage disabled".to_string()))?;
        Ok(Self { storage })
    }

    /// `window.sessionStorage`
    pub fn session() -> ShopResult<Self> {
        let window = web_sys::window()
            .ok_or_else(|| ShopError::StorageUnavailable("no window".to_string()))?;
        let storage = window
            .session_storage()
            .map_err(|e| ShopError::StorageUnavailable(js_error(e)))?
            .ok_or_else(|| ShopError::StorageUnavailable("sessionStorage disabled".to_string()))?;
        Ok(Self { storage })
    }
}

/// Message of a thrown DOMException or other JS value
fn js_error(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> ShopResult<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| ShopError::StorageRead(js_error(e)))
    }

    fn set(&self, key: &str, value: &str) -> ShopResult<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| ShopError::StorageWrite(js_error(e)))
    }

    fn remove(&self, key: &str) -> ShopResult<()> {
        self.storage
            .remove_item(key)
            .map_err(|e| ShopError::StorageWrite(js_error(e)))
    }
}

/// In-memory store. Writes can be made to fail to simulate a full quota.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    fail_writes: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.entries.borrow_mut().insert(key.to_string(), value.to_string());
        store
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Raw stored value, bypassing the trait
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> ShopResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> ShopResult<()> {
        if self.fail_writes.get() {
            return Err(ShopError::StorageWrite("quota exceeded".to_string()));
        }
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> ShopResult<()> {
        if self.fail_writes.get() {
            return Err(ShopError::StorageWrite("storage disabled".to_string()));
        }
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> ShopResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> ShopResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> ShopResult<()> {
        (**self).remove(key)
    }
}

/// `localStorage`, or a throwaway in-memory store when it is disabled
pub fn local_or_memory() -> Box<dyn KeyValueStore> {
    match BrowserStore::local() {
        Ok(store) => Box::new(store),
        Err(e) => {
            log::warn!("[STORAGE] {}; keeping state in memory", e);
            Box::new(MemoryStore::new())
        }
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> ShopResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> ShopResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> ShopResult<()> {
        (**self).remove(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_set_get_remove() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);

        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap(), Some("v".to_string()));

        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn test_memory_store_failing_writes_keep_old_value() {
        let store = MemoryStore::with_entry("k", "old");
        store.set_fail_writes(true);

        let err = store.set("k", "new").unwrap_err();
        assert!(matches!(err, ShopError::StorageWrite(_)));
        assert_eq!(store.raw("k"), Some("old".to_string()));
    }
}
