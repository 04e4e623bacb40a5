//! `localStorage` / `sessionStorage` behind [`KeyValueStore`].
//!
//! Values are read and written raw through the `web_sys::Storage` handle
//! gloo exposes, not through gloo's JSON layer, so what ends up in the
//! browser is exactly `formValues = {"campo1":...}` and
//! `formSubmitted = true`.

use gloo_storage::{LocalStorage, SessionStorage, Storage};
use log::warn;

use crate::upload::{KeyValueStore, MemoryStore, StoreError};

pub enum BrowserStore {
    Local,
    Session,
    /// Storage is disabled (private mode, sandboxed iframe, ...).
    Memory(MemoryStore),
}

impl BrowserStore {
    /// Persistent store; falls back to memory when unavailable.
    pub fn local() -> Self {
        match probe(|w| w.local_storage()) {
            Ok(()) => BrowserStore::Local,
            Err(e) => {
                warn!("localStorage unavailable, form values will not persist: {}", e);
                BrowserStore::Memory(MemoryStore::default())
            }
        }
    }

    /// Tab-scoped store; falls back to memory when unavailable.
    pub fn session() -> Self {
        match probe(|w| w.session_storage()) {
            Ok(()) => BrowserStore::Session,
            Err(e) => {
                warn!("sessionStorage unavailable, submissions will not be tracked: {}", e);
                BrowserStore::Memory(MemoryStore::default())
            }
        }
    }

    fn raw(&self) -> Option<web_sys::Storage> {
        match self {
            BrowserStore::Local => Some(LocalStorage::raw()),
            BrowserStore::Session => Some(SessionStorage::raw()),
            BrowserStore::Memory(_) => None,
        }
    }
}

/// gloo's `raw()` panics when storage is missing, so check first.
fn probe(
    storage: impl Fn(&web_sys::Window) -> Result<Option<web_sys::Storage>, wasm_bindgen::JsValue>,
) -> Result<(), StoreError> {
    let window = web_sys::window().ok_or_else(|| StoreError::Unavailable("no window".into()))?;
    match storage(&window) {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err(StoreError::Unavailable("not provided".into())),
        Err(e) => Err(StoreError::Unavailable(format!("{:?}", e))),
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        match self {
            BrowserStore::Memory(store) => store.get(key),
            _ => self.raw().and_then(|s| s.get_item(key).ok().flatten()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if let BrowserStore::Memory(store) = self {
            return store.set(key, value);
        }
        let storage = self
            .raw()
            .ok_or_else(|| StoreError::Unavailable(key.to_string()))?;
        storage.set_item(key, value).map_err(|e| StoreError::Write {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }

    fn remove(&mut self, key: &str) {
        match self {
            BrowserStore::Memory(store) => store.remove(key),
            _ => {
                if let Some(storage) = self.raw() {
                    if let Err(e) = storage.remove_item(key) {
                        warn!("failed to remove `{}`: {:?}", key, e);
                    }
                }
            }
        }
    }
}
