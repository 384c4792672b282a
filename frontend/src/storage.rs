use std::rc::Rc;

use shared::{KeyValueStore, MemoryStore, PuzzleError, SessionStore};
use web_sys::{window, Storage};

use crate::dom::js_error_message;

/// `localStorage`, or a page-lifetime map when the browser refuses it
/// (private browsing, disabled cookies).
pub enum BrowserStore {
    Local(Storage),
    Memory(MemoryStore),
}

impl BrowserStore {
    pub fn open() -> Self {
        match window().and_then(|w| w.local_storage().ok().flatten()) {
            Some(storage) => BrowserStore::Local(storage),
            None => {
                log::warn!("localStorage unavailable, play history will not persist");
                BrowserStore::Memory(MemoryStore::new())
            }
        }
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        match self {
            BrowserStore::Local(storage) => storage.get_item(key).ok().flatten(),
            BrowserStore::Memory(memory) => memory.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PuzzleError> {
        match self {
            BrowserStore::Local(storage) => storage
                .set_item(key, value)
                .map_err(|e| PuzzleError::Storage(js_error_message(&e))),
            BrowserStore::Memory(memory) => memory.set(key, value),
        }
    }
}

// Opened once, so the in-memory fallback holds for the whole page.
thread_local! {
    static BROWSER_STORE: Rc<BrowserStore> = Rc::new(BrowserStore::open());
}

pub fn session() -> SessionStore<Rc<BrowserStore>> {
    SessionStore::new(BROWSER_STORE.with(Rc::clone))
}
