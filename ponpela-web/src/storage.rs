//! Browser-backed persistence for the settings record and the cart.
use crate::dom;
use ponpela_core::{KeyValueStore, MemoryStorage, Persistence};
use web_sys::Storage;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage error: {0}")]
    Storage(String),
}

thread_local! {
    static FALLBACK: MemoryStorage = MemoryStorage::new();
}

/// The page-wide fallback store; every handle shares the same entries.
fn fallback() -> MemoryStorage {
    FALLBACK.with(MemoryStorage::clone)
}

/// `localStorage` with a page-lifetime fallback when the browser refuses it.
#[derive(Clone)]
pub enum WebStorage {
    Local(Storage),
    Memory(MemoryStorage),
}

impl WebStorage {
    /// Prefer `localStorage`; fall back to memory so the page keeps working.
    #[must_use]
    pub fn open() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            match dom::local_storage() {
                Ok(storage) => Self::Local(storage),
                Err(e) => {
                    log::warn!(
                        "localStorage unavailable, preferences will not persist: {}",
                        dom::js_error_message(&e)
                    );
                    Self::Memory(fallback())
                }
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::Memory(fallback())
        }
    }
}

impl KeyValueStore for WebStorage {
    type Error = StorageError;

    fn read(&self, key: &str) -> Result<Option<String>, Self::Error> {
        match self {
            Self::Local(storage) => storage
                .get_item(key)
                .map_err(|e| StorageError::Storage(dom::js_error_message(&e))),
            Self::Memory(memory) => Ok(memory.read(key).unwrap_or_default()),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        match self {
            Self::Local(storage) => storage
                .set_item(key, value)
                .map_err(|e| StorageError::Storage(dom::js_error_message(&e))),
            Self::Memory(memory) => {
                let _ = memory.write(key, value);
                Ok(())
            }
        }
    }
}

/// Persistence over the browser's storage for the given settings key.
#[must_use]
pub fn web_persistence(settings_key: &str) -> Persistence<WebStorage> {
    Persistence::new(WebStorage::open(), settings_key)
}
