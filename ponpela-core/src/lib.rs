//! Ponpela core
//!
//! Platform-agnostic logic for the Ponpela accessibility widget and shop.
//! This crate holds the settings record, panel actions, class derivation and
//! cart rules without UI or browser dependencies.

pub mod actions;
pub mod config;
pub mod constants;
pub mod memory;
pub mod numbers;
pub mod presentation;
pub mod settings;
pub mod store;

// Re-export commonly used types
pub use actions::{A11yAction, ActionOutcome, UnknownAction};
pub use config::{FilterTarget, ScrollLock, WidgetConfig};
pub use memory::MemoryStorage;
pub use presentation::{Capability, ClassToggle, PresentationPlan};
pub use settings::{A11ySettings, ContrastMode, SettingsError, TextAlign};
pub use store::{Cart, CartLine, Product, find_product, format_price};

use constants::CART_STORAGE_KEY;

/// Trait for abstracting string key/value persistence.
/// Platform-specific implementations should provide this
pub trait KeyValueStore {
    type Error: std::error::Error + 'static;

    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store rejects the write.
    fn write(&self, key: &str, value: &str) -> Result<(), Self::Error>;

}

#[derive(Debug, thiserror::Error)]
pub enum PersistError<E: std::error::Error + 'static> {
    #[error("storage error: {0}")]
    Storage(#[source] E),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Loads and saves the settings record and the cart through a [`KeyValueStore`].
///
/// Both blobs are last-write-wins; nothing reconciles concurrent tabs.
pub struct Persistence<S>
where
    S: KeyValueStore,
{
    storage: S,
    settings_key: String,
}

impl<S> Persistence<S>
where
    S: KeyValueStore,
{
    pub fn new(storage: S, settings_key: impl Into<String>) -> Self {
        Self {
            storage,
            settings_key: settings_key.into(),
        }
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Load settings, falling back to defaults when missing or unreadable.
    #[must_use]
    pub fn load_settings(&self) -> A11ySettings {
        match self.storage.read(&self.settings_key) {
            Ok(Some(raw)) => A11ySettings::parse(&raw).unwrap_or_else(|e| {
                log::warn!("ignoring stored accessibility settings: {e}");
                A11ySettings::default()
            }),
            Ok(None) => A11ySettings::default(),
            Err(e) => {
                log::warn!("accessibility settings unavailable: {e}");
                A11ySettings::default()
            }
        }
    }

    /// Persist the full settings record.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the storage write fails.
    pub fn save_settings(&self, settings: &A11ySettings) -> Result<(), PersistError<S::Error>> {
        let json = settings.to_json()?;
        self.storage
            .write(&self.settings_key, &json)
            .map_err(PersistError::Storage)
    }

    /// Load the cart, starting empty when missing or unreadable.
    #[must_use]
    pub fn load_cart(&self) -> Cart {
        match self.storage.read(CART_STORAGE_KEY) {
            Ok(Some(raw)) => Cart::parse(&raw).unwrap_or_else(|e| {
                log::warn!("ignoring stored cart: {e}");
                Cart::default()
            }),
            Ok(None) => Cart::default(),
            Err(e) => {
                log::warn!("cart storage unavailable: {e}");
                Cart::default()
            }
        }
    }

    /// Persist the full cart.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the storage write fails.
    pub fn save_cart(&self, cart: &Cart) -> Result<(), PersistError<S::Error>> {
        let json = cart.to_json()?;
        self.storage
            .write(CART_STORAGE_KEY, &json)
            .map_err(PersistError::Storage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Debug, thiserror::Error)]
    #[error("quota exceeded")]
    struct QuotaExceeded;

    #[derive(Default)]
    struct FailingStorage {
        writes: Cell<u32>,
    }

    impl KeyValueStore for FailingStorage {
        type Error = QuotaExceeded;

        fn read(&self, _key: &str) -> Result<Option<String>, Self::Error> {
            Err(QuotaExceeded)
        }

        fn write(&self, _key: &str, _value: &str) -> Result<(), Self::Error> {
            self.writes.set(self.writes.get() + 1);
            Err(QuotaExceeded)
        }

    }

    #[test]
    fn unreadable_storage_yields_defaults() {
        let persistence = Persistence::new(FailingStorage::default(), "k");
        assert_eq!(persistence.load_settings(), A11ySettings::default());
        assert!(persistence.load_cart().is_empty());
    }

    #[test]
    fn failed_writes_surface_as_typed_errors() {
        let persistence = Persistence::new(FailingStorage::default(), "k");
        let err = persistence
            .save_settings(&A11ySettings::default())
            .expect_err("write should fail");
        assert!(matches!(err, PersistError::Storage(QuotaExceeded)));
        assert_eq!(persistence.storage().writes.get(), 1);
    }

    #[test]
    fn settings_and_cart_use_separate_keys() {
        let persistence = Persistence::new(MemoryStorage::default(), "custom_a11y");
        let settings = A11ySettings {
            cursor: true,
            ..A11ySettings::default()
        };
        persistence.save_settings(&settings).unwrap();
        persistence.save_cart(&Cart::new()).unwrap();
        let storage = persistence.storage();
        assert!(storage.read("custom_a11y").unwrap().is_some());
        assert_eq!(storage.read(CART_STORAGE_KEY).unwrap().as_deref(), Some("[]"));
    }
}
