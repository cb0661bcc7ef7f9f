//! Key-value persistence behind browser `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The theme and override stores only see `KeyValueStore`, so the same logic
//! runs against `localStorage` in the browser and `MemoryStorage` in native
//! tests or when the browser refuses storage access.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::StorageError;

/// Minimal synchronous string store.
pub trait KeyValueStore {
    /// Read the raw value for `key`, `Ok(None)` when absent.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Unavailable` if the backing store cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Unavailable` if the write is rejected.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`; removing a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Unavailable` if the backing store cannot be written.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// Shared handle to the active store.
pub type SharedStore = Rc<dyn KeyValueStore>;

/// In-memory store. Values live as long as the store does.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// Store that rejects every operation, standing in for blocked `localStorage`.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct FailingStorage;

#[cfg(test)]
impl KeyValueStore for FailingStorage {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("blocked".to_owned()))
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("blocked".to_owned()))
    }

    fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("blocked".to_owned()))
    }
}

/// The window's `localStorage`.
#[cfg(feature = "csr")]
pub struct BrowserStorage {
    storage: web_sys::Storage,
}

#[cfg(feature = "csr")]
impl BrowserStorage {
    /// Open `window.localStorage`, if the browser grants access.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Unavailable` when there is no window or storage
    /// access is denied (private mode, sandboxed iframe).
    pub fn open() -> Result<Self, StorageError> {
        let window = web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".to_owned()))?;
        let storage = window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_owned()))?;
        Ok(Self { storage })
    }
}

#[cfg(feature = "csr")]
impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage
            .get_item(key)
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.storage
            .remove_item(key)
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))
    }
}

/// Open the store used by the running app.
///
/// In the browser this is `localStorage`; if that is unavailable, or when
/// built without `csr`, an in-memory store is returned instead.
pub fn open_default() -> SharedStore {
    #[cfg(feature = "csr")]
    {
        match BrowserStorage::open() {
            Ok(storage) => return Rc::new(storage),
            Err(e) => log::warn!("falling back to in-memory storage: {e}"),
        }
    }
    Rc::new(MemoryStorage::new())
}

/// Load and decode a JSON value stored under `key`.
///
/// # Errors
///
/// Returns `StorageError::Unavailable` if the read fails and
/// `StorageError::MalformedOverride` if the stored text is not valid JSON
/// for `T`.
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Result<Option<T>, StorageError> {
    let Some(raw) = store.get_item(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|e| StorageError::MalformedOverride { key: key.to_owned(), reason: e.to_string() })
}

/// Encode `value` as JSON and store it under `key`.
///
/// # Errors
///
/// Returns `StorageError::Unavailable` if encoding or the write fails.
pub fn save_json<T: Serialize>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value).map_err(|e| StorageError::Unavailable(e.to_string()))?;
    store.set_item(key, &raw)
}
