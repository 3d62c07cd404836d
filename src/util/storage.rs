//! Durable preference storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller only ever needs one string value under one key, so the seam
//! is a two-method trait. The browser implementation wraps `localStorage`;
//! [`MemoryStore`] backs tests and sessions where storage is disabled.

use std::collections::HashMap;

use crate::error::StorageError;

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// Synchronous string key-value store surviving page reloads.
pub trait PreferenceStore {
    /// Read `key`. `Ok(None)` means nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] when the store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the host refuses the write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-process store. Clones share nothing.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    fail_writes: bool,
    fail_reads: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with one entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::default();
        store.values.insert(key.to_owned(), value.to_owned());
        store
    }

    /// Store whose writes fail as if the quota were exhausted.
    pub fn rejecting_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    /// Store that behaves like disabled `localStorage`.
    pub fn unavailable() -> Self {
        Self {
            fail_reads: true,
            fail_writes: true,
            ..Self::default()
        }
    }

    /// Raw stored value, bypassing failure injection.
    pub fn peek(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_reads {
            return Err(StorageError::Unavailable);
        }
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_reads {
            return Err(StorageError::Unavailable);
        }
        if self.fail_writes {
            return Err(StorageError::Write("quota exceeded".to_owned()));
        }
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// `window.localStorage`, resolved lazily on each access.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

#[cfg(feature = "hydrate")]
impl BrowserStore {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) | Err(_) => Err(StorageError::Unavailable),
        }
    }
}

#[cfg(feature = "hydrate")]
impl PreferenceStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|_| StorageError::Unavailable)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|err| StorageError::Write(format!("{err:?}")))
    }
}
