//! Persistence Adapters
//!
//! A single string-keyed entry holding the whole gift list as JSON.

use std::fmt;
use std::sync::Arc;

use crate::error::{GiftError, Result};

/// Raw string persistence for the gift list
pub trait GiftStorage: fmt::Debug {
    /// Read the stored value, `None` if nothing was ever written
    fn read(&self) -> Result<Option<String>>;
    /// Overwrite the stored value
    fn write(&self, raw: &str) -> Result<()>;
}

impl<T: GiftStorage + ?Sized> GiftStorage for Arc<T> {
    fn read(&self) -> Result<Option<String>> {
        (**self).read()
    }

    fn write(&self, raw: &str) -> Result<()> {
        (**self).write(raw)
    }
}

/// Storage handle held by the app store
pub type SharedStorage = Arc<dyn GiftStorage + Send + Sync>;

/// Browser `window.localStorage` under a fixed key
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalStorage {
    key: &'static str,
}

impl LocalStorage {
    pub fn new(key: &'static str) -> Self {
        Self { key }
    }

    fn storage(&self) -> Result<web_sys::Storage> {
        let window = web_sys::window().ok_or_else(|| GiftError::Storage("no window".into()))?;
        window
            .local_storage()
            .map_err(|e| GiftError::Storage(format!("{:?}", e)))?
            .ok_or_else(|| GiftError::Storage("localStorage disabled".into()))
    }
}

impl GiftStorage for LocalStorage {
    fn read(&self) -> Result<Option<String>> {
        self.storage()?
            .get_item(self.key)
            .map_err(|e| GiftError::Storage(format!("{:?}", e)))
    }

    fn write(&self, raw: &str) -> Result<()> {
        self.storage()?
            .set_item(self.key, raw)
            .map_err(|e| GiftError::Storage(format!("{:?}", e)))
    }
}

#[cfg(test)]
pub use memory::MemoryStorage;

#[cfg(test)]
mod memory {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// In-memory storage for tests; can be told to fail writes
    #[derive(Debug, Default)]
    pub struct MemoryStorage {
        value: Mutex<Option<String>>,
        fail_writes: AtomicBool,
        writes: AtomicUsize,
    }

    impl MemoryStorage {
        pub fn with_value(raw: &str) -> Self {
            let storage = Self::default();
            *storage.value.lock().unwrap() = Some(raw.to_string());
            storage
        }

        pub fn value(&self) -> Option<String> {
            self.value.lock().unwrap().clone()
        }

        pub fn writes(&self) -> usize {
            self.writes.load(Ordering::SeqCst)
        }

        pub fn set_fail_writes(&self, fail: bool) {
            self.fail_writes.store(fail, Ordering::SeqCst);
        }
    }

    impl GiftStorage for MemoryStorage {
        fn read(&self) -> Result<Option<String>> {
            Ok(self.value())
        }

        fn write(&self, raw: &str) -> Result<()> {
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(GiftError::Storage("quota exceeded".into()));
            }
            self.writes.fetch_add(1, Ordering::SeqCst);
            *self.value.lock().unwrap() = Some(raw.to_string());
            Ok(())
        }
    }
}
