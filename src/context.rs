//! Application Context
//!
//! Shared handle provided via Leptos Context API. Every mutation goes
//! through here and writes the store, which is what re-renders the views.

use leptos::prelude::*;

use crate::error::Result;
use crate::gift_list::GiftList;
use crate::models::Gift;
use crate::storage::SharedStorage;
use crate::store::{AppStore, AppStateStoreFields};

#[derive(Clone, Copy)]
pub struct AppContext {
    store: AppStore,
}

impl AppContext {
    pub fn new(store: AppStore) -> Self {
        Self { store }
    }

    /// Current gifts (tracked)
    pub fn gifts(&self) -> Vec<Gift> {
        self.store.gifts().read().gifts().to_vec()
    }

    /// Whether the list is empty (tracked)
    pub fn is_empty(&self) -> bool {
        self.store.gifts().read().is_empty()
    }

    /// Run `f` against the list without subscribing
    pub fn with_gift_list<R>(&self, f: impl FnOnce(&GiftList<SharedStorage>) -> R) -> R {
        let list = self.store.gifts().read_untracked();
        f(&*list)
    }

    /// Position of the gift called `name`, ignoring case
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.with_gift_list(|list| list.gifts().iter().position(|g| g.same_name(name)))
    }

    pub fn is_form_open(&self) -> bool {
        self.store.flipped().get()
    }

    pub fn open_form(&self) {
        self.store.flipped().set(true);
    }

    pub fn close_form(&self) {
        self.store.flipped().set(false);
    }

    /// Add a gift; on success flip back to the list face.
    /// Validation failures are returned for the caller to ignore.
    pub fn add_gift(&self, name: &str, image_url: &str, quantity: i64) -> Result<()> {
        let result = self.store.gifts().write().add(name, image_url, quantity);
        match &result {
            Ok(()) => {
                log::info!("[APP] Added gift '{}' x{}", name.trim(), quantity);
                self.close_form();
            }
            Err(e) if e.is_validation() => log::debug!("[APP] Rejected gift: {}", e),
            Err(e) => log::warn!("[APP] Add failed: {}", e),
        }
        result
    }

    pub fn remove_gift(&self, index: usize) {
        match self.store.gifts().write().remove(index) {
            Ok(gift) => log::info!("[APP] Removed gift '{}'", gift.name),
            Err(e) => log::warn!("[APP] Remove failed: {}", e),
        }
    }

    pub fn clear_gifts(&self) {
        self.store.gifts().write().clear();
        log::info!("[APP] Cleared all gifts");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use crate::store::AppState;
    use reactive_stores::Store;
    use std::sync::Arc;

    fn context_with(storage: &Arc<MemoryStorage>) -> AppContext {
        let owner = Owner::new();
        owner.set();
        // Keep the reactive owner alive for the rest of the test
        std::mem::forget(owner);
        AppContext::new(Store::new(AppState::load(storage.clone())))
    }

    #[test]
    fn test_valid_add_returns_to_list_face() {
        let storage = Arc::new(MemoryStorage::default());
        let ctx = context_with(&storage);

        ctx.open_form();
        assert!(ctx.is_form_open());
        ctx.add_gift("Bicicleta", "", 1).unwrap();

        assert!(!ctx.is_form_open());
        assert_eq!(ctx.gifts(), vec![Gift::new("Bicicleta", "", 1)]);
        assert_eq!(
            storage.value().as_deref(),
            Some(r#"[{"gift":"Bicicleta","url":"","quantity":1}]"#)
        );
    }

    #[test]
    fn test_rejected_add_keeps_form_open() {
        let storage = Arc::new(MemoryStorage::default());
        let ctx = context_with(&storage);
        ctx.add_gift("Bicicleta", "", 1).unwrap();

        ctx.open_form();
        assert!(ctx.add_gift("bicicleta", "x.jpg", 3).is_err());
        assert!(ctx.add_gift("Pelota", "", 0).is_err());

        assert!(ctx.is_form_open());
        assert_eq!(ctx.gifts(), vec![Gift::new("Bicicleta", "", 1)]);
    }

    #[test]
    fn test_remove_and_clear_write_through() {
        let storage = Arc::new(MemoryStorage::default());
        let ctx = context_with(&storage);
        for name in ["a", "b", "c"] {
            ctx.add_gift(name, "", 1).unwrap();
        }

        ctx.remove_gift(ctx.index_of("B").unwrap());
        assert_eq!(ctx.index_of("b"), None);
        assert_eq!(ctx.gifts().len(), 2);

        ctx.clear_gifts();
        assert!(ctx.is_empty());
        assert_eq!(storage.value().as_deref(), Some("[]"));
    }
}
