//! Application State Store
//!
//! Uses Leptos reactive_stores for field-level reactivity.

use reactive_stores::Store;

use crate::gift_list::GiftList;
use crate::storage::SharedStorage;

/// Application state; nothing here besides the gift list is persisted
#[derive(Clone, Debug, Store)]
pub struct AppState {
    /// Gift list, backed by localStorage in the browser
    pub gifts: GiftList<SharedStorage>,
    /// True while the "add gift" face of the card is showing
    pub flipped: bool,
}

impl AppState {
    /// Hydrate the gift list once at startup, list face showing
    pub fn load(storage: SharedStorage) -> Self {
        Self {
            gifts: GiftList::load(storage),
            flipped: false,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;
