//! Regalos Frontend App
//!
//! Root component: a flip card with the gift list on the front and the
//! add form on the back.

use std::sync::Arc;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{GiftForm, GiftListView};
use crate::config::Config;
use crate::context::AppContext;
use crate::storage::LocalStorage;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let config = Config::default();

    // Hydrate once from localStorage
    let store = Store::new(AppState::load(Arc::new(LocalStorage::new(config.storage_key))));
    let ctx = AppContext::new(store);

    provide_context(config);
    provide_context(ctx);

    let card_class = move || {
        if ctx.is_form_open() {
            "flip gift-box-container"
        } else {
            "gift-box-container"
        }
    };

    view! {
        <div class="App">
            <div class="container">
                <div class=card_class>
                    <GiftListView />
                    <GiftForm />
                </div>
            </div>
        </div>
    }
}
