//! Gift Row Component
//!
//! One entry in the list face: thumbnail, label and remove button.

use leptos::prelude::*;

use crate::config::Config;
use crate::context::AppContext;
use crate::models::Gift;

#[component]
pub fn GiftRow(gift: Gift) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let config = expect_context::<Config>();

    let image = config.image_for(&gift.image_url).to_string();
    let label = gift.label();
    let name = gift.name;

    // Rows are keyed by name, so look up the current position on click
    let remove = move |_| {
        if let Some(index) = ctx.index_of(&name) {
            ctx.remove_gift(index);
        }
    };

    view! {
        <div class="gift-container">
            <div class="vertical-center">
                <img class="gift-thumb" src=image alt="" />
                <p class="gift-label">{label}</p>
            </div>
            <button on:click=remove>"X"</button>
        </div>
    }
}
