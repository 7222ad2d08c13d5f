//! Gift List View
//!
//! Front face of the card.

use leptos::prelude::*;

use crate::components::{Decoration, GiftRow, Scene};
use crate::context::AppContext;
use crate::models::Gift;

#[component]
pub fn GiftListView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="gift-box-front">
            <div class="face-header align-end">
                <Decoration scene=Scene::Christmas />
                <h1>"Regalos"</h1>
            </div>
            <button on:click=move |_| ctx.open_form()>"Agregar regalo"</button>

            <For
                each=move || ctx.gifts()
                key=|gift| gift.name.to_lowercase()
                children=move |gift: Gift| view! { <GiftRow gift=gift /> }
            />

            <Show
                when=move || !ctx.is_empty()
                fallback=|| view! { <h3>"No hay regalos, grinch."</h3> }
            >
                <button on:click=move |_| ctx.clear_gifts()>"Borrar todo"</button>
            </Show>
        </div>
    }
}
