//! Gift Form Component
//!
//! Back face of the card: name, image URL and quantity inputs.
//! Enter walks through the fields; see `FormCoordinator`.

use leptos::html;
use leptos::prelude::*;

use crate::components::{Decoration, Scene};
use crate::context::AppContext;
use crate::form::{parse_quantity, FormCoordinator, FormField, FormStep};

#[component]
pub fn GiftForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (name, set_name) = signal(String::new());
    let (url, set_url) = signal(String::new());
    let (quantity, set_quantity) = signal(String::new());
    let coordinator = RwSignal::new(FormCoordinator::default());

    let name_ref = NodeRef::<html::Input>::new();
    let url_ref = NodeRef::<html::Input>::new();
    let quantity_ref = NodeRef::<html::Input>::new();

    let focus_field = move |field: FormField| {
        let input = match field {
            FormField::Name => name_ref.get_untracked(),
            FormField::ImageUrl => url_ref.get_untracked(),
            FormField::Quantity => quantity_ref.get_untracked(),
        };
        if let Some(input) = input {
            let _ = input.focus();
        }
        coordinator.update(|c| c.focus(field));
    };

    // Reset focus order whenever the form face is shown
    Effect::new(move |_| {
        if ctx.is_form_open() {
            coordinator.update(|c| c.reset());
            if let Some(input) = name_ref.get() {
                let _ = input.focus();
            }
        }
    });

    let submit = move || {
        let qty = parse_quantity(&quantity.get_untracked()).unwrap_or(0);
        // Rejected input keeps the form open with no message
        if ctx
            .add_gift(&name.get_untracked(), &url.get_untracked(), qty)
            .is_ok()
        {
            set_name.set(String::new());
            set_url.set(String::new());
            set_quantity.set(String::new());
            focus_field(FormField::Name);
        }
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() != "Enter" {
            return;
        }
        ev.prevent_default();
        let mut state = coordinator.get_untracked();
        let value = match state.focused() {
            FormField::Name => name.get_untracked(),
            FormField::ImageUrl => url.get_untracked(),
            FormField::Quantity => quantity.get_untracked(),
        };
        let step = ctx.with_gift_list(|list| state.commit(&value, list));
        coordinator.set(state);

        match step {
            FormStep::Focus(next) => focus_field(next),
            FormStep::Stay => {}
            FormStep::Submit => submit(),
        }
    };

    view! {
        <div class="gift-box-back">
            <div class="face-header align-start">
                <h1>"Agregar regalo"</h1>
                <Decoration scene=Scene::Santa />
            </div>
            <form on:submit=move |ev: web_sys::SubmitEvent| {
                ev.prevent_default();
                submit();
            }>
                <div class="form">
                    <input
                        node_ref=name_ref
                        name="gift"
                        autocomplete="off"
                        placeholder="Regalo"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                        on:focus=move |_| coordinator.update(|c| c.focus(FormField::Name))
                        on:keydown=on_keydown
                    />
                    <input
                        node_ref=url_ref
                        name="url"
                        autocomplete="off"
                        placeholder="https://imagen.jpg"
                        prop:value=move || url.get()
                        on:input=move |ev| set_url.set(event_target_value(&ev))
                        on:focus=move |_| coordinator.update(|c| c.focus(FormField::ImageUrl))
                        on:keydown=on_keydown
                    />
                    <input
                        node_ref=quantity_ref
                        name="quantity"
                        type="number"
                        min="1"
                        placeholder="Cant."
                        prop:value=move || quantity.get()
                        on:input=move |ev| set_quantity.set(event_target_value(&ev))
                        on:focus=move |_| coordinator.update(|c| c.focus(FormField::Quantity))
                        on:keydown=on_keydown
                    />
                    <button type="submit">"Agregar"</button>
                    <button type="button" on:click=move |_| ctx.close_form()>"Cerrar"</button>
                </div>
            </form>
        </div>
    }
}
