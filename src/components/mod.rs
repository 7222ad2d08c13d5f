//! UI Components
//!
//! Leptos components for the two faces of the gift card.

mod decoration;
mod gift_form;
mod gift_list_view;
mod gift_row;

pub use decoration::{Decoration, Scene};
pub use gift_form::GiftForm;
pub use gift_list_view::GiftListView;
pub use gift_row::GiftRow;
