//! Regalos Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod error;
mod form;
mod gift_list;
mod models;
mod storage;
mod store;

use app::App;
use config::Config;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(Config::default().log_level);
    log::debug!("[MAIN] Mounting app");
    mount_to_body(App);
}
