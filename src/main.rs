//! Project Tracker Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod storage;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::default();
    if let Err(e) = console_log::init_with_level(config.log_level) {
        web_sys::console::warn_1(&format!("[APP] Logger init failed: {}", e).into());
    }

    mount_to_body(move || view! { <App config=config /> });
}
