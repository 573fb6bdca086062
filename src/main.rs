//! TaskMaster Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod controller;
mod models;
mod stats;
mod store;

use leptos::prelude::*;
use log::LevelFilter;

use api::HttpApi;
use app::App;
use config::AppConfig;
use controller::PageController;

/// Log lines kept in memory for the session
const LOG_CAPACITY: usize = 256;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info };
    if let Err(err) = session_logger::init(level, LOG_CAPACITY) {
        web_sys::console::error_1(&format!("[MAIN] Logger init failed: {}", err).into());
    }

    let config = AppConfig::load();
    let controller = PageController::new(HttpApi::new(config.api.clone()), config);

    mount_to_body(move || view! { <App controller=controller /> });
}
