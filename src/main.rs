//! Quiz Form Frontend Entry Point

mod app;
mod bootstrap;
mod components;
mod config;
mod context;
mod error;
mod logger;
mod models;
mod naming;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = bootstrap::load_config();
    let level = config.as_ref().map(|c| c.level_filter()).unwrap_or(log::LevelFilter::Info);
    if logger::init(level).is_err() {
        web_sys::console::warn_1(&"[MAIN] logger already installed".into());
    }
    let config = config.unwrap_or_else(|e| {
        log::warn!("using default config: {}", e);
        config::FormConfig::default()
    });

    let initial = bootstrap::initial_state(&config);
    log::debug!("starting with {} questions", initial.questions.len());

    mount_to_body(move || view! { <App config=config initial=initial /> });
}
