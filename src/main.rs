#![allow(warnings)]
//! Movie Fight Frontend Entry Point

mod app;
mod autocomplete;
mod comparison;
mod components;
mod config;
mod context;
mod debounce;
mod dom;
mod error;
mod listeners;
mod logging;
mod models;
mod movie_search;
mod omdb;
mod runtime;
mod stats;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    // Default level until the page config has been read
    logging::init(log::LevelFilter::Info);
    let config = AppConfig::load();
    logging::init(config.log_level());
    log::info!(target: "app", "starting, debounce {}ms", config.debounce_ms);

    mount_to_body(move || view! { <App config=config /> });
}
