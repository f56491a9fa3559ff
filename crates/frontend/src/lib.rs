pub mod app;
pub mod dashboards;
pub mod domain;
pub mod layout;
pub mod shared;
pub mod usecases;

use leptos::prelude::*;
use leptos::task::spawn_local;
use shared::config::{load_config, AppConfig};
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    spawn_local(async {
        let config = match load_config().await {
            Ok(config) => config,
            Err(e) => {
                log::error!("configuration rejected, using defaults: {:#}", e);
                AppConfig::default()
            }
        };
        leptos::mount::mount_to_body(move || view! { <app::App config=config /> });
    });
}
