use leptos::*;
use web_sys::console;

pub mod config;
pub mod error;
mod pages;
mod state;
#[cfg(test)]
mod test_support;
pub mod utils;

use pages::login::LoginPage;

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let (cfg, config_error) = match config::init() {
        Ok(cfg) => (cfg, None),
        Err(err) => (config::runtime_config(), Some(err)),
    };
    if console_log::init_with_level(cfg.log_level()).is_err() {
        console::log_1(&"Logger already initialized".into());
    }
    if let Some(err) = config_error {
        log::warn!("ignoring runtime config: {}", err);
    }
    log::info!("Starting userinfo frontend (wasm)");

    mount_to_body(|| view! { <LoginPage/> });
}
