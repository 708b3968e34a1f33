pub mod components;
pub mod config;
pub mod motion;
pub mod pages;
#[cfg(not(target_arch = "wasm32"))]
pub mod prerender;
pub mod router;
pub mod state;
pub mod theme;
pub mod utils;

#[cfg(test)]
mod test_support;

pub use pages::hero::{HeroAction, HeroActions, HeroCopy, HeroGeometric, HomePage};

#[cfg(all(target_arch = "wasm32", debug_assertions))]
const LOG_LEVEL: log::Level = log::Level::Debug;
#[cfg(all(target_arch = "wasm32", not(debug_assertions)))]
const LOG_LEVEL: log::Level = log::Level::Info;

/// Browser entry: installs logging, loads runtime config and mounts the app.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn run() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(LOG_LEVEL).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }
    log::info!("Starting Kokonut hero frontend");

    let config = match config::init() {
        Ok(config) => config.clone(),
        Err(err) => {
            log::warn!("{err:#}; using defaults");
            config::runtime_config()
        }
    };
    router::mount_app(config);
}
