pub mod app;
pub mod shared;
pub mod usecases;

use wasm_bindgen::prelude::wasm_bindgen;

/// Console verbosity: request/response traces only in debug builds
fn console_level(debug_build: bool) -> log::Level {
    if debug_build {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

/// Wasm entry point: console logging, panic hook, then the chat page
#[wasm_bindgen(start)]
pub fn run() {
    if console_log::init_with_level(console_level(cfg!(debug_assertions))).is_err() {
        // a second init (e.g. hot reload) keeps the first logger
        log::debug!("console logger already installed");
    }
    console_error_panic_hook::set_once();

    log::info!(
        "{} {} mounting, backend at {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        shared::api_utils::api_base()
    );
    leptos::mount::mount_to_body(app::App);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_level() {
        assert_eq!(console_level(true), log::Level::Debug);
        assert_eq!(console_level(false), log::Level::Info);
    }
}
