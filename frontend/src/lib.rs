//! WASM entry point: hydrates the server-rendered portfolio page.
#![recursion_limit = "256"]

/// Browser log level: chatty in debug builds, warnings only in release.
#[must_use]
pub const fn console_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Warn
    }
}

#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    _ = console_log::init_with_level(console_level());
    console_error_panic_hook::set_once();
    log::debug!("Hydrating portfolio sections");

    leptos::mount::hydrate_body(app::component);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_level_follows_build() {
        let expected = if cfg!(debug_assertions) {
            log::Level::Debug
        } else {
            log::Level::Warn
        };
        assert_eq!(console_level(), expected);
        // May fail if a logger is already installed; it must not panic.
        let _ = console_log::init_with_level(console_level());
    }
}
