pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_support;

/// Boots the client: panic hook, console logging, runtime config, then the route shell.
pub fn run() {
    console_error_panic_hook::set_once();
    #[cfg(target_arch = "wasm32")]
    {
        let level = config::parse_log_level(config::initial_config().log_level.as_deref());
        if console_log::init_with_level(level).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }
        log::info!("Starting HR Portal frontend");
        wasm_bindgen_futures::spawn_local(config::init());
    }
    router::mount_app();
}
