pub mod components;
pub mod config;
mod pages;
mod router;
pub mod state;
#[cfg(test)]
mod test_support;
pub mod utils;

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    web_sys::console::log_1(&"Starting Themeswitch Frontend (wasm)".into());

    // Resolve runtime config (window globals, then ./config.json) before the
    // controller mounts and reads its element ids.
    leptos::spawn_local(async move {
        config::init().await;
        web_sys::console::log_1(&"Runtime config initialized".into());
        router::mount_app();
    });
}
