use wasm_bindgen_futures::spawn_local;
use web_sys::console;

mod components;
mod config;
mod pages;
mod router;
mod state;
#[cfg(test)]
mod test_support;
mod utils;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    console::log_1(&"Starting Themeswitch Frontend: initializing runtime config".into());

    spawn_local(async move {
        config::init().await;
        console::log_1(&"Runtime config initialized".into());
        router::mount_app();
    });
}
