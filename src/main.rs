mod components;
mod config;
mod controller;
mod engine;
mod error;
mod loader;
mod model;
mod state;
mod util;

use components::App;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("logger init failed: {err}").into());
    }
    log::info!("image viewer starting");
    yew::Renderer::<App>::new().render();
}
