//! Todo List Frontend Entry Point

mod app;
mod components;
mod context;
mod mount;
mod store;

use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = rolling_logger::init(LevelFilter::Debug, rolling_logger::DEFAULT_CAPACITY) {
        web_sys::console::error_1(&format!("logger init failed: {}", err).into());
    }

    // A missing container leaves the page inert
    match mount::find_container(mount::CONTAINER_ID) {
        Ok(container) => mount::start(container),
        Err(err) => log::error!("[MAIN] {}", err),
    }
}
