//! Browser entry point, built by trunk.

use googlia_frontend::{pipeline_config, App, APP_NAME};
use leptos::*;

pub fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    let config = pipeline_config();
    log::info!("🤖 {} - Starting Leptos App", APP_NAME);
    log::debug!(
        "Processing delay {:?}..{:?}, upload limit {:?} bytes",
        config.min_delay,
        config.max_delay,
        config.max_file_size
    );

    mount_to_body(|| view! { <App/> })
}
