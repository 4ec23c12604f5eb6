use leptos::mount::mount_to_body;
use leptos::prelude::*;

use tekstra_ui::config::SiteConfig;
use tekstra_ui::logging::setup_logging;
use tekstra_ui::App;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match SiteConfig::load() {
        Ok(config) => (config, None),
        Err(err) => (SiteConfig::default(), Some(err)),
    };

    if let Err(err) = setup_logging(config.log_level()) {
        web_sys::console::warn_1(&format!("Failed to set up logging: {err}").into());
    }
    if let Some(err) = config_error {
        log::warn!("Falling back to default configuration: {err}");
    }

    mount_to_body(move || view! { <App config=config /> });
}
