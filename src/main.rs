mod backend;
mod frontend;
mod utils;

use crate::backend::utils::config::{self, API_URL_ENV, AppConfig};
use crate::backend::utils::css_loader::ensure_css_loaded;
use crate::backend::utils::paths::app_dir_or_local;
use crate::frontend::app::App;
use dioxus::LaunchBuilder;
use dioxus_desktop::{Config, LogicalSize, WindowBuilder};

fn main() {
    // Logging setup
    utils::logging::init_from_env();

    let app_dir = app_dir_or_local();
    let app_config = match AppConfig::load_or_create(&app_dir) {
        Ok(app_config) => {
            log::info!("Loaded config from {}", app_dir.display());
            app_config
        }
        Err(e) => {
            log::error!("Failed to load config from {}: {e}, using defaults", app_dir.display());
            AppConfig::default()
        }
    };
    let app_config = app_config.with_api_override(std::env::var(API_URL_ENV).ok());

    if app_config.api.base_url.is_none() {
        log::info!("No backend configured, running offline");
    }

    let size = LogicalSize::new(app_config.window.width, app_config.window.height);
    let desktop_config = Config::default()
        .with_window(
            WindowBuilder::new()
                .with_title(app_config.window.title.clone())
                .with_inner_size(size)
                .with_min_inner_size(LogicalSize::new(480.0, 480.0)),
        )
        .with_menu(None);

    config::init(app_config);
    ensure_css_loaded();

    LaunchBuilder::new().with_cfg(desktop_config).launch(App);
}
