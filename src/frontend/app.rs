//! Application shell.

use crate::backend::utils::config;
use crate::backend::utils::css_loader::CssLoader;
use crate::backend::utils::paths::app_dir_or_local;
use crate::backend::utils::route::Route;
use crate::frontend::services::context::AuthState;
use dioxus::prelude::*;
use dioxus_router::Router;

#[component]
pub fn App() -> Element {
    use_context_provider(|| AuthState::from_config(config::get(), &app_dir_or_local()));

    rsx! {
        style { dangerous_inner_html: CssLoader::get_main() }
        Router::<Route> {}
    }
}
