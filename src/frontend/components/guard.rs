//! Credential guard for protected routes.

use crate::backend::utils::route::Route;
use crate::frontend::services::context::use_session;
use dioxus::prelude::*;
use dioxus_router::{components::Outlet, navigator};

/// Renders the nested route when a token is stored, otherwise redirects to login.
#[component]
pub fn ProtectedRoute() -> Element {
    let nav = navigator();
    let access = use_session().access();

    if let Some(target) = access.redirect() {
        log::debug!("No stored credentials, redirecting to {target}");
        nav.replace(target);
        return rsx! { div {} };
    }

    rsx! { Outlet::<Route> {} }
}
