//! Navigation bar.

use crate::backend::utils::route::Route;
use dioxus::prelude::*;
use dioxus_router::components::{Link, Outlet};

#[component]
pub fn Navbar() -> Element {
    rsx! {
        nav { class: "navbar",
            div { class: "navbar-inner",
                div {
                    Link { to: Route::Home {}, "Home" }
                    Link { to: Route::Profile {}, "Profile" }
                }
                div {
                    Link { to: Route::Login {}, "Login" }
                    Link { to: Route::Register {}, "Register" }
                }
            }
        }

        Outlet::<Route> {}
    }
}
