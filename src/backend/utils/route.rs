//! Application routing table.

use crate::frontend::components::guard::ProtectedRoute;
use crate::frontend::components::navbar::Navbar;
use crate::frontend::pages::home::Home;
use crate::frontend::pages::login::Login;
use crate::frontend::pages::not_found::NotFound;
use crate::frontend::pages::profile::Profile;
use crate::frontend::pages::register::Register;

use dioxus::prelude::*;
use dioxus_router::Routable;

/// Main routing enum for the application.
#[derive(Clone, Routable, Debug, PartialEq, Eq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]
        /// Landing page.
        #[route("/")]
        Home {},
        /// Sign-in form, reachable without a token.
        #[route("/login")]
        Login {},
        /// Account creation form, reachable without a token.
        #[route("/register")]
        Register {},
        #[layout(ProtectedRoute)]
            /// Profile of the signed-in user.
            #[route("/profile")]
            Profile {},
        #[end_layout]
        /// Anything else.
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}
