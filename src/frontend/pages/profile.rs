//! Profile page.

use crate::backend::api::User;
use crate::frontend::services::context::{AuthState, use_auth};
use crate::frontend::services::profile::{ProfileOutcome, load_profile};
use dioxus::prelude::*;
use dioxus_router::use_navigator;

#[component]
pub fn Profile() -> Element {
    let nav = use_navigator();
    let auth = use_auth();
    let user = use_signal(|| None::<User>);

    // Fetch on mount; the guard already ran, but a token may vanish in between
    use_effect({
        let auth = auth.clone();
        move || {
            let AuthState { session, backend } = auth.clone();
            let mut user = user;
            spawn(async move {
                match load_profile(&session, &backend).await {
                    ProfileOutcome::Loaded(profile) => user.set(Some(profile)),
                    ProfileOutcome::Placeholder => {}
                    ProfileOutcome::Redirect(target) => {
                        nav.replace(target);
                    }
                }
            });
        }
    });

    let on_logout = {
        let session = auth.session.clone();
        move |_: MouseEvent| {
            let next = session.logout();
            nav.replace(next);
        }
    };

    let details = match user() {
        Some(user) => {
            let role = user.role();
            rsx! {
                p { strong { "First Name: " } "{user.firstname}" }
                p { strong { "Last Name: " } "{user.lastname}" }
                p { strong { "Email: " } "{user.email}" }
                p { strong { "Role: " } "{role}" }
            }
        }
        None => rsx! {
            p { class: "placeholder", "Profile details are not available yet." }
        },
    };

    rsx! {
        div { class: "page",
            div { class: "card",
                h1 { "Profile" }
                {details}
                button {
                    class: "button button-danger",
                    onclick: on_logout,
                    "Logout"
                }
            }
        }
    }
}
