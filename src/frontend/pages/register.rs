//! Registration page.

use crate::backend::api::RegisterRequest;
use crate::backend::utils::route::Route;
use crate::frontend::services::account;
use crate::frontend::services::context::{AuthState, use_auth};
use dioxus::prelude::*;
use dioxus_router::{components::Link, use_navigator};

#[component]
pub fn Register() -> Element {
    let nav = use_navigator();
    let auth = use_auth();
    let mut firstname = use_signal(String::new);
    let mut lastname = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let error = use_signal(|| None::<String>);
    let pending = use_signal(|| false);
    let configured = auth.backend.is_configured();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if pending() || !configured {
            return;
        }

        let AuthState { session, backend } = auth.clone();
        let request = RegisterRequest {
            firstname: firstname().trim().to_string(),
            lastname: lastname().trim().to_string(),
            email: email().trim().to_string(),
            password: password(),
        };
        let mut error = error;
        let mut pending = pending;

        error.set(None);
        pending.set(true);
        spawn(async move {
            match account::register(&session, &backend, request).await {
                Ok(next) => {
                    nav.replace(next);
                }
                Err(e) => {
                    log::warn!("Registration failed: {e}");
                    error.set(Some(e.to_string()));
                }
            }
            pending.set(false);
        });
    };

    let message = error().unwrap_or_default();

    rsx! {
        div { class: "page",
            div { class: "card",
                h1 { "Register" }
                if !configured {
                    p { class: "notice", "Registration is unavailable: no backend is configured." }
                }
                form { class: "form", onsubmit: on_submit,
                    input {
                        placeholder: "First name",
                        value: "{firstname}",
                        oninput: move |e| firstname.set(e.value()),
                    }
                    input {
                        placeholder: "Last name",
                        value: "{lastname}",
                        oninput: move |e| lastname.set(e.value()),
                    }
                    input {
                        r#type: "email",
                        placeholder: "Email",
                        value: "{email}",
                        oninput: move |e| email.set(e.value()),
                    }
                    input {
                        r#type: "password",
                        placeholder: "Password",
                        value: "{password}",
                        oninput: move |e| password.set(e.value()),
                    }
                    button {
                        class: "button",
                        r#type: "submit",
                        disabled: pending() || !configured,
                        if pending() { "Creating account..." } else { "Create account" }
                    }
                    div { class: "error-message", "{message}" }
                }
                p {
                    "Already registered? "
                    Link { to: Route::Login {}, "Login" }
                }
            }
        }
    }
}
