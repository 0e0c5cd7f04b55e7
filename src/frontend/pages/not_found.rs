use crate::backend::utils::route::Route;
use dioxus::prelude::*;
use dioxus_router::components::Link;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        div { class: "page",
            div { class: "card",
                h1 { "Page not found" }
                p { class: "placeholder", "Nothing lives at {path}." }
                Link { to: Route::Home {}, "Back to Home" }
            }
        }
    }
}
