use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "page",
            h1 { "Home" }
        }
    }
}
