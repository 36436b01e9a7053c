use dioxus::prelude::*;

#[component]
pub fn NotFoundView() -> Element {
    rsx! {
        div {
            class: "not-found",
            h1 { class: "not-found-code", "404" }
            p { class: "not-found-message", "Page not found" }
            Link { class: "btn btn-primary", to: "/", "Go back home" }
        }
    }
}
