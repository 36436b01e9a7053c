use dioxus::prelude::*;
use dioxus_primitives::label;

#[component]
pub fn Label(html_for: String, children: Element) -> Element {
    rsx! {
        label::Label { class: "label", html_for, {children} }
    }
}
