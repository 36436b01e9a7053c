use dioxus::prelude::*;

#[component]
pub fn LoadingSpinner(#[props(default = "Loading...".to_string())] label: String) -> Element {
    rsx! {
        div {
            class: "loading",
            role: "status",
            div { class: "spinner" }
            span { class: "sr-only", "{label}" }
        }
    }
}

/// Centered message for lists and pages with nothing to show.
#[component]
pub fn EmptyState(title: String, #[props(default)] description: String, children: Element) -> Element {
    rsx! {
        div {
            class: "empty-state",
            h3 { "{title}" }
            if !description.is_empty() {
                p { class: "view-muted", "{description}" }
            }
            {children}
        }
    }
}

#[component]
pub fn ErrorState(message: String) -> Element {
    rsx! {
        div {
            class: "error-state",
            role: "alert",
            p { "{message}" }
        }
    }
}
