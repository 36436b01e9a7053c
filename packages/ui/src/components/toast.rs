use dioxus::prelude::*;
use dioxus_primitives::toast;

pub use dioxus_primitives::toast::{use_toast, ToastOptions};

/// Hosts the transient toast stack for everything below it.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    rsx! {
        toast::ToastProvider { {children} }
    }
}
