use dioxus::prelude::*;

use crate::auth::{use_auth, SignOutButton};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Top bar of the public pages.
#[component]
pub fn Navbar() -> Element {
    let auth = use_auth();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        header {
            class: "navbar",
            Link { class: "navbar-brand", to: "/", "Spotlight" }
            nav {
                class: "navbar-actions",
                if auth().is_signed_in() {
                    Link { class: "btn btn-ghost", to: "/dashboard", "Dashboard" }
                    SignOutButton { class: "btn btn-outline" }
                } else if !auth().loading {
                    Link { class: "btn btn-ghost", to: "/sign-in", "Sign in" }
                    Link { class: "btn btn-primary", to: "/sign-up", "Get started" }
                }
            }
        }
    }
}
