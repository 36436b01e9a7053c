use dioxus::prelude::*;

use crate::icons::{FaFolder, FaGlobe, FaPalette};
use crate::{use_auth, Icon};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

#[component]
pub fn HomeView() -> Element {
    let auth = use_auth();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        section {
            class: "hero",
            h1 { class: "hero-title", "Showcase your work with a beautiful portfolio" }
            p {
                class: "hero-subtitle",
                "Create a professional portfolio in minutes. Add your projects, pick a template and share one link."
            }
            div {
                class: "hero-actions",
                if auth().is_signed_in() {
                    Link { class: "btn btn-primary", to: "/dashboard", "Go to dashboard" }
                } else {
                    Link { class: "btn btn-primary", to: "/sign-up", "Get started for free" }
                    Link { class: "btn btn-outline", to: "/sign-in", "Sign in" }
                }
            }
        }

        section {
            class: "features",
            div {
                class: "feature",
                Icon { icon: FaFolder, width: 24, height: 24 }
                h3 { "Projects front and centre" }
                p { "Describe what you built, the stack you used, and link to demos and source." }
            }
            div {
                class: "feature",
                Icon { icon: FaPalette, width: 24, height: 24 }
                h3 { "Templates" }
                p { "Choose a look that fits you and switch at any time." }
            }
            div {
                class: "feature",
                Icon { icon: FaGlobe, width: 24, height: 24 }
                h3 { "Share one link" }
                p { "Your public portfolio lives at its own URL, with an optional custom slug." }
            }
        }
    }
}
