use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
fn current_year() -> Option<u32> {
    Some(js_sys::Date::new_0().get_full_year())
}

#[cfg(not(target_arch = "wasm32"))]
fn current_year() -> Option<u32> {
    None
}

#[component]
pub fn Footer() -> Element {
    let copyright = match current_year() {
        Some(year) => format!("\u{00A9} {year} Spotlight. All rights reserved."),
        None => "\u{00A9} Spotlight. All rights reserved.".to_string(),
    };

    rsx! {
        footer {
            class: "footer",
            div {
                class: "footer-inner",
                div {
                    span { class: "footer-brand", "Spotlight" }
                    p { class: "view-muted", "Showcase your work with a beautiful portfolio." }
                }
                nav {
                    class: "footer-links",
                    Link { to: "/", "Home" }
                    Link { to: "/sign-up", "Create a portfolio" }
                    Link { to: "/dashboard", "Dashboard" }
                }
            }
            p { class: "footer-copyright", "{copyright}" }
        }
    }
}
