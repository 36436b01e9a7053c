use dioxus::prelude::*;

use crate::Route;

/// Navbar and footer around the public pages.
#[component]
pub fn SiteLayout() -> Element {
    rsx! {
        div {
            class: "site",
            ui::Navbar {}
            main { class: "site-main", Outlet::<Route> {} }
            ui::Footer {}
        }
    }
}
