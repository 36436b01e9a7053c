use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn DashboardShell() -> Element {
    let route = use_route::<Route>();

    rsx! {
        ui::views::DashboardLayoutView {
            path: route.to_string(),
            Outlet::<Route> {}
        }
    }
}
