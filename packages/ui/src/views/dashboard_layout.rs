use dioxus::prelude::*;

use crate::{apply_theme, DashboardSidebar, RequireAuth};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Shell for every `/dashboard` page: the sign-in guard, the sidebar and the
/// user's saved theme.
#[component]
pub fn DashboardLayoutView(path: String, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        RequireAuth {
            path: path.clone(),
            ThemeFromSettings {}
            div {
                class: "dashboard-layout",
                DashboardSidebar { current: path }
                main { class: "dashboard-content", {children} }
            }
        }
    }
}

#[component]
fn ThemeFromSettings() -> Element {
    let _ = use_resource(|| async move {
        match api::get_settings().await {
            Ok(settings) => apply_theme(settings.theme_preference),
            Err(e) => tracing::warn!("Could not load theme preference: {e}"),
        }
    });

    rsx! {}
}
