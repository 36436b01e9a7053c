use dioxus::prelude::*;

#[component]
pub fn Dashboard() -> Element {
    rsx! { ui::views::DashboardView {} }
}

#[component]
pub fn Profile() -> Element {
    rsx! { ui::views::ProfileEditorView {} }
}

#[component]
pub fn Projects() -> Element {
    rsx! { ui::views::ProjectsView {} }
}

#[component]
pub fn Templates() -> Element {
    rsx! { ui::views::TemplateGalleryView {} }
}
