use dioxus::prelude::*;

#[component]
pub fn NewProject() -> Element {
    rsx! { ui::views::ProjectEditorView {} }
}

#[component]
pub fn ProjectDetails(project_id: String) -> Element {
    rsx! { ui::views::ProjectDetailsView { project_id } }
}

#[component]
pub fn EditProject(project_id: String) -> Element {
    rsx! { ui::views::ProjectEditorView { project_id } }
}
