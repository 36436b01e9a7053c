use dioxus::prelude::*;
use store::{ListEdit, Loadable, Project, ProjectField, ProjectStatus};

use super::list_editor::StringListEditor;
use crate::components::{
    Button, EmptyState, ErrorState, Input, Label, LoadingSpinner, Textarea, ToastOptions, Toggle, use_toast,
};
use crate::{use_auth, use_loader};

/// Create (`project_id == None`) or edit a project.
#[component]
pub fn ProjectEditorView(project_id: Option<String>) -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let toast = use_toast();

    let mut id = use_signal(|| project_id.clone());
    if *id.peek() != project_id {
        id.set(project_id.clone());
    }

    let loaded = use_loader("Failed to load project", move || {
        let id = id();
        let owner = auth().user.map(|u| u.id).unwrap_or_default();
        async move {
            match id {
                Some(id) => Loadable::from_optional_result(api::get_project(id).await),
                // The server assigns the id on first save.
                None => Loadable::Loaded(Project::new(String::new(), owner)),
            }
        }
    });

    let mut draft = use_signal(|| None::<Project>);
    let mut saving = use_signal(|| false);

    use_effect(move || {
        if let Loadable::Loaded(project) = loaded() {
            draft.set(Some(project));
        }
    });

    let mut edit = move |f: &dyn Fn(&mut Project)| {
        if let Some(project) = draft.write().as_mut() {
            f(project);
        }
    };

    let handle_save = move |_| {
        let Some(project) = draft() else {
            return;
        };
        if project.title.trim().is_empty() {
            toast.error("Project title is required".to_string(), ToastOptions::new());
            return;
        }
        spawn(async move {
            saving.set(true);
            match api::save_project(project).await {
                Ok(saved) => {
                    toast.success("Project saved successfully".to_string(), ToastOptions::new());
                    nav.push(format!("/dashboard/projects/{}", saved.id));
                }
                Err(e) => {
                    tracing::error!("Failed to save project: {e}");
                    toast.error("Failed to save project".to_string(), ToastOptions::new());
                }
            }
            saving.set(false);
        });
    };

    let is_new = project_id.is_none();
    let cancel_to = match &project_id {
        Some(id) => format!("/dashboard/projects/{id}"),
        None => "/dashboard/projects".to_string(),
    };

    let Some(project) = draft() else {
        return match loaded() {
            Loadable::Failed(_) => rsx! { ErrorState { message: "Failed to load project" } },
            Loadable::Empty => rsx! {
                EmptyState {
                    title: "Project Not Found",
                    description: "The requested project could not be found.",
                }
            },
            _ => rsx! { LoadingSpinner {} },
        };
    };

    rsx! {
        div {
            class: "view-page",
            div {
                class: "view-header",
                h1 { class: "view-title", if is_new { "New project" } else { "Edit project" } }
                div {
                    class: "view-actions",
                    Link { class: "btn btn-ghost", to: cancel_to, "Cancel" }
                    Button {
                        disabled: saving(),
                        onclick: handle_save,
                        if saving() { "Saving..." } else { "Save project" }
                    }
                }
            }

            section {
                class: "card",
                div {
                    class: "form-field",
                    Label { html_for: "title", "Title" }
                    Input {
                        id: "title",
                        value: project.title.clone(),
                        placeholder: "My awesome project",
                        oninput: move |e: FormEvent| edit(&|p| p.set_field(ProjectField::Title(e.value()))),
                    }
                }
                div {
                    class: "form-field",
                    Label { html_for: "description", "Description" }
                    Textarea {
                        id: "description",
                        value: project.description.clone().unwrap_or_default(),
                        oninput: move |e: FormEvent| edit(&|p| p.set_field(ProjectField::Description(e.value()))),
                    }
                }
                div {
                    class: "form-field",
                    Label { html_for: "status", "Status" }
                    select {
                        id: "status",
                        class: "form-input",
                        value: "{project.status.as_str()}",
                        onchange: move |e: FormEvent| {
                            let status = ProjectStatus::parse(&e.value());
                            edit(&|p| p.set_field(ProjectField::Status(status)));
                        },
                        for status in ProjectStatus::ALL {
                            option {
                                value: "{status.as_str()}",
                                selected: status == project.status,
                                "{status}"
                            }
                        }
                    }
                }
                Toggle {
                    id: "is_public",
                    label: "Show on my public portfolio",
                    checked: project.is_public,
                    onchange: move |checked: bool| edit(&|p| p.set_field(ProjectField::IsPublic(checked))),
                }
            }

            section {
                class: "card",
                h2 { class: "card-title", "Links" }
                div {
                    class: "form-field",
                    Label { html_for: "thumbnail_url", "Thumbnail URL" }
                    Input {
                        id: "thumbnail_url",
                        value: project.thumbnail_url.clone().unwrap_or_default(),
                        placeholder: "https://",
                        oninput: move |e: FormEvent| edit(&|p| p.set_field(ProjectField::ThumbnailUrl(e.value()))),
                    }
                }
                div {
                    class: "form-field",
                    Label { html_for: "demo_url", "Demo URL" }
                    Input {
                        id: "demo_url",
                        value: project.demo_url.clone().unwrap_or_default(),
                        placeholder: "https://",
                        oninput: move |e: FormEvent| edit(&|p| p.set_field(ProjectField::DemoUrl(e.value()))),
                    }
                }
                div {
                    class: "form-field",
                    Label { html_for: "repo_url", "Repository URL" }
                    Input {
                        id: "repo_url",
                        value: project.repo_url.clone().unwrap_or_default(),
                        placeholder: "https://github.com/...",
                        oninput: move |e: FormEvent| edit(&|p| p.set_field(ProjectField::RepoUrl(e.value()))),
                    }
                }
            }

            section {
                class: "card",
                h2 { class: "card-title", "Technologies" }
                StringListEditor {
                    id: "technology",
                    items: project.technologies.clone(),
                    placeholder: "e.g. Dioxus",
                    add_label: "Add technology",
                    on_edit: move |change: ListEdit<String>| edit(&|p| {
                        p.edit_technologies(change.clone());
                    }),
                }
            }

            section {
                class: "card",
                h2 { class: "card-title", "Screenshots" }
                StringListEditor {
                    id: "screenshot",
                    items: project.screenshots.clone(),
                    placeholder: "https://",
                    add_label: "Add screenshot",
                    on_edit: move |change: ListEdit<String>| edit(&|p| {
                        p.edit_screenshots(change.clone());
                    }),
                }
            }
        }
    }
}
