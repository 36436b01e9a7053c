use dioxus::prelude::*;
use store::{Loadable, Project};

use crate::components::LoadingSpinner;
use crate::format::format_day;
use crate::icons::{FaArrowLeft, FaPen};
use crate::{use_loader, Icon};

#[component]
pub fn ProjectDetailsView(project_id: String) -> Element {
    let mut id = use_signal(|| project_id.clone());
    if *id.peek() != project_id {
        id.set(project_id.clone());
    }

    let project = use_loader("Failed to load project", move || {
        let id = id();
        async move { Loadable::from_optional_result(api::get_project(id).await) }
    });

    let body = match project() {
        Loadable::Loading => rsx! { LoadingSpinner {} },
        Loadable::Failed(reason) => rsx! {
            div {
                class: "error-state",
                h2 { "Error" }
                p { class: "view-muted", "{reason}" }
            }
        },
        Loadable::Empty => rsx! {
            div {
                class: "empty-state",
                h2 { "Project Not Found" }
                p { class: "view-muted", "The requested project could not be found." }
            }
        },
        Loadable::Loaded(project) => rsx! { ProjectDetails { project } },
    };

    rsx! {
        div {
            class: "view-page",
            Link {
                class: "view-link",
                to: "/dashboard/projects",
                Icon { icon: FaArrowLeft, width: 12, height: 12 }
                " All projects"
            }
            {body}
        }
    }
}

#[component]
fn ProjectDetails(project: Project) -> Element {
    rsx! {
        article {
            class: "card project-details",
            div {
                class: "view-header",
                div {
                    h1 { class: "view-title", "{project.title}" }
                    p {
                        class: "view-muted",
                        span { class: "status-badge status-{project.status.as_str()}", "{project.status}" }
                        if !project.is_public {
                            span { class: "status-badge", "Private" }
                        }
                        if let Some(updated) = project.updated_at.as_deref() {
                            " Updated {format_day(updated)}"
                        }
                    }
                }
                Link {
                    class: "btn btn-outline",
                    to: "/dashboard/projects/{project.id}/edit",
                    Icon { icon: FaPen, width: 12, height: 12 }
                    " Edit"
                }
            }

            if let Some(description) = project.description.as_deref() {
                p { class: "project-description", "{description}" }
            }
            if let Some(thumbnail) = project.thumbnail_url.as_deref() {
                img { class: "project-hero", src: "{thumbnail}", alt: "{project.title}" }
            }

            div {
                class: "project-details-grid",
                if !project.technologies.is_empty() {
                    div {
                        h3 { "Technologies" }
                        div {
                            class: "tag-list",
                            for tech in project.technologies.iter() {
                                span { class: "tag", "{tech}" }
                            }
                        }
                    }
                }
                div {
                    class: "project-actions",
                    if let Some(demo) = project.demo_url.as_deref() {
                        a { class: "btn btn-primary", href: "{demo}", target: "_blank", rel: "noopener noreferrer", "View demo" }
                    }
                    if let Some(repo) = project.repo_url.as_deref() {
                        a { class: "btn btn-outline", href: "{repo}", target: "_blank", rel: "noopener noreferrer", "View repository" }
                    }
                }
            }

            if !project.screenshots.is_empty() {
                section {
                    h3 { "Screenshots" }
                    div {
                        class: "screenshot-grid",
                        for (index, screenshot) in project.screenshots.iter().enumerate() {
                            img { key: "{index}", src: "{screenshot}", alt: format!("Screenshot {}", index + 1) }
                        }
                    }
                }
            }
        }
    }
}
