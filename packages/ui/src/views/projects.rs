use dioxus::prelude::*;
use store::{Loadable, Project};

use crate::components::{EmptyState, ErrorState, LoadingSpinner};
use crate::icons::{FaArrowUpRightFromSquare, FaFolder, FaGithub, FaPlus};
use crate::{use_loader, Icon};

#[component]
pub fn ProjectsView() -> Element {
    let projects = use_loader("Failed to load projects", || async {
        Loadable::from_list_result(api::list_projects().await)
    });

    let body = match projects() {
        Loadable::Loading => rsx! { LoadingSpinner {} },
        Loadable::Failed(_) => rsx! { ErrorState { message: "Failed to load projects" } },
        Loadable::Empty => rsx! {
            EmptyState {
                title: "No projects yet",
                description: "Start by creating your first project",
                Icon { icon: FaFolder, width: 48, height: 48 }
                Link {
                    class: "btn btn-primary",
                    to: "/dashboard/projects/new",
                    Icon { icon: FaPlus, width: 14, height: 14 }
                    " Create project"
                }
            }
        },
        Loadable::Loaded(list) => rsx! {
            div {
                class: "project-grid",
                for project in list {
                    ProjectCard { key: "{project.id}", project }
                }
            }
        },
    };

    rsx! {
        div {
            class: "view-page",
            div {
                class: "view-header",
                h1 { class: "view-title", "My projects" }
                Link {
                    class: "btn btn-primary",
                    to: "/dashboard/projects/new",
                    Icon { icon: FaPlus, width: 14, height: 14 }
                    " New project"
                }
            }
            {body}
        }
    }
}

#[component]
fn ProjectCard(project: Project) -> Element {
    rsx! {
        article {
            class: "project-card",
            if let Some(thumbnail) = project.thumbnail_url.as_deref() {
                img { class: "project-thumbnail", src: "{thumbnail}", alt: "{project.title}" }
            } else {
                div {
                    class: "project-thumbnail project-initial",
                    Icon { icon: FaFolder, width: 32, height: 32 }
                }
            }
            div {
                class: "project-card-body",
                div {
                    class: "project-card-heading",
                    h3 { "{project.title}" }
                    span { class: "status-badge status-{project.status.as_str()}", "{project.status}" }
                }
                if let Some(description) = project.description.as_deref() {
                    p { class: "view-muted line-clamp", "{description}" }
                }
                div {
                    class: "tag-list",
                    for tech in project.technologies.iter() {
                        span { class: "tag tag-small", "{tech}" }
                    }
                }
                div {
                    class: "project-card-footer",
                    Link { class: "view-link", to: "/dashboard/projects/{project.id}", "View details" }
                    div {
                        class: "project-links",
                        if let Some(demo) = project.demo_url.as_deref() {
                            a { href: "{demo}", target: "_blank", rel: "noopener noreferrer", title: "Live demo",
                                Icon { icon: FaArrowUpRightFromSquare, width: 16, height: 16 }
                            }
                        }
                        if let Some(repo) = project.repo_url.as_deref() {
                            a { href: "{repo}", target: "_blank", rel: "noopener noreferrer", title: "Repository",
                                Icon { icon: FaGithub, width: 16, height: 16 }
                            }
                        }
                    }
                }
            }
        }
    }
}
