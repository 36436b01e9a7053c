use dioxus::prelude::*;
use store::{DashboardStats, Loadable, Project};

use crate::components::{EmptyState, ErrorState, LoadingSpinner};
use crate::format::format_day;
use crate::icons::{FaCircleCheck, FaFolder, FaPlus, FaUser};
use crate::{use_auth, use_loader, Icon};

async fn load_stats() -> Loadable<DashboardStats> {
    let profile = match api::get_profile().await {
        Ok(profile) => profile,
        Err(e) => return Loadable::Failed(e.to_string()),
    };
    match api::list_projects().await {
        Ok(projects) => Loadable::Loaded(DashboardStats::compute(profile.as_ref(), &projects)),
        Err(e) => Loadable::Failed(e.to_string()),
    }
}

#[component]
pub fn DashboardView() -> Element {
    let auth = use_auth();
    let stats = use_loader("Failed to load dashboard data", load_stats);

    let greeting = auth()
        .user
        .map(|u| format!("Welcome back, {}", u.display_name()))
        .unwrap_or_else(|| "Welcome back".to_string());

    let body = match stats() {
        Loadable::Loading => rsx! { LoadingSpinner {} },
        Loadable::Failed(_) => rsx! { ErrorState { message: "Failed to load dashboard data" } },
        Loadable::Empty => rsx! {},
        Loadable::Loaded(stats) => rsx! {
            div {
                class: "stat-grid",
                StatCard { label: "Total projects", value: "{stats.total_projects}",
                    Icon { icon: FaFolder, width: 18, height: 18 }
                }
                StatCard { label: "Active", value: "{stats.active_projects}",
                    Icon { icon: FaFolder, width: 18, height: 18 }
                }
                StatCard { label: "Completed", value: "{stats.completed_projects}",
                    Icon { icon: FaCircleCheck, width: 18, height: 18 }
                }
                StatCard { label: "Profile completion", value: "{stats.profile_completion}%",
                    Icon { icon: FaUser, width: 18, height: 18 }
                }
            }
            div {
                class: "progress",
                div { class: "progress-bar", style: "width: {stats.profile_completion}%" }
            }
            if stats.profile_completion < 100 {
                p {
                    class: "view-muted",
                    "Complete your profile to make your portfolio stand out. "
                    Link { to: "/dashboard/profile", "Edit profile" }
                }
            }
            RecentProjects { projects: stats.recent_projects.clone(), has_more: stats.has_more_projects() }
        },
    };

    rsx! {
        div {
            class: "view-page",
            div {
                class: "view-header",
                div {
                    h1 { class: "view-title", "Dashboard" }
                    p { class: "view-muted", "{greeting}" }
                }
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
fn StatCard(label: &'static str, value: String, children: Element) -> Element {
    rsx! {
        div {
            class: "stat-card",
            div { class: "stat-icon", {children} }
            div {
                p { class: "stat-label", "{label}" }
                p { class: "stat-value", "{value}" }
            }
        }
    }
}

#[component]
fn RecentProjects(projects: Vec<Project>, has_more: bool) -> Element {
    rsx! {
        section {
            class: "card",
            h2 { class: "card-title", "Recent projects" }
            if projects.is_empty() {
                EmptyState {
                    title: "No projects yet",
                    description: "Add your first project to start building your portfolio.",
                    Link { class: "btn btn-primary", to: "/dashboard/projects/new", "Add project" }
                }
            } else {
                ul {
                    class: "recent-list",
                    for project in projects.iter() {
                        li {
                            key: "{project.id}",
                            Link {
                                class: "recent-item",
                                to: "/dashboard/projects/{project.id}",
                                span { class: "recent-title", "{project.title}" }
                                span { class: "status-badge status-{project.status.as_str()}", "{project.status}" }
                                if let Some(updated) = project.updated_at.as_deref() {
                                    span { class: "view-muted", "Updated {format_day(updated)}" }
                                }
                            }
                        }
                    }
                }
                if has_more {
                    Link { class: "view-link", to: "/dashboard/projects", "View all projects" }
                }
            }
        }
    }
}
