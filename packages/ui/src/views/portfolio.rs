use dioxus::prelude::*;
use store::{Loadable, Profile, Project, PublicPortfolio};

use crate::components::LoadingSpinner;
use crate::format::{date_range, format_day};
use crate::icons::{FaArrowUpRightFromSquare, FaCode, FaGithub, FaGlobe, FaLinkedin, FaTwitter};
use crate::{use_loader, Icon};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

const PLACEHOLDER_AVATAR: &str = "https://via.placeholder.com/150";

/// Public, read-only portfolio page. `user_id` may also be a portfolio slug.
#[component]
pub fn PortfolioView(user_id: String) -> Element {
    let mut handle = use_signal(|| user_id.clone());
    if *handle.peek() != user_id {
        handle.set(user_id.clone());
    }

    let portfolio = use_loader("Failed to load portfolio", move || {
        let handle = handle();
        async move { Loadable::from_optional_result(api::get_public_portfolio(handle).await) }
    });

    let body = match portfolio() {
        Loadable::Loading => rsx! {
            div { class: "page-loading", LoadingSpinner {} }
        },
        Loadable::Empty | Loadable::Failed(_) => rsx! {
            div {
                class: "portfolio-unavailable",
                h1 { "Portfolio Not Available" }
                p { class: "view-muted", "This portfolio is not available or is set to private." }
                Link { class: "btn btn-primary", to: "/", "Go home" }
            }
        },
        Loadable::Loaded(PublicPortfolio { profile, projects }) => rsx! {
            PortfolioHeader { profile: profile.clone() }
            div {
                class: "portfolio-body",
                div {
                    class: "portfolio-sidebar",
                    SkillsSection { skills: profile.skills.clone() }
                    if !profile.hobbies.is_empty() {
                        section {
                            class: "portfolio-section",
                            h2 { "Hobbies" }
                            div {
                                class: "tag-list",
                                for hobby in profile.hobbies.iter() {
                                    span { class: "tag", "{hobby}" }
                                }
                            }
                        }
                    }
                }
                div {
                    class: "portfolio-main",
                    ExperienceSection { profile: profile.clone() }
                    EducationSection { profile: profile.clone() }
                    ProjectsSection { projects }
                }
            }
        },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div { class: "portfolio", {body} }
    }
}

#[component]
fn PortfolioHeader(profile: Profile) -> Element {
    let avatar = profile
        .avatar_url
        .clone()
        .unwrap_or_else(|| PLACEHOLDER_AVATAR.to_string());
    let links = profile.social_links.clone();

    rsx! {
        header {
            class: "portfolio-header",
            img { class: "portfolio-avatar", src: "{avatar}", alt: "{profile.display_name()}" }
            div {
                h1 { class: "portfolio-name", "{profile.display_name()}" }
                if let Some(bio) = profile.bio.as_deref() {
                    p { class: "portfolio-bio", "{bio}" }
                }
                div {
                    class: "social-links",
                    if !links.github.trim().is_empty() {
                        a { href: "{links.github}", target: "_blank", rel: "noopener noreferrer", title: "GitHub",
                            Icon { icon: FaGithub, width: 20, height: 20 }
                        }
                    }
                    if !links.linkedin.trim().is_empty() {
                        a { href: "{links.linkedin}", target: "_blank", rel: "noopener noreferrer", title: "LinkedIn",
                            Icon { icon: FaLinkedin, width: 20, height: 20 }
                        }
                    }
                    if !links.twitter.trim().is_empty() {
                        a { href: "{links.twitter}", target: "_blank", rel: "noopener noreferrer", title: "Twitter",
                            Icon { icon: FaTwitter, width: 20, height: 20 }
                        }
                    }
                    if !links.website.trim().is_empty() {
                        a { href: "{links.website}", target: "_blank", rel: "noopener noreferrer", title: "Website",
                            Icon { icon: FaGlobe, width: 20, height: 20 }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SkillsSection(skills: Vec<String>) -> Element {
    rsx! {
        section {
            class: "portfolio-section",
            h2 { "Skills" }
            if skills.is_empty() {
                p { class: "view-muted", "No skills listed" }
            } else {
                div {
                    class: "tag-list",
                    for skill in skills.iter() {
                        span { class: "tag", "{skill}" }
                    }
                }
            }
        }
    }
}

#[component]
fn ExperienceSection(profile: Profile) -> Element {
    rsx! {
        section {
            class: "portfolio-section",
            h2 { "Experience" }
            if profile.experience.is_empty() {
                p { class: "view-muted", "No experience listed" }
            }
            for entry in profile.experience.iter() {
                div {
                    class: "timeline-entry",
                    h3 { "{entry.title}" }
                    p { class: "timeline-org", "{entry.company}" }
                    p { class: "view-muted", "{date_range(&entry.start_date, &entry.end_date)}" }
                    if !entry.description.is_empty() {
                        p { "{entry.description}" }
                    }
                }
            }
        }
    }
}

#[component]
fn EducationSection(profile: Profile) -> Element {
    rsx! {
        section {
            class: "portfolio-section",
            h2 { "Education" }
            if profile.education.is_empty() {
                p { class: "view-muted", "No education listed" }
            }
            for entry in profile.education.iter() {
                div {
                    class: "timeline-entry",
                    h3 { "{entry.degree}" }
                    p { class: "timeline-org", "{entry.institution}" }
                    p { class: "view-muted", "{date_range(&entry.start_date, &entry.end_date)}" }
                    if !entry.description.is_empty() {
                        p { "{entry.description}" }
                    }
                }
            }
        }
    }
}

#[component]
fn ProjectsSection(projects: Vec<Project>) -> Element {
    rsx! {
        section {
            class: "portfolio-section",
            h2 { "Projects" }
            if projects.is_empty() {
                p { class: "view-muted", "No projects have been added yet." }
            }
            div {
                class: "project-grid",
                for project in projects.iter() {
                    article {
                        key: "{project.id}",
                        class: "project-card",
                        if let Some(thumbnail) = project.thumbnail_url.as_deref() {
                            img { class: "project-thumbnail", src: "{thumbnail}", alt: "{project.title}" }
                        } else {
                            div { class: "project-thumbnail project-initial", "{project.initial()}" }
                        }
                        div {
                            class: "project-card-body",
                            h3 { "{project.title}" }
                            if let Some(description) = project.description.as_deref() {
                                p { class: "view-muted", "{description}" }
                            }
                            div {
                                class: "tag-list",
                                for tech in project.technologies.iter() {
                                    span { class: "tag tag-small", "{tech}" }
                                }
                            }
                            div {
                                class: "project-links",
                                if let Some(demo) = project.demo_url.as_deref() {
                                    a { href: "{demo}", target: "_blank", rel: "noopener noreferrer",
                                        Icon { icon: FaArrowUpRightFromSquare, width: 14, height: 14 }
                                        " Live demo"
                                    }
                                }
                                if let Some(repo) = project.repo_url.as_deref() {
                                    a { href: "{repo}", target: "_blank", rel: "noopener noreferrer",
                                        Icon { icon: FaCode, width: 14, height: 14 }
                                        " Source"
                                    }
                                }
                            }
                            if let Some(created) = project.created_at.as_deref() {
                                p { class: "project-date", "{format_day(created)}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
