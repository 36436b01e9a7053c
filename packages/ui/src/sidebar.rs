use dioxus::prelude::*;

use crate::auth::{use_auth, SignOutButton};
use crate::icons::{FaFolder, FaGear, FaHouse, FaPalette, FaUser};
use crate::Icon;

const DASHBOARD_HOME: &str = "/dashboard";

fn is_active(current: &str, href: &str) -> bool {
    let current = current.trim_end_matches('/');
    if href == DASHBOARD_HOME {
        current == DASHBOARD_HOME
    } else {
        current == href || current.starts_with(&format!("{href}/"))
    }
}

#[component]
fn NavItem(href: &'static str, label: &'static str, current: String, children: Element) -> Element {
    let class = if is_active(&current, href) {
        "sidebar-item active"
    } else {
        "sidebar-item"
    };

    rsx! {
        Link {
            class: class,
            to: href,
            {children}
            span { "{label}" }
        }
    }
}

/// Navigation for the signed-in area.
#[component]
pub fn DashboardSidebar(current: String) -> Element {
    let auth = use_auth();
    let user = auth().user;

    rsx! {
        aside {
            class: "sidebar",
            Link { class: "sidebar-brand", to: "/", "Spotlight" }

            nav {
                class: "sidebar-nav",
                NavItem { href: "/dashboard", label: "Dashboard", current: current.clone(),
                    Icon { icon: FaHouse, width: 16, height: 16 }
                }
                NavItem { href: "/dashboard/profile", label: "Profile", current: current.clone(),
                    Icon { icon: FaUser, width: 16, height: 16 }
                }
                NavItem { href: "/dashboard/projects", label: "Projects", current: current.clone(),
                    Icon { icon: FaFolder, width: 16, height: 16 }
                }
                NavItem { href: "/dashboard/templates", label: "Templates", current: current.clone(),
                    Icon { icon: FaPalette, width: 16, height: 16 }
                }
                NavItem { href: "/dashboard/settings", label: "Settings", current: current.clone(),
                    Icon { icon: FaGear, width: 16, height: 16 }
                }
            }

            div {
                class: "sidebar-bottom",
                if let Some(ref u) = user {
                    div {
                        class: "sidebar-user",
                        if let Some(ref avatar) = u.image_url {
                            img {
                                class: "sidebar-user-avatar",
                                src: "{avatar}",
                                alt: "Avatar",
                            }
                        }
                        span { class: "sidebar-user-name", "{u.display_name()}" }
                    }
                    Link {
                        class: "sidebar-item",
                        to: "/portfolio/{u.id}",
                        span { "View portfolio" }
                    }
                }
                SignOutButton { class: "sidebar-item sidebar-signout" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_item() {
        assert!(is_active("/dashboard", "/dashboard"));
        assert!(is_active("/dashboard/", "/dashboard"));
        assert!(!is_active("/dashboard/projects", "/dashboard"));
        assert!(is_active("/dashboard/projects/p1/edit", "/dashboard/projects"));
        assert!(!is_active("/dashboard/profile", "/dashboard/projects"));
    }
}
