//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_brands_icons::{FaGithub, FaLinkedin, FaTwitter};
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod format;

pub mod views;

pub const DX_COMPONENTS_CSS: Asset = asset!("/assets/dx-components-theme.css");

mod auth;
pub use auth::{
    check_access, is_protected_path, use_auth, Access, AuthProvider, AuthState, HostedAuthButton,
    RequireAuth, SignOutButton, SIGN_IN_PATH,
};

mod loader;
pub use loader::use_loader;

mod theme;
pub use theme::apply_theme;

mod navbar;
pub use navbar::Navbar;

mod footer;
pub use footer::Footer;

mod sidebar;
pub use sidebar::DashboardSidebar;
