pub mod accounts;
pub mod editing;
pub mod error;
pub mod loadable;
pub mod models;
pub mod portfolio;
pub mod query;
pub mod repo;

mod memory;
pub use memory::MemoryStore;

#[cfg(feature = "remote")]
mod rest;
#[cfg(feature = "remote")]
pub use rest::RestStore;

pub use editing::{EducationField, ExperienceField, ListEdit, ProfileField, ProjectField, SocialPlatform};
pub use error::StoreError;
pub use loadable::{Loadable, RequestGeneration, Ticket};
pub use models::{
    EducationEntry, ExperienceEntry, Profile, Project, ProjectStatus, SocialLinks, Template,
    ThemePreference, UserSettings,
};
pub use portfolio::{
    is_publicly_visible, normalize_slug, profile_completion, DashboardStats, PublicPortfolio,
};
pub use query::{Query, Table};
pub use repo::{Record, RecordStore, Repository};
