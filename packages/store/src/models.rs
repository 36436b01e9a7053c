//! # Record kinds owned by the managed store
//!
//! Defines the four record kinds Spotlight reads from and writes to the remote
//! store. Every type is `Serialize + Deserialize` so it can cross the
//! server/client boundary via Dioxus server functions, and its field names match
//! the store's snake_case columns one to one.
//!
//! | Struct | Collection | Upsert key |
//! |--------|-----------|------------|
//! | [`Profile`] | `profiles` | `id` (the identity user id) |
//! | [`Project`] | `projects` | `id` |
//! | [`Template`] | `templates` | read-only |
//! | [`UserSettings`] | `user_settings` | `user_id` |
//!
//! Columns that the store may return as `null` are decoded with [`nullable`],
//! so a missing list or link map becomes its empty default instead of a
//! decoding error. Read paths never fail on absent optional data.

use serde::{Deserialize, Deserializer, Serialize};

/// Decode `null` (or an absent key, together with `#[serde(default)]`) as `T::default()`.
pub fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One profile per user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub email: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default, deserialize_with = "nullable")]
    pub education: Vec<EducationEntry>,
    #[serde(default, deserialize_with = "nullable")]
    pub hobbies: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub social_links: SocialLinks,
    #[serde(default)]
    pub template_id: Option<String>,
    #[serde(default)]
    pub color_scheme: Option<String>,
    #[serde(default)]
    pub is_public: bool,
}

impl Profile {
    /// A fresh, not yet saved profile. New profiles start out public.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            created_at: None,
            updated_at: None,
            full_name: None,
            email: String::new(),
            bio: None,
            avatar_url: None,
            skills: Vec::new(),
            experience: Vec::new(),
            education: Vec::new(),
            hobbies: Vec::new(),
            social_links: SocialLinks::default(),
            template_id: None,
            color_scheme: None,
            is_public: true,
        }
    }

    /// Name to show in headings, falling back to the email address.
    pub fn display_name(&self) -> &str {
        match self.full_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.email,
        }
    }
}

/// A work-history entry on a profile.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

/// An education entry on a profile.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

/// Fixed-key social link mapping. Blank strings mean "not set".
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    pub github: String,
    pub linkedin: String,
    pub twitter: String,
    pub website: String,
}

impl SocialLinks {
    /// True when at least one link is filled in.
    pub fn any(&self) -> bool {
        [&self.github, &self.linkedin, &self.twitter, &self.website]
            .iter()
            .any(|link| !link.trim().is_empty())
    }
}

/// Lifecycle of a project.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    #[default]
    Active,
    Completed,
    Archived,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 3] = [Self::Active, Self::Completed, Self::Archived];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Archived => "archived",
        }
    }

    /// Parse the wire value; unknown values fall back to `Active`.
    pub fn parse(value: &str) -> Self {
        match value {
            "completed" => Self::Completed,
            "archived" => Self::Archived,
            _ => Self::Active,
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A portfolio project. Many per user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    pub user_id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub screenshots: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub demo_url: Option<String>,
    #[serde(default)]
    pub repo_url: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub status: ProjectStatus,
    #[serde(default)]
    pub is_public: bool,
}

impl Project {
    /// A blank project owned by `user_id`, public by default.
    pub fn new(id: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            created_at: None,
            updated_at: None,
            user_id: user_id.into(),
            title: String::new(),
            description: None,
            thumbnail_url: None,
            screenshots: Vec::new(),
            technologies: Vec::new(),
            demo_url: None,
            repo_url: None,
            status: ProjectStatus::Active,
            is_public: true,
        }
    }

    /// First character of the title, used as a thumbnail stand-in.
    pub fn initial(&self) -> String {
        self.title
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "?".to_string())
    }
}

/// A catalog entry describing one visual template.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub preview_url: String,
    #[serde(default)]
    pub is_premium: bool,
}

/// Colour theme preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemePreference {
    pub const ALL: [ThemePreference; 3] = [Self::Light, Self::Dark, Self::System];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::System => "System",
        }
    }
}

/// Per-user application settings. One row per user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub theme_preference: ThemePreference,
    #[serde(default = "default_email_notifications")]
    pub email_notifications: bool,
    #[serde(default)]
    pub portfolio_url_slug: Option<String>,
}

fn default_email_notifications() -> bool {
    true
}

impl UserSettings {
    /// Defaults used until the user saves settings for the first time.
    pub fn defaults_for(user_id: impl Into<String>) -> Self {
        Self {
            id: None,
            user_id: user_id.into(),
            created_at: None,
            updated_at: None,
            theme_preference: ThemePreference::System,
            email_notifications: default_email_notifications(),
            portfolio_url_slug: None,
        }
    }

    /// The slug if it is set and non-blank.
    pub fn slug(&self) -> Option<&str> {
        self.portfolio_url_slug
            .as_deref()
            .map(str::trim)
            .filter(|slug| !slug.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_tolerates_null_columns() {
        let raw = r#"{
            "id": "user_1",
            "email": "ada@example.com",
            "full_name": null,
            "skills": null,
            "experience": null,
            "education": null,
            "hobbies": null,
            "social_links": null,
            "is_public": true
        }"#;
        let profile: Profile = serde_json::from_str(raw).unwrap();
        assert!(profile.skills.is_empty());
        assert!(profile.experience.is_empty());
        assert_eq!(profile.social_links, SocialLinks::default());
        assert_eq!(profile.display_name(), "ada@example.com");
    }

    #[test]
    fn test_project_status_wire_values() {
        let raw = r#"{"id":"p1","user_id":"u1","title":"Lamp","status":"archived","is_public":false}"#;
        let project: Project = serde_json::from_str(raw).unwrap();
        assert_eq!(project.status, ProjectStatus::Archived);
        assert!(project.technologies.is_empty());

        let json = serde_json::to_value(&project).unwrap();
        assert_eq!(json["status"], "archived");
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn test_settings_defaults_when_columns_missing() {
        let settings: UserSettings = serde_json::from_str(r#"{"user_id":"u1"}"#).unwrap();
        assert_eq!(settings.theme_preference, ThemePreference::System);
        assert!(settings.email_notifications);
        assert_eq!(settings.slug(), None);
    }

    #[test]
    fn test_blank_slug_is_not_a_slug() {
        let mut settings = UserSettings::defaults_for("u1");
        settings.portfolio_url_slug = Some("   ".to_string());
        assert_eq!(settings.slug(), None);
        settings.portfolio_url_slug = Some(" ada ".to_string());
        assert_eq!(settings.slug(), Some("ada"));
    }

    #[test]
    fn test_project_initial() {
        let mut project = Project::new("p1", "u1");
        assert_eq!(project.initial(), "?");
        project.title = "spotlight".to_string();
        assert_eq!(project.initial(), "S");
    }
}
