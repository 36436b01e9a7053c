//! # Signed-in user, as seen by the app
//!
//! [`UserInfo`] is what the identity provider tells us about the current user:
//! its stable id (also the key of the user's profile row), email, names and
//! avatar. It is `Serialize + Deserialize + PartialEq`, lives in the server
//! session, and crosses the server/client boundary via Dioxus server functions.
//!
//! [`UserInfo::seed_profile`] builds the starting draft for the profile editor
//! when the user has never saved a profile.

use serde::{Deserialize, Serialize};
use store::Profile;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub image_url: Option<String>,
}

impl UserInfo {
    /// "First Last", or whichever part exists.
    pub fn full_name(&self) -> Option<String> {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }

    /// Get display name, falling back to email if no name is set.
    pub fn display_name(&self) -> String {
        self.full_name().unwrap_or_else(|| self.email.clone())
    }

    /// A new, unsaved profile pre-filled from the identity record.
    pub fn seed_profile(&self) -> Profile {
        let mut profile = Profile::new(self.id.clone());
        profile.full_name = self.full_name();
        profile.email = self.email.clone();
        profile.avatar_url = self.image_url.clone();
        profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(first: Option<&str>, last: Option<&str>) -> UserInfo {
        UserInfo {
            id: "user_1".to_string(),
            email: "ada@example.com".to_string(),
            first_name: first.map(String::from),
            last_name: last.map(String::from),
            image_url: Some("https://img.example.com/ada.png".to_string()),
        }
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        assert_eq!(user(Some("Ada"), Some("Lovelace")).display_name(), "Ada Lovelace");
        assert_eq!(user(Some("Ada"), None).display_name(), "Ada");
        assert_eq!(user(None, Some(" ")).display_name(), "ada@example.com");
    }

    #[test]
    fn test_seed_profile_is_public_and_prefilled() {
        let profile = user(Some("Ada"), Some("Lovelace")).seed_profile();
        assert_eq!(profile.id, "user_1");
        assert_eq!(profile.full_name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(profile.email, "ada@example.com");
        assert_eq!(profile.avatar_url.as_deref(), Some("https://img.example.com/ada.png"));
        assert!(profile.is_public);
        assert!(profile.skills.is_empty());
    }
}
