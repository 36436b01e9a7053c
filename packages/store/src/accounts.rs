//! Owner-scoped writes and public portfolio lookup.
//!
//! The server functions hand these the session user id; whatever owner the
//! client put on a record is overwritten here. Timestamps and fresh ids come
//! from the caller so the rules stay deterministic under test.

use crate::error::StoreError;
use crate::models::{Profile, Project, Template, UserSettings};
use crate::portfolio::{normalize_slug, PublicPortfolio};
use crate::query::{Query, Table};
use crate::repo::{RecordStore, Repository};

pub const SLUG_TAKEN: &str = "That portfolio URL is already taken";
pub const PROFILE_REQUIRED: &str = "Save your profile before choosing a template";
pub const TITLE_REQUIRED: &str = "Project title is required";

impl<S: RecordStore> Repository<S> {
    /// Upsert `profile` as the profile of `user_id`.
    pub async fn save_own_profile(
        &self,
        user_id: &str,
        mut profile: Profile,
        now: &str,
    ) -> Result<Profile, StoreError> {
        profile.id = user_id.to_string();
        profile.updated_at = Some(now.to_string());
        self.save_profile(&profile).await
    }

    /// Create (blank id) or update one of `user_id`'s projects.
    ///
    /// Updating an id that belongs to another user, or to nobody, is rejected.
    pub async fn save_own_project(
        &self,
        user_id: &str,
        mut project: Project,
        new_id: impl FnOnce() -> String,
        now: &str,
    ) -> Result<Project, StoreError> {
        if project.title.trim().is_empty() {
            return Err(StoreError::rejected(TITLE_REQUIRED));
        }

        if project.id.trim().is_empty() {
            project.id = new_id();
            project.created_at = Some(now.to_string());
        } else {
            match self.project(&project.id, user_id).await {
                Ok(existing) => project.created_at = existing.created_at,
                Err(e) if e.is_not_found() => {
                    tracing::warn!(project = %project.id, user = user_id, "save of foreign project refused");
                    return Err(StoreError::rejected("Project not found"));
                }
                Err(e) => return Err(e),
            }
        }

        project.user_id = user_id.to_string();
        project.updated_at = Some(now.to_string());
        self.save_project(&project).await
    }

    /// Upsert `user_id`'s settings with a normalised, unique slug.
    ///
    /// A slug may not equal another user's id, so `/portfolio/:userId` keeps
    /// pointing at that user.
    pub async fn save_own_settings(
        &self,
        user_id: &str,
        mut settings: UserSettings,
        now: &str,
    ) -> Result<UserSettings, StoreError> {
        settings.portfolio_url_slug =
            normalize_slug(settings.portfolio_url_slug.as_deref().unwrap_or_default())
                .map_err(StoreError::Rejected)?;

        if let Some(slug) = settings.slug() {
            let claimed = self
                .settings_by_slug(slug)
                .await?
                .is_some_and(|other| other.user_id != user_id);
            let shadows_user = slug != user_id && self.user_profile(slug).await?.is_some();
            if claimed || shadows_user {
                return Err(StoreError::rejected(SLUG_TAKEN));
            }
        }

        settings.user_id = user_id.to_string();
        settings.updated_at = Some(now.to_string());
        self.save_settings(&settings).await
    }

    /// Point `user_id`'s profile at an existing template.
    pub async fn select_template(
        &self,
        user_id: &str,
        template_id: &str,
        now: &str,
    ) -> Result<Profile, StoreError> {
        let Some(mut profile) = self.user_profile(user_id).await? else {
            return Err(StoreError::rejected(PROFILE_REQUIRED));
        };

        let query = Query::from(Table::Templates).eq("id", template_id);
        match self.fetch_single::<Template>(&query).await {
            Ok(_) => {}
            Err(e) if e.is_not_found() => return Err(StoreError::rejected("Template not found")),
            Err(e) => return Err(e),
        }

        profile.template_id = Some(template_id.to_string());
        profile.updated_at = Some(now.to_string());
        self.save_profile(&profile).await
    }

    /// Resolve `/portfolio/:handle`.
    ///
    /// A handle naming an existing profile always means that user, even when
    /// the profile is private; only otherwise is it looked up as a slug.
    pub async fn resolve_portfolio(
        &self,
        handle: &str,
    ) -> Result<Option<PublicPortfolio>, StoreError> {
        if self.user_profile(handle).await?.is_some() {
            return self.public_portfolio(handle).await;
        }

        match self.settings_by_slug(&handle.trim().to_ascii_lowercase()).await? {
            Some(settings) => self.public_portfolio(&settings.user_id).await,
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editing::ListEdit;
    use crate::memory::MemoryStore;

    const NOW: &str = "2024-05-01T12:00:00+00:00";
    const LATER: &str = "2024-05-02T08:30:00+00:00";
    const ADA: &str = "3f2b8c1e-9d4a-4c6f-8e21-5b7a0d9c4e11";
    const GRACE: &str = "grace";

    fn repo() -> Repository<MemoryStore> {
        Repository::new(MemoryStore::new())
    }

    fn named(id: &str, name: &str) -> Profile {
        let mut profile = Profile::new(id);
        profile.full_name = Some(name.to_string());
        profile
    }

    fn with_slug(slug: &str) -> UserSettings {
        let mut settings = UserSettings::defaults_for("ignored");
        settings.portfolio_url_slug = Some(slug.to_string());
        settings
    }

    fn titled(id: &str, title: &str) -> Project {
        let mut project = Project::new(id, "someone-else");
        project.title = title.to_string();
        project
    }

    #[tokio::test]
    async fn test_profile_owner_and_timestamp_forced() {
        let repo = repo();
        let saved = repo
            .save_own_profile(ADA, named(GRACE, "Ada"), NOW)
            .await
            .unwrap();
        assert_eq!(saved.id, ADA);
        assert_eq!(saved.updated_at.as_deref(), Some(NOW));
        assert!(repo.user_profile(GRACE).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_skill_added_then_renamed_survives_save() {
        let repo = repo();
        let mut profile = repo
            .save_own_profile(ADA, named(ADA, "Ada"), NOW)
            .await
            .unwrap();
        assert!(profile.skills.is_empty());

        assert!(profile.edit_skills(ListEdit::Push(String::new())));
        assert!(profile.edit_skills(ListEdit::Set(0, "Go".to_string())));
        repo.save_own_profile(ADA, profile, LATER).await.unwrap();

        let stored = repo.user_profile(ADA).await.unwrap().unwrap();
        assert_eq!(stored.skills, vec!["Go".to_string()]);
        assert_eq!(stored.updated_at.as_deref(), Some(LATER));
    }

    #[tokio::test]
    async fn test_new_project_gets_id_and_owner() {
        let repo = repo();
        let saved = repo
            .save_own_project(ADA, titled("", "Compiler"), || "p-1".to_string(), NOW)
            .await
            .unwrap();
        assert_eq!(saved.id, "p-1");
        assert_eq!(saved.user_id, ADA);
        assert_eq!(saved.created_at.as_deref(), Some(NOW));

        let mut edited = saved.clone();
        edited.title = "Optimizing compiler".to_string();
        let updated = repo
            .save_own_project(ADA, edited, || unreachable!(), LATER)
            .await
            .unwrap();
        assert_eq!(updated.created_at.as_deref(), Some(NOW));
        assert_eq!(updated.updated_at.as_deref(), Some(LATER));
        assert_eq!(repo.user_projects(ADA).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_foreign_project_id_rejected() {
        let repo = repo();
        repo.save_own_project(GRACE, titled("", "Cobol"), || "p-grace".to_string(), NOW)
            .await
            .unwrap();

        let err = repo
            .save_own_project(ADA, titled("p-grace", "Mine now"), || unreachable!(), LATER)
            .await
            .unwrap_err();
        assert!(err.is_rejected());

        let kept = repo.project("p-grace", GRACE).await.unwrap();
        assert_eq!(kept.title, "Cobol");
    }

    #[tokio::test]
    async fn test_blank_title_rejected() {
        let err = repo()
            .save_own_project(ADA, titled("", "   "), || "p".to_string(), NOW)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), TITLE_REQUIRED);
    }

    #[tokio::test]
    async fn test_settings_slug_normalised_and_owned() {
        let repo = repo();
        let saved = repo
            .save_own_settings(ADA, with_slug("  Ada-L "), NOW)
            .await
            .unwrap();
        assert_eq!(saved.user_id, ADA);
        assert_eq!(saved.portfolio_url_slug.as_deref(), Some("ada-l"));
        assert_eq!(saved.updated_at.as_deref(), Some(NOW));

        let err = repo
            .save_own_settings(ADA, with_slug("ada/admin"), NOW)
            .await
            .unwrap_err();
        assert!(err.is_rejected());
    }

    #[tokio::test]
    async fn test_slug_unique_across_users() {
        let repo = repo();
        repo.save_own_settings(ADA, with_slug("ada"), NOW).await.unwrap();

        let err = repo
            .save_own_settings(GRACE, with_slug("ada"), NOW)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), SLUG_TAKEN);

        // saving again with your own slug is fine
        repo.save_own_settings(ADA, with_slug("ada"), LATER).await.unwrap();
    }

    #[tokio::test]
    async fn test_slug_cannot_shadow_another_user_id() {
        let repo = repo();
        repo.save_own_profile(ADA, named(ADA, "Ada"), NOW).await.unwrap();
        repo.save_own_profile(GRACE, named(GRACE, "Grace"), NOW).await.unwrap();

        let err = repo
            .save_own_settings(GRACE, with_slug(ADA), NOW)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), SLUG_TAKEN);
    }

    #[tokio::test]
    async fn test_user_id_wins_over_matching_slug() {
        let repo = repo();
        repo.save_own_profile(GRACE, named(GRACE, "Grace"), NOW).await.unwrap();
        // claimed before Ada ever saved a profile
        repo.save_own_settings(GRACE, with_slug(ADA), NOW).await.unwrap();
        repo.save_own_profile(ADA, named(ADA, "Ada"), LATER).await.unwrap();

        let portfolio = repo.resolve_portfolio(ADA).await.unwrap().unwrap();
        assert_eq!(portfolio.profile.id, ADA);

        let mut private = named(ADA, "Ada");
        private.is_public = false;
        repo.save_own_profile(ADA, private, LATER).await.unwrap();
        assert!(repo.resolve_portfolio(ADA).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_slug_resolves_when_no_profile_matches() {
        let repo = repo();
        repo.save_own_profile(GRACE, named(GRACE, "Grace"), NOW).await.unwrap();
        repo.save_own_settings(GRACE, with_slug("hopper"), NOW).await.unwrap();

        let portfolio = repo.resolve_portfolio("Hopper").await.unwrap().unwrap();
        assert_eq!(portfolio.profile.id, GRACE);
        assert!(repo.resolve_portfolio("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_template_needs_profile_and_existing_template() {
        let repo = repo();
        let err = repo.select_template(ADA, "minimal", NOW).await.unwrap_err();
        assert_eq!(err.to_string(), PROFILE_REQUIRED);

        repo.save_own_profile(ADA, named(ADA, "Ada"), NOW).await.unwrap();
        let err = repo.select_template(ADA, "minimal", NOW).await.unwrap_err();
        assert!(err.is_rejected());

        repo.save(&Template {
            id: "minimal".to_string(),
            created_at: None,
            name: "Minimal".to_string(),
            description: None,
            preview_url: String::new(),
            is_premium: false,
        })
        .await
        .unwrap();
        let profile = repo.select_template(ADA, "minimal", LATER).await.unwrap();
        assert_eq!(profile.template_id.as_deref(), Some("minimal"));
        assert_eq!(profile.updated_at.as_deref(), Some(LATER));
    }
}
