//! Visibility, completion and dashboard rules.

use serde::{Deserialize, Serialize};

use crate::models::{Profile, Project, ProjectStatus};

/// Number of profile fields counted by [`profile_completion`].
pub const TRACKED_PROFILE_FIELDS: usize = 7;

/// How many projects the dashboard lists before linking to the full list.
pub const RECENT_PROJECT_LIMIT: usize = 5;

/// A project is visible to anonymous visitors only when both it and its
/// owner's profile are public.
pub fn is_publicly_visible(profile: &Profile, project: &Project) -> bool {
    profile.is_public && project.is_public && project.user_id == profile.id
}

/// Clean up a user-chosen portfolio URL slug.
///
/// Blank input clears the slug. Otherwise the slug is trimmed and lowercased
/// and may only contain ASCII letters, digits and hyphens.
pub fn normalize_slug(raw: &str) -> Result<Option<String>, String> {
    let slug = raw.trim().to_ascii_lowercase();
    if slug.is_empty() {
        return Ok(None);
    }
    if !slug.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err("Portfolio URL may only contain letters, numbers and hyphens".to_string());
    }
    Ok(Some(slug))
}

/// What an anonymous visitor sees at `/portfolio/:userId`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PublicPortfolio {
    pub profile: Profile,
    pub projects: Vec<Project>,
}

impl PublicPortfolio {
    /// `None` for a private profile; otherwise drops every project that is not
    /// publicly visible, keeping the given order.
    pub fn assemble(profile: Profile, projects: Vec<Project>) -> Option<Self> {
        if !profile.is_public {
            return None;
        }
        let projects = projects
            .into_iter()
            .filter(|project| is_publicly_visible(&profile, project))
            .collect();
        Some(Self { profile, projects })
    }
}

fn filled(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

/// Percentage (0-100) of the tracked profile fields that are filled in:
/// name, bio, avatar, skills, experience, education and social links.
pub fn profile_completion(profile: Option<&Profile>) -> u8 {
    let Some(profile) = profile else {
        return 0;
    };

    let checks = [
        filled(profile.full_name.as_deref()),
        filled(profile.bio.as_deref()),
        filled(profile.avatar_url.as_deref()),
        !profile.skills.is_empty(),
        !profile.experience.is_empty(),
        !profile.education.is_empty(),
        profile.social_links.any(),
    ];
    let done = checks.iter().filter(|c| **c).count();
    ((done as f64 / TRACKED_PROFILE_FIELDS as f64) * 100.0).round() as u8
}

/// Figures shown on the dashboard overview.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_projects: usize,
    pub active_projects: usize,
    pub completed_projects: usize,
    pub profile_completion: u8,
    pub recent_projects: Vec<Project>,
}

impl DashboardStats {
    /// `projects` must already be ordered newest `updated_at` first.
    pub fn compute(profile: Option<&Profile>, projects: &[Project]) -> Self {
        let count = |status: ProjectStatus| projects.iter().filter(|p| p.status == status).count();
        Self {
            total_projects: projects.len(),
            active_projects: count(ProjectStatus::Active),
            completed_projects: count(ProjectStatus::Completed),
            profile_completion: profile_completion(profile),
            recent_projects: projects.iter().take(RECENT_PROJECT_LIMIT).cloned().collect(),
        }
    }

    pub fn has_more_projects(&self) -> bool {
        self.total_projects > RECENT_PROJECT_LIMIT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExperienceEntry;

    fn project(id: &str, public: bool, status: ProjectStatus) -> Project {
        let mut project = Project::new(id, "u1");
        project.is_public = public;
        project.status = status;
        project
    }

    #[test]
    fn test_visibility_needs_both_flags() {
        let mut profile = Profile::new("u1");
        for (profile_public, project_public, expected) in [
            (true, true, true),
            (true, false, false),
            (false, true, false),
            (false, false, false),
        ] {
            profile.is_public = profile_public;
            let project = project("p", project_public, ProjectStatus::Active);
            assert_eq!(is_publicly_visible(&profile, &project), expected);
        }
    }

    #[test]
    fn test_assemble_filters_private_projects() {
        let profile = Profile::new("u1");
        let projects = vec![
            project("a", true, ProjectStatus::Active),
            project("b", false, ProjectStatus::Active),
            project("c", true, ProjectStatus::Archived),
        ];
        let portfolio = PublicPortfolio::assemble(profile.clone(), projects.clone()).unwrap();
        let ids: Vec<_> = portfolio.projects.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);

        let mut private = profile;
        private.is_public = false;
        assert!(PublicPortfolio::assemble(private, projects).is_none());
    }

    #[test]
    fn test_normalize_slug() {
        assert_eq!(normalize_slug("  "), Ok(None));
        assert_eq!(normalize_slug(" Ada-L "), Ok(Some("ada-l".to_string())));
        assert!(normalize_slug("ada/../admin").is_err());
        assert!(normalize_slug("ada lovelace").is_err());
    }

    #[test]
    fn test_completion_three_of_seven() {
        let mut profile = Profile::new("u1");
        profile.full_name = Some("Ada Lovelace".to_string());
        profile.skills = vec!["Rust".to_string()];
        profile.experience = vec![ExperienceEntry::default()];
        assert_eq!(profile_completion(Some(&profile)), 43);
    }

    #[test]
    fn test_completion_bounds() {
        assert_eq!(profile_completion(None), 0);

        let mut profile = Profile::new("u1");
        assert_eq!(profile_completion(Some(&profile)), 0);

        profile.full_name = Some("Ada".to_string());
        profile.bio = Some("Engineer".to_string());
        profile.avatar_url = Some("https://img".to_string());
        profile.skills = vec!["Rust".to_string()];
        profile.experience = vec![ExperienceEntry::default()];
        profile.education = vec![Default::default()];
        profile.social_links.website = "https://ada.dev".to_string();
        assert_eq!(profile_completion(Some(&profile)), 100);

        profile.social_links.website = "   ".to_string();
        assert_eq!(profile_completion(Some(&profile)), 86);
    }

    #[test]
    fn test_dashboard_stats() {
        let projects: Vec<_> = (0..7)
            .map(|i| {
                let status = if i % 3 == 0 {
                    ProjectStatus::Completed
                } else {
                    ProjectStatus::Active
                };
                project(&format!("p{i}"), true, status)
            })
            .collect();

        let stats = DashboardStats::compute(None, &projects);
        assert_eq!(stats.completed_projects, 3);
        assert_eq!(stats.active_projects, 4);
        assert_eq!(stats.recent_projects.len(), RECENT_PROJECT_LIMIT);
        assert_eq!(stats.recent_projects[0].id, "p0");
        assert!(stats.has_more_projects());

        let stats = DashboardStats::compute(None, &projects[..2]);
        assert!(!stats.has_more_projects());
    }
}
