//! Field-level mutations for the editor pages.
//!
//! Editors keep a local copy of a record and apply these edits to it before a
//! single explicit save. List edits are index based; an index that does not
//! exist is ignored rather than treated as an error, so a stale click can never
//! corrupt the list.

use crate::models::{
    EducationEntry, ExperienceEntry, Profile, Project, ProjectStatus, SocialLinks,
};

/// An index-stable edit to a list field.
#[derive(Clone, Debug, PartialEq)]
pub enum ListEdit<T> {
    Set(usize, T),
    /// Insert before `index`; `index == len` appends.
    Insert(usize, T),
    Push(T),
    Remove(usize),
}

impl<T> ListEdit<T> {
    /// Apply to `list`. Returns false when the edit was ignored.
    pub fn apply(self, list: &mut Vec<T>) -> bool {
        match self {
            Self::Set(index, value) => match list.get_mut(index) {
                Some(slot) => {
                    *slot = value;
                    true
                }
                None => false,
            },
            Self::Insert(index, value) if index <= list.len() => {
                list.insert(index, value);
                true
            }
            Self::Insert(..) => false,
            Self::Push(value) => {
                list.push(value);
                true
            }
            Self::Remove(index) if index < list.len() => {
                list.remove(index);
                true
            }
            Self::Remove(_) => false,
        }
    }
}

fn optional(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Scalar profile fields editable from a form input.
#[derive(Clone, Debug, PartialEq)]
pub enum ProfileField {
    FullName(String),
    Email(String),
    Bio(String),
    AvatarUrl(String),
    ColorScheme(String),
    IsPublic(bool),
}

impl ProfileField {
    pub fn apply(self, profile: &mut Profile) {
        match self {
            Self::FullName(v) => profile.full_name = optional(v),
            Self::Email(v) => profile.email = v,
            Self::Bio(v) => profile.bio = optional(v),
            Self::AvatarUrl(v) => profile.avatar_url = optional(v),
            Self::ColorScheme(v) => profile.color_scheme = optional(v),
            Self::IsPublic(v) => profile.is_public = v,
        }
    }
}

/// Scalar project fields editable from a form input.
#[derive(Clone, Debug, PartialEq)]
pub enum ProjectField {
    Title(String),
    Description(String),
    ThumbnailUrl(String),
    DemoUrl(String),
    RepoUrl(String),
    Status(ProjectStatus),
    IsPublic(bool),
}

impl ProjectField {
    pub fn apply(self, project: &mut Project) {
        match self {
            Self::Title(v) => project.title = v,
            Self::Description(v) => project.description = optional(v),
            Self::ThumbnailUrl(v) => project.thumbnail_url = optional(v),
            Self::DemoUrl(v) => project.demo_url = optional(v),
            Self::RepoUrl(v) => project.repo_url = optional(v),
            Self::Status(v) => project.status = v,
            Self::IsPublic(v) => project.is_public = v,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SocialPlatform {
    Github,
    Linkedin,
    Twitter,
    Website,
}

impl SocialPlatform {
    pub const ALL: [SocialPlatform; 4] = [Self::Github, Self::Linkedin, Self::Twitter, Self::Website];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Github => "GitHub",
            Self::Linkedin => "LinkedIn",
            Self::Twitter => "Twitter",
            Self::Website => "Website",
        }
    }

    pub fn get<'a>(&self, links: &'a SocialLinks) -> &'a str {
        match self {
            Self::Github => &links.github,
            Self::Linkedin => &links.linkedin,
            Self::Twitter => &links.twitter,
            Self::Website => &links.website,
        }
    }

    pub fn set(&self, links: &mut SocialLinks, value: String) {
        match self {
            Self::Github => links.github = value,
            Self::Linkedin => links.linkedin = value,
            Self::Twitter => links.twitter = value,
            Self::Website => links.website = value,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExperienceField {
    Title,
    Company,
    StartDate,
    EndDate,
    Description,
}

impl ExperienceField {
    pub fn get<'a>(&self, entry: &'a ExperienceEntry) -> &'a str {
        match self {
            Self::Title => &entry.title,
            Self::Company => &entry.company,
            Self::StartDate => &entry.start_date,
            Self::EndDate => &entry.end_date,
            Self::Description => &entry.description,
        }
    }

    pub fn set(&self, entry: &mut ExperienceEntry, value: String) {
        match self {
            Self::Title => entry.title = value,
            Self::Company => entry.company = value,
            Self::StartDate => entry.start_date = value,
            Self::EndDate => entry.end_date = value,
            Self::Description => entry.description = value,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EducationField {
    Degree,
    Institution,
    StartDate,
    EndDate,
    Description,
}

impl EducationField {
    pub fn get<'a>(&self, entry: &'a EducationEntry) -> &'a str {
        match self {
            Self::Degree => &entry.degree,
            Self::Institution => &entry.institution,
            Self::StartDate => &entry.start_date,
            Self::EndDate => &entry.end_date,
            Self::Description => &entry.description,
        }
    }

    pub fn set(&self, entry: &mut EducationEntry, value: String) {
        match self {
            Self::Degree => entry.degree = value,
            Self::Institution => entry.institution = value,
            Self::StartDate => entry.start_date = value,
            Self::EndDate => entry.end_date = value,
            Self::Description => entry.description = value,
        }
    }
}

impl Profile {
    pub fn set_field(&mut self, field: ProfileField) {
        field.apply(self);
    }

    pub fn edit_skills(&mut self, edit: ListEdit<String>) -> bool {
        edit.apply(&mut self.skills)
    }

    pub fn edit_hobbies(&mut self, edit: ListEdit<String>) -> bool {
        edit.apply(&mut self.hobbies)
    }

    pub fn edit_experience(&mut self, edit: ListEdit<ExperienceEntry>) -> bool {
        edit.apply(&mut self.experience)
    }

    pub fn edit_education(&mut self, edit: ListEdit<EducationEntry>) -> bool {
        edit.apply(&mut self.education)
    }

    /// Set one field of the experience entry at `index`, if it exists.
    pub fn set_experience_field(&mut self, index: usize, field: ExperienceField, value: String) -> bool {
        match self.experience.get_mut(index) {
            Some(entry) => {
                field.set(entry, value);
                true
            }
            None => false,
        }
    }

    pub fn set_education_field(&mut self, index: usize, field: EducationField, value: String) -> bool {
        match self.education.get_mut(index) {
            Some(entry) => {
                field.set(entry, value);
                true
            }
            None => false,
        }
    }

    pub fn set_social_link(&mut self, platform: SocialPlatform, value: String) {
        platform.set(&mut self.social_links, value);
    }
}

impl Project {
    pub fn set_field(&mut self, field: ProjectField) {
        field.apply(self);
    }

    pub fn edit_technologies(&mut self, edit: ListEdit<String>) -> bool {
        edit.apply(&mut self.technologies)
    }

    pub fn edit_screenshots(&mut self, edit: ListEdit<String>) -> bool {
        edit.apply(&mut self.screenshots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters() -> Vec<String> {
        ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_add_then_edit_skill() {
        let mut profile = Profile::new("u1");
        assert!(profile.edit_skills(ListEdit::Push(String::new())));
        assert!(profile.edit_skills(ListEdit::Set(0, "Go".to_string())));
        assert_eq!(profile.skills, vec!["Go".to_string()]);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut list = letters();
        assert!(ListEdit::Remove(1).apply(&mut list));
        assert_eq!(list, vec!["a", "c", "d"]);
    }

    #[test]
    fn test_out_of_range_edits_are_ignored() {
        let mut list = letters();
        assert!(!ListEdit::Remove(4).apply(&mut list));
        assert!(!ListEdit::Set(9, "z".to_string()).apply(&mut list));
        assert!(!ListEdit::Insert(5, "z".to_string()).apply(&mut list));
        assert_eq!(list, letters());
    }

    #[test]
    fn test_insert_at_len_appends() {
        let mut list = letters();
        assert!(ListEdit::Insert(4, "e".to_string()).apply(&mut list));
        assert!(ListEdit::Insert(0, "_".to_string()).apply(&mut list));
        assert_eq!(list, vec!["_", "a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_nested_entry_fields() {
        let mut profile = Profile::new("u1");
        profile.edit_experience(ListEdit::Push(ExperienceEntry::default()));
        assert!(profile.set_experience_field(0, ExperienceField::Company, "Acme".to_string()));
        assert!(!profile.set_experience_field(1, ExperienceField::Company, "Nope".to_string()));
        assert_eq!(profile.experience.len(), 1);
        assert_eq!(ExperienceField::Company.get(&profile.experience[0]), "Acme");

        profile.edit_education(ListEdit::Push(EducationEntry::default()));
        profile.set_education_field(0, EducationField::Degree, "BSc".to_string());
        assert_eq!(profile.education[0].degree, "BSc");
    }

    #[test]
    fn test_social_links_by_platform() {
        let mut profile = Profile::new("u1");
        profile.set_social_link(SocialPlatform::Github, "https://github.com/ada".to_string());
        assert_eq!(
            SocialPlatform::Github.get(&profile.social_links),
            "https://github.com/ada"
        );
        assert_eq!(SocialPlatform::Twitter.get(&profile.social_links), "");
    }

    #[test]
    fn test_blank_optional_fields_clear() {
        let mut profile = Profile::new("u1");
        profile.set_field(ProfileField::Bio("Builder".to_string()));
        assert_eq!(profile.bio.as_deref(), Some("Builder"));
        profile.set_field(ProfileField::Bio("  ".to_string()));
        assert_eq!(profile.bio, None);

        let mut project = Project::new("p1", "u1");
        project.set_field(ProjectField::Status(ProjectStatus::Completed));
        project.set_field(ProjectField::DemoUrl("https://demo".to_string()));
        assert_eq!(project.status, ProjectStatus::Completed);
        assert_eq!(project.demo_url.as_deref(), Some("https://demo"));
    }
}
