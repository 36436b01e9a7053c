use dioxus::prelude::*;
use store::{
    EducationEntry, EducationField, ExperienceEntry, ExperienceField, ListEdit, Loadable, Profile,
    ProfileField, SocialPlatform,
};

use super::list_editor::StringListEditor;
use crate::components::{
    Button, ButtonVariant, ErrorState, Input, Label, LoadingSpinner, Textarea, ToastOptions, Toggle, use_toast,
};
use crate::icons::{FaPlus, FaTrash};
use crate::{use_auth, use_loader, Icon};

const EXPERIENCE_FIELDS: [(ExperienceField, &str, &str); 5] = [
    (ExperienceField::Title, "Job title", "text"),
    (ExperienceField::Company, "Company", "text"),
    (ExperienceField::StartDate, "Start date", "date"),
    (ExperienceField::EndDate, "End date", "date"),
    (ExperienceField::Description, "Description", "text"),
];

const EDUCATION_FIELDS: [(EducationField, &str, &str); 5] = [
    (EducationField::Degree, "Degree", "text"),
    (EducationField::Institution, "Institution", "text"),
    (EducationField::StartDate, "Start date", "date"),
    (EducationField::EndDate, "End date", "date"),
    (EducationField::Description, "Description", "text"),
];

/// Edits the signed-in user's profile. Changes stay local until "Save".
#[component]
pub fn ProfileEditorView() -> Element {
    let auth = use_auth();
    let toast = use_toast();
    let mut draft = use_signal(|| None::<Profile>);
    let mut saving = use_signal(|| false);

    let loaded = use_loader("Failed to load profile", move || {
        let user = auth().user;
        async move {
            match api::get_profile().await {
                Ok(Some(profile)) => Loadable::Loaded(profile),
                // First visit: start from what the identity provider knows.
                Ok(None) => Loadable::from_option(user.map(|u| u.seed_profile())),
                Err(e) => Loadable::Failed(e.to_string()),
            }
        }
    });

    use_effect(move || {
        if let Loadable::Loaded(profile) = loaded() {
            draft.set(Some(profile));
        }
    });

    let mut edit = move |f: &dyn Fn(&mut Profile)| {
        if let Some(profile) = draft.write().as_mut() {
            f(profile);
        }
    };

    let handle_save = move |_| {
        let Some(profile) = draft() else {
            return;
        };
        spawn(async move {
            saving.set(true);
            match api::save_profile(profile).await {
                Ok(saved) => {
                    draft.set(Some(saved));
                    toast.success("Profile saved successfully".to_string(), ToastOptions::new());
                }
                Err(e) => {
                    tracing::error!("Failed to save profile: {e}");
                    toast.error("Failed to save profile".to_string(), ToastOptions::new());
                }
            }
            saving.set(false);
        });
    };

    let Some(profile) = draft() else {
        return match loaded() {
            Loadable::Failed(_) => rsx! { ErrorState { message: "Failed to load profile" } },
            _ => rsx! { LoadingSpinner {} },
        };
    };

    rsx! {
        div {
            class: "view-page",
            div {
                class: "view-header",
                div {
                    h1 { class: "view-title", "Profile" }
                    p { class: "view-muted", "This is what visitors see on your portfolio." }
                }
                Button {
                    disabled: saving(),
                    onclick: handle_save,
                    if saving() { "Saving..." } else { "Save profile" }
                }
            }

            section {
                class: "card",
                h2 { class: "card-title", "Basic information" }
                div {
                    class: "form-field",
                    Label { html_for: "full_name", "Full name" }
                    Input {
                        id: "full_name",
                        value: profile.full_name.clone().unwrap_or_default(),
                        oninput: move |e: FormEvent| edit(&|p| p.set_field(ProfileField::FullName(e.value()))),
                    }
                }
                div {
                    class: "form-field",
                    Label { html_for: "email", "Email" }
                    Input {
                        id: "email",
                        r#type: "email",
                        value: profile.email.clone(),
                        oninput: move |e: FormEvent| edit(&|p| p.set_field(ProfileField::Email(e.value()))),
                    }
                }
                div {
                    class: "form-field",
                    Label { html_for: "avatar_url", "Avatar URL" }
                    Input {
                        id: "avatar_url",
                        value: profile.avatar_url.clone().unwrap_or_default(),
                        placeholder: "https://",
                        oninput: move |e: FormEvent| edit(&|p| p.set_field(ProfileField::AvatarUrl(e.value()))),
                    }
                }
                div {
                    class: "form-field",
                    Label { html_for: "bio", "Bio" }
                    Textarea {
                        id: "bio",
                        value: profile.bio.clone().unwrap_or_default(),
                        placeholder: "Tell visitors about yourself",
                        oninput: move |e: FormEvent| edit(&|p| p.set_field(ProfileField::Bio(e.value()))),
                    }
                }
                Toggle {
                    id: "is_public",
                    label: "Portfolio is public",
                    checked: profile.is_public,
                    onchange: move |checked: bool| edit(&|p| p.set_field(ProfileField::IsPublic(checked))),
                }
            }

            section {
                class: "card",
                h2 { class: "card-title", "Skills" }
                StringListEditor {
                    id: "skill",
                    items: profile.skills.clone(),
                    placeholder: "e.g. Rust",
                    add_label: "Add skill",
                    on_edit: move |change: ListEdit<String>| edit(&|p| {
                        p.edit_skills(change.clone());
                    }),
                }
            }

            section {
                class: "card",
                h2 { class: "card-title", "Experience" }
                for (index, entry) in profile.experience.iter().enumerate() {
                    div {
                        key: "experience-{index}",
                        class: "entry-card",
                        for (field, label, kind) in EXPERIENCE_FIELDS {
                            div {
                                class: "form-field",
                                Label { html_for: "experience-{index}-{label}", "{label}" }
                                Input {
                                    id: "experience-{index}-{label}",
                                    r#type: kind.to_string(),
                                    value: field.get(entry).to_string(),
                                    oninput: move |e: FormEvent| edit(&|p| {
                                        p.set_experience_field(index, field, e.value());
                                    }),
                                }
                            }
                        }
                        Button {
                            variant: ButtonVariant::Destructive,
                            onclick: move |_| edit(&|p| {
                                p.edit_experience(ListEdit::Remove(index));
                            }),
                            Icon { icon: FaTrash, width: 12, height: 12 }
                            " Remove"
                        }
                    }
                }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| edit(&|p| {
                        p.edit_experience(ListEdit::Push(ExperienceEntry::default()));
                    }),
                    Icon { icon: FaPlus, width: 12, height: 12 }
                    " Add experience"
                }
            }

            section {
                class: "card",
                h2 { class: "card-title", "Education" }
                for (index, entry) in profile.education.iter().enumerate() {
                    div {
                        key: "education-{index}",
                        class: "entry-card",
                        for (field, label, kind) in EDUCATION_FIELDS {
                            div {
                                class: "form-field",
                                Label { html_for: "education-{index}-{label}", "{label}" }
                                Input {
                                    id: "education-{index}-{label}",
                                    r#type: kind.to_string(),
                                    value: field.get(entry).to_string(),
                                    oninput: move |e: FormEvent| edit(&|p| {
                                        p.set_education_field(index, field, e.value());
                                    }),
                                }
                            }
                        }
                        Button {
                            variant: ButtonVariant::Destructive,
                            onclick: move |_| edit(&|p| {
                                p.edit_education(ListEdit::Remove(index));
                            }),
                            Icon { icon: FaTrash, width: 12, height: 12 }
                            " Remove"
                        }
                    }
                }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| edit(&|p| {
                        p.edit_education(ListEdit::Push(EducationEntry::default()));
                    }),
                    Icon { icon: FaPlus, width: 12, height: 12 }
                    " Add education"
                }
            }

            section {
                class: "card",
                h2 { class: "card-title", "Hobbies" }
                StringListEditor {
                    id: "hobby",
                    items: profile.hobbies.clone(),
                    add_label: "Add hobby",
                    on_edit: move |change: ListEdit<String>| edit(&|p| {
                        p.edit_hobbies(change.clone());
                    }),
                }
            }

            section {
                class: "card",
                h2 { class: "card-title", "Social links" }
                for platform in SocialPlatform::ALL {
                    div {
                        class: "form-field",
                        Label { html_for: "social-{platform.label()}", "{platform.label()}" }
                        Input {
                            id: "social-{platform.label()}",
                            value: platform.get(&profile.social_links).to_string(),
                            placeholder: "https://",
                            oninput: move |e: FormEvent| edit(&|p| p.set_social_link(platform, e.value())),
                        }
                    }
                }
            }
        }
    }
}
