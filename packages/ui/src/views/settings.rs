use dioxus::prelude::*;
use store::{Loadable, ThemePreference, UserSettings};

use crate::components::{
    Button, ButtonVariant, ErrorState, Label, LoadingSpinner, ToastOptions, Toggle, use_toast,
};
use crate::icons::{FaBell, FaCircleHalfStroke, FaGlobe, FaMoon, FaSun, FaUser};
use crate::{apply_theme, use_loader, Icon};

#[component]
fn ThemeIcon(theme: ThemePreference) -> Element {
    match theme {
        ThemePreference::Light => rsx! { Icon { icon: FaSun, width: 14, height: 14 } },
        ThemePreference::Dark => rsx! { Icon { icon: FaMoon, width: 14, height: 14 } },
        ThemePreference::System => rsx! { Icon { icon: FaCircleHalfStroke, width: 14, height: 14 } },
    }
}

#[component]
pub fn SettingsView() -> Element {
    let nav = use_navigator();
    let toast = use_toast();
    let mut draft = use_signal(|| None::<UserSettings>);
    let mut saving = use_signal(|| false);
    let mut slug_error = use_signal(|| None::<String>);

    let loaded = use_loader("Failed to load settings", || async {
        Loadable::from_result(api::get_settings().await)
    });

    use_effect(move || {
        if let Loadable::Loaded(settings) = loaded() {
            draft.set(Some(settings));
        }
    });

    let handle_save = move |_| {
        let Some(settings) = draft() else {
            return;
        };
        spawn(async move {
            saving.set(true);
            slug_error.set(None);
            match api::save_settings(settings).await {
                Ok(saved) => {
                    apply_theme(saved.theme_preference);
                    draft.set(Some(saved));
                    toast.success("Settings saved successfully".to_string(), ToastOptions::new());
                }
                Err(e) => {
                    tracing::error!("Failed to save settings: {e}");
                    slug_error.set(Some(e.to_string()));
                    toast.error("Failed to save settings".to_string(), ToastOptions::new());
                }
            }
            saving.set(false);
        });
    };

    let Some(settings) = draft() else {
        return match loaded() {
            Loadable::Failed(_) => rsx! { ErrorState { message: "Failed to load settings" } },
            _ => rsx! { LoadingSpinner {} },
        };
    };

    let slug = settings.portfolio_url_slug.clone().unwrap_or_default();
    let public_path = match settings.slug() {
        Some(slug) => format!("/portfolio/{slug}"),
        None => format!("/portfolio/{}", settings.user_id),
    };

    rsx! {
        div {
            class: "view-page",
            div {
                class: "view-header",
                h1 { class: "view-title", "Settings" }
                Button {
                    disabled: saving(),
                    onclick: handle_save,
                    if saving() { "Saving..." } else { "Save changes" }
                }
            }

            section {
                class: "card",
                h2 {
                    class: "card-title",
                    Icon { icon: FaUser, width: 16, height: 16 }
                    " Account"
                }
                div {
                    class: "form-field",
                    Label { html_for: "portfolio_url_slug", "Portfolio URL slug" }
                    div {
                        class: "input-group",
                        span { class: "input-prefix", "/portfolio/" }
                        input {
                            id: "portfolio_url_slug",
                            class: "form-input",
                            r#type: "text",
                            value: "{slug}",
                            placeholder: "your-username",
                            oninput: move |e: FormEvent| {
                                let value = e.value();
                                if let Some(s) = draft.write().as_mut() {
                                    s.portfolio_url_slug = if value.is_empty() { None } else { Some(value) };
                                }
                            },
                        }
                    }
                    if let Some(error) = slug_error() {
                        p { class: "form-error", "{error}" }
                    }
                    p {
                        class: "form-hint",
                        "This will be your public portfolio URL. Leave empty to use your user ID. Currently: "
                        Link { to: public_path.clone(), "{public_path}" }
                    }
                }
            }

            section {
                class: "card",
                h2 { class: "card-title", "Appearance" }
                div {
                    class: "theme-options",
                    role: "radiogroup",
                    for theme in ThemePreference::ALL {
                        label {
                            class: if settings.theme_preference == theme { "theme-option selected" } else { "theme-option" },
                            input {
                                r#type: "radio",
                                name: "theme_preference",
                                value: "{theme.as_str()}",
                                checked: settings.theme_preference == theme,
                                onchange: move |_| {
                                    apply_theme(theme);
                                    if let Some(s) = draft.write().as_mut() {
                                        s.theme_preference = theme;
                                    }
                                },
                            }
                            ThemeIcon { theme }
                            span { "{theme.label()}" }
                        }
                    }
                }
                p { class: "form-hint", "Choose how Spotlight appears to you. System uses your device's theme." }
            }

            section {
                class: "card",
                h2 {
                    class: "card-title",
                    Icon { icon: FaBell, width: 16, height: 16 }
                    " Notifications"
                }
                Toggle {
                    id: "email_notifications",
                    label: "Receive email updates about your portfolio and projects",
                    checked: settings.email_notifications,
                    onchange: move |checked: bool| {
                        if let Some(s) = draft.write().as_mut() {
                            s.email_notifications = checked;
                        }
                    },
                }
            }

            section {
                class: "card",
                h2 {
                    class: "card-title",
                    Icon { icon: FaGlobe, width: 16, height: 16 }
                    " Privacy"
                }
                p {
                    class: "view-muted",
                    "Control who can see your portfolio. You can manage this setting in your Profile page."
                }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| {
                        nav.push("/dashboard/profile");
                    },
                    "Manage privacy settings"
                }
            }
        }
    }
}
