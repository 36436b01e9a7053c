use dioxus::prelude::*;
use store::{Loadable, Template};

use crate::components::{
    Button, ButtonVariant, EmptyState, ErrorState, LoadingSpinner, ToastOptions, use_toast,
};
use crate::icons::{FaCheck, FaCrown};
use crate::{use_loader, Icon};

#[derive(Clone, PartialEq)]
struct Gallery {
    templates: Vec<Template>,
    selected: Option<String>,
}

async fn load_gallery() -> Loadable<Gallery> {
    let templates = match api::list_templates().await {
        Ok(templates) => templates,
        Err(e) => return Loadable::Failed(e.to_string()),
    };
    if templates.is_empty() {
        return Loadable::Empty;
    }
    // A missing profile only means nothing is selected yet.
    let selected = match api::get_profile().await {
        Ok(profile) => profile.and_then(|p| p.template_id),
        Err(e) => {
            tracing::warn!("Could not load current template: {e}");
            None
        }
    };
    Loadable::Loaded(Gallery { templates, selected })
}

#[component]
pub fn TemplateGalleryView() -> Element {
    let toast = use_toast();
    let gallery = use_loader("Failed to load templates", load_gallery);
    let mut selected = use_signal(|| None::<String>);
    let mut pending = use_signal(|| None::<String>);

    use_effect(move || {
        if let Loadable::Loaded(g) = gallery() {
            selected.set(g.selected);
        }
    });

    let mut choose = move |template_id: String| {
        spawn(async move {
            pending.set(Some(template_id.clone()));
            match api::select_template(template_id).await {
                Ok(profile) => {
                    selected.set(profile.template_id);
                    toast.success("Template selected successfully".to_string(), ToastOptions::new());
                }
                Err(e) => {
                    tracing::error!("Failed to select template: {e}");
                    toast.error("Failed to select template".to_string(), ToastOptions::new());
                }
            }
            pending.set(None);
        });
    };

    let body = match gallery() {
        Loadable::Loading => rsx! { LoadingSpinner {} },
        Loadable::Failed(_) => rsx! { ErrorState { message: "Failed to load templates" } },
        Loadable::Empty => rsx! {
            EmptyState { title: "No templates available at the moment." }
        },
        Loadable::Loaded(g) => rsx! {
            div {
                class: "template-grid",
                for template in g.templates {
                    {
                        let is_selected = selected().as_deref() == Some(template.id.as_str());
                        let is_pending = pending().as_deref() == Some(template.id.as_str());
                        let id = template.id.clone();
                        rsx! {
                            article {
                                key: "{template.id}",
                                class: if is_selected { "template-card selected" } else { "template-card" },
                                if template.is_premium {
                                    span {
                                        class: "premium-badge",
                                        Icon { icon: FaCrown, width: 10, height: 10 }
                                        " Premium"
                                    }
                                }
                                img { class: "template-preview", src: "{template.preview_url}", alt: "{template.name}" }
                                div {
                                    class: "template-body",
                                    h3 { "{template.name}" }
                                    if let Some(description) = template.description.as_deref() {
                                        p { class: "view-muted", "{description}" }
                                    }
                                    if is_selected {
                                        Button {
                                            variant: ButtonVariant::Secondary,
                                            class: "w-full",
                                            disabled: true,
                                            Icon { icon: FaCheck, width: 12, height: 12 }
                                            " Selected"
                                        }
                                    } else {
                                        Button {
                                            class: "w-full",
                                            disabled: pending().is_some(),
                                            onclick: move |_| choose(id.clone()),
                                            if is_pending { "Selecting..." } else { "Select template" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    };

    rsx! {
        div {
            class: "view-page",
            div {
                class: "view-header",
                h1 { class: "view-title", "Template gallery" }
            }
            {body}
        }
    }
}
