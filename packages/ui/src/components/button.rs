use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
    Destructive,
}

impl ButtonVariant {
    pub fn class(&self) -> &'static str {
        match self {
            Self::Primary => "btn btn-primary",
            Self::Secondary => "btn btn-secondary",
            Self::Outline => "btn btn-outline",
            Self::Ghost => "btn btn-ghost",
            Self::Destructive => "btn btn-destructive",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default = "button".to_string())] r#type: String,
    #[props(default)] disabled: bool,
    #[props(default)] class: String,
    #[props(default)] title: String,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: "{variant.class()} {class}",
            r#type: "{r#type}",
            title: "{title}",
            disabled,
            onclick: move |evt| {
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_classes_share_base() {
        for variant in [
            ButtonVariant::Primary,
            ButtonVariant::Secondary,
            ButtonVariant::Outline,
            ButtonVariant::Ghost,
            ButtonVariant::Destructive,
        ] {
            assert!(variant.class().starts_with("btn btn-"));
        }
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }
}
