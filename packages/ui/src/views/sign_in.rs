use dioxus::prelude::*;

use crate::{use_auth, HostedAuthButton};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AuthMode {
    SignIn,
    SignUp,
}

/// Message for the `error` query parameter set by the identity callback.
fn callback_error_message(kind: &str) -> Option<&'static str> {
    match kind {
        "" => None,
        "invalid_state" => Some("Your sign-in link expired. Please try again."),
        "config_error" => Some("Sign-in is not configured on this server."),
        _ => Some("Sign-in failed. Please try again."),
    }
}

#[cfg(target_arch = "wasm32")]
fn callback_error_kind() -> String {
    let search = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    search
        .trim_start_matches('?')
        .split('&')
        .find_map(|pair| pair.strip_prefix("error="))
        .unwrap_or_default()
        .to_string()
}

#[cfg(not(target_arch = "wasm32"))]
fn callback_error_kind() -> String {
    String::new()
}

/// Entry point to the hosted sign-in and sign-up screens.
#[component]
pub fn SignInView(mode: AuthMode) -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let error_kind = use_hook(callback_error_kind);

    use_effect(move || {
        if auth().is_signed_in() {
            nav.replace("/dashboard");
        }
    });

    let (title, subtitle, label, other_prompt, other_label, other_href) = match mode {
        AuthMode::SignIn => (
            "Welcome back",
            "Sign in to manage your portfolio.",
            "Sign in",
            "Don't have an account?",
            "Sign up",
            "/sign-up",
        ),
        AuthMode::SignUp => (
            "Create your account",
            "Start building your portfolio in minutes.",
            "Sign up",
            "Already have an account?",
            "Sign in",
            "/sign-in",
        ),
    };

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card",
                h1 { class: "view-title", "{title}" }
                p { class: "view-muted", "{subtitle}" }
                if let Some(message) = callback_error_message(&error_kind) {
                    p { class: "form-error", "{message}" }
                }
                HostedAuthButton {
                    sign_up: mode == AuthMode::SignUp,
                    label: label.to_string(),
                    class: "btn btn-primary btn-block",
                }
                p {
                    class: "auth-switch",
                    "{other_prompt} "
                    Link { to: other_href, "{other_label}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_callback_error_messages() {
        assert_eq!(callback_error_message(""), None);
        assert!(callback_error_message("invalid_state")
            .is_some_and(|m| m.contains("expired")));
        assert_eq!(
            callback_error_message("oauth_error"),
            Some("Sign-in failed. Please try again.")
        );
    }
}
