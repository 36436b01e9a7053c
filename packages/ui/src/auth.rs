//! Authentication context, hosted sign-in buttons and the dashboard guard.

use api::UserInfo;
use dioxus::prelude::*;

use crate::components::LoadingSpinner;

pub const SIGN_IN_PATH: &str = "/sign-in";

const PROTECTED_PREFIX: &str = "/dashboard";

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<UserInfo>,
    /// True until the first session check has answered.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl AuthState {
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }
}

/// Outcome of the guard for one navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Session status not known yet.
    Pending,
    RedirectToSignIn,
    Granted,
}

/// `/dashboard` and everything below it.
pub fn is_protected_path(path: &str) -> bool {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    path == PROTECTED_PREFIX
        || path
            .strip_prefix(PROTECTED_PREFIX)
            .is_some_and(|rest| rest.starts_with('/'))
}

pub fn check_access(path: &str, state: &AuthState) -> Access {
    if !is_protected_path(path) {
        return Access::Granted;
    }
    if state.loading {
        Access::Pending
    } else if state.is_signed_in() {
        Access::Granted
    } else {
        Access::RedirectToSignIn
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user signs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);

    // Fetch the current user on mount
    let _ = use_resource(move || async move {
        let user = match api::get_current_user().await {
            Ok(user) => user,
            Err(e) => {
                tracing::error!("Failed to load session: {}", e);
                None
            }
        };
        auth_state.set(AuthState {
            user,
            loading: false,
        });
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Renders `children` only for signed-in users; anyone else on a protected
/// path is sent to the sign-in page.
#[component]
pub fn RequireAuth(path: String, children: Element) -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    // Track the path prop so the effect reruns on navigation
    let mut current_path = use_signal(|| path.clone());
    if *current_path.peek() != path {
        current_path.set(path.clone());
    }

    let access = check_access(&path, &auth());

    use_effect(move || {
        if check_access(&current_path(), &auth()) == Access::RedirectToSignIn {
            nav.replace(SIGN_IN_PATH);
        }
    });

    match access {
        Access::Pending => rsx! {
            div { class: "page-loading", LoadingSpinner {} }
        },
        Access::RedirectToSignIn => rsx! {},
        Access::Granted => rsx! { {children} },
    }
}

#[cfg(target_arch = "wasm32")]
fn redirect(url: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(url);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn redirect(url: &str) {
    tracing::debug!("redirect to {url} requested outside the browser");
}

/// Sends the browser to the identity provider's hosted sign-in or sign-up screen.
#[component]
pub fn HostedAuthButton(
    #[props(default)] sign_up: bool,
    label: String,
    #[props(default = "btn btn-primary".to_string())] class: String,
) -> Element {
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let onclick = move |_| async move {
        loading.set(true);
        error.set(None);
        let url = if sign_up {
            api::get_sign_up_url().await
        } else {
            api::get_sign_in_url().await
        };
        match url {
            Ok(url) => redirect(&url),
            Err(e) => {
                tracing::error!("Failed to get sign-in URL: {}", e);
                error.set(Some("Could not reach the sign-in service".to_string()));
                loading.set(false);
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            disabled: loading(),
            onclick: onclick,
            if loading() {
                "Redirecting..."
            } else {
                "{label}"
            }
        }
        if let Some(message) = error() {
            p { class: "form-error", "{message}" }
        }
    }
}

/// Button to sign out the current user.
#[component]
pub fn SignOutButton(
    #[props(default = "Sign out".to_string())] label: String,
    #[props(default)] class: String,
) -> Element {
    let mut auth_state = use_auth();

    let onclick = move |_| async move {
        match api::sign_out().await {
            Ok(()) => {
                auth_state.set(AuthState {
                    user: None,
                    loading: false,
                });
                redirect("/");
            }
            Err(e) => tracing::error!("Failed to sign out: {}", e),
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
