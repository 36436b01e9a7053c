//! # API crate, the fullstack server functions for Spotlight
//!
//! This crate defines every Dioxus server function the web frontend calls,
//! along with the modules they depend on. The browser never talks to the data
//! service or the identity provider directly; it goes through these functions,
//! which attach the session user and enforce ownership.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | `server` | Hosted identity provider (OAuth 2.0 + PKCE) and session helpers |
//! | [`config`] | — | Environment configuration with placeholder fallbacks |
//! | [`db`] | `server` | Lazily built, process-wide data service client |
//! | [`models`] | — | The signed-in [`UserInfo`] |
//!
//! ## Server functions exposed here
//!
//! Every public `async fn` in this file is a Dioxus server function, annotated with
//! `#[get(...)]` or `#[post(...)]` and compiled twice: once with full server logic
//! (behind `#[cfg(feature = "server")]`) and once as a thin client stub that simply
//! forwards the call over HTTP.
//!
//! - **Authentication**: `get_current_user`, `get_sign_in_url`, `get_sign_up_url`, `sign_out`
//! - **Profile**: `get_profile`, `save_profile`
//! - **Projects**: `list_projects`, `get_project`, `save_project`
//! - **Templates**: `list_templates`, `select_template`
//! - **Settings**: `get_settings`, `save_settings`
//! - **Public**: `get_public_portfolio`
//!
//! Everything except `get_public_portfolio`, `list_templates` and the auth
//! functions requires a signed-in session and fails with `"Not authenticated"`
//! otherwise. Saved records always belong to the session user, whatever the
//! client sent.

use dioxus::prelude::*;

pub mod auth;
pub mod config;
pub mod db;
pub mod models;

pub use models::UserInfo;
pub use store::{Profile, Project, PublicPortfolio, Template, UserSettings};

#[cfg(feature = "server")]
fn store_failure(operation: &'static str) -> impl Fn(store::StoreError) -> ServerFnError {
    move |e| {
        if e.is_rejected() {
            tracing::warn!(operation, reason = %e, "write refused");
        } else {
            tracing::error!(operation, error = %e, "data service call failed");
        }
        ServerFnError::new(e.to_string())
    }
}

#[cfg(feature = "server")]
async fn session_user_id(session: &tower_sessions::Session) -> Result<String, ServerFnError> {
    auth::require_user_id(session)
        .await
        .map_err(ServerFnError::new)
}

#[cfg(feature = "server")]
fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339()
}

// ---- authentication ----

/// Get the current authenticated user from the session.
#[cfg(feature = "server")]
#[get("/api/auth/me", session: tower_sessions::Session)]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    auth::current_user(&session)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/me")]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    Ok(None)
}

#[cfg(feature = "server")]
async fn hosted_screen_url(
    session: &tower_sessions::Session,
    screen: auth::AuthScreen,
) -> Result<String, ServerFnError> {
    let provider = auth::IdentityProvider::new(&config::AppConfig::from_env())
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    let (url, pending) = provider.authorize_url(screen);
    auth::begin_sign_in(session, &pending)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    Ok(url)
}

/// URL of the hosted sign-in screen.
#[cfg(feature = "server")]
#[get("/api/auth/sign-in-url", session: tower_sessions::Session)]
pub async fn get_sign_in_url() -> Result<String, ServerFnError> {
    hosted_screen_url(&session, auth::AuthScreen::SignIn).await
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/sign-in-url")]
pub async fn get_sign_in_url() -> Result<String, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// URL of the hosted sign-up screen.
#[cfg(feature = "server")]
#[get("/api/auth/sign-up-url", session: tower_sessions::Session)]
pub async fn get_sign_up_url() -> Result<String, ServerFnError> {
    hosted_screen_url(&session, auth::AuthScreen::SignUp).await
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/sign-up-url")]
pub async fn get_sign_up_url() -> Result<String, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Sign out by clearing the session.
#[cfg(feature = "server")]
#[post("/api/auth/sign-out", session: tower_sessions::Session)]
pub async fn sign_out() -> Result<(), ServerFnError> {
    session
        .flush()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/sign-out")]
pub async fn sign_out() -> Result<(), ServerFnError> {
    Ok(())
}

// ---- profile ----

/// The session user's saved profile, if any.
#[cfg(feature = "server")]
#[get("/api/profile", session: tower_sessions::Session)]
pub async fn get_profile() -> Result<Option<Profile>, ServerFnError> {
    let user_id = session_user_id(&session).await?;
    db::get_repository()
        .await
        .user_profile(&user_id)
        .await
        .map_err(store_failure("get_profile"))
}

#[cfg(not(feature = "server"))]
#[get("/api/profile")]
pub async fn get_profile() -> Result<Option<Profile>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/profile/save", session: tower_sessions::Session)]
pub async fn save_profile(profile: Profile) -> Result<Profile, ServerFnError> {
    let user_id = session_user_id(&session).await?;
    db::get_repository()
        .await
        .save_own_profile(&user_id, profile, &now_rfc3339())
        .await
        .map_err(store_failure("save_profile"))
}

#[cfg(not(feature = "server"))]
#[post("/api/profile/save")]
pub async fn save_profile(profile: Profile) -> Result<Profile, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

// ---- projects ----

/// The session user's projects, most recently updated first.
#[cfg(feature = "server")]
#[get("/api/projects", session: tower_sessions::Session)]
pub async fn list_projects() -> Result<Vec<Project>, ServerFnError> {
    let user_id = session_user_id(&session).await?;
    db::get_repository()
        .await
        .user_projects(&user_id)
        .await
        .map_err(store_failure("list_projects"))
}

#[cfg(not(feature = "server"))]
#[get("/api/projects")]
pub async fn list_projects() -> Result<Vec<Project>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// One of the session user's projects; `None` when it does not exist or belongs to someone else.
#[cfg(feature = "server")]
#[get("/api/project/:project_id", session: tower_sessions::Session)]
pub async fn get_project(project_id: String) -> Result<Option<Project>, ServerFnError> {
    let user_id = session_user_id(&session).await?;
    match db::get_repository().await.project(&project_id, &user_id).await {
        Ok(project) => Ok(Some(project)),
        Err(e) if e.is_not_found() => Ok(None),
        Err(e) => Err(store_failure("get_project")(e)),
    }
}

#[cfg(not(feature = "server"))]
#[get("/api/project/:project_id")]
pub async fn get_project(project_id: String) -> Result<Option<Project>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Create or update a project. A blank id creates a new project.
#[cfg(feature = "server")]
#[post("/api/projects/save", session: tower_sessions::Session)]
pub async fn save_project(project: Project) -> Result<Project, ServerFnError> {
    let user_id = session_user_id(&session).await?;
    db::get_repository()
        .await
        .save_own_project(
            &user_id,
            project,
            || uuid::Uuid::new_v4().to_string(),
            &now_rfc3339(),
        )
        .await
        .map_err(store_failure("save_project"))
}

#[cfg(not(feature = "server"))]
#[post("/api/projects/save")]
pub async fn save_project(project: Project) -> Result<Project, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

// ---- templates ----

/// Every template, by name.
#[cfg(feature = "server")]
#[get("/api/templates")]
pub async fn list_templates() -> Result<Vec<Template>, ServerFnError> {
    db::get_repository()
        .await
        .templates()
        .await
        .map_err(store_failure("list_templates"))
}

#[cfg(not(feature = "server"))]
#[get("/api/templates")]
pub async fn list_templates() -> Result<Vec<Template>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Record `template_id` as the profile's template. The template must exist.
#[cfg(feature = "server")]
#[post("/api/templates/select", session: tower_sessions::Session)]
pub async fn select_template(template_id: String) -> Result<Profile, ServerFnError> {
    let user_id = session_user_id(&session).await?;
    db::get_repository()
        .await
        .select_template(&user_id, &template_id, &now_rfc3339())
        .await
        .map_err(store_failure("select_template"))
}

#[cfg(not(feature = "server"))]
#[post("/api/templates/select")]
pub async fn select_template(template_id: String) -> Result<Profile, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

// ---- settings ----

/// The session user's settings, or the defaults if none were saved yet.
#[cfg(feature = "server")]
#[get("/api/settings", session: tower_sessions::Session)]
pub async fn get_settings() -> Result<UserSettings, ServerFnError> {
    let user_id = session_user_id(&session).await?;
    let settings = db::get_repository()
        .await
        .user_settings(&user_id)
        .await
        .map_err(store_failure("get_settings"))?;

    Ok(settings.unwrap_or_else(|| UserSettings::defaults_for(user_id)))
}

#[cfg(not(feature = "server"))]
#[get("/api/settings")]
pub async fn get_settings() -> Result<UserSettings, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/settings/save", session: tower_sessions::Session)]
pub async fn save_settings(settings: UserSettings) -> Result<UserSettings, ServerFnError> {
    let user_id = session_user_id(&session).await?;
    db::get_repository()
        .await
        .save_own_settings(&user_id, settings, &now_rfc3339())
        .await
        .map_err(store_failure("save_settings"))
}

#[cfg(not(feature = "server"))]
#[post("/api/settings/save")]
pub async fn save_settings(settings: UserSettings) -> Result<UserSettings, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

// ---- public portfolio ----

/// Public portfolio by user id or, failing that, portfolio slug. `None` when
/// the profile does not exist or is private.
#[cfg(feature = "server")]
#[get("/api/portfolio/:handle")]
pub async fn get_public_portfolio(handle: String) -> Result<Option<PublicPortfolio>, ServerFnError> {
    db::get_repository()
        .await
        .resolve_portfolio(&handle)
        .await
        .map_err(store_failure("get_public_portfolio"))
}

#[cfg(not(feature = "server"))]
#[get("/api/portfolio/:handle")]
pub async fn get_public_portfolio(handle: String) -> Result<Option<PublicPortfolio>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
