use dioxus::prelude::*;

use ui::components::ToastProvider;
use ui::AuthProvider;
use views::{
    Dashboard, DashboardShell, EditProject, Home, NewProject, NotFound, Portfolio, Profile,
    ProjectDetails, Projects, Settings, SignIn, SignUp, SiteLayout, Templates,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteLayout)]
        #[route("/")]
        Home {},
        #[route("/portfolio/:user_id")]
        Portfolio { user_id: String },
        #[route("/sign-in")]
        SignIn {},
        #[route("/sign-up")]
        SignUp {},
    #[end_layout]
    #[nest("/dashboard")]
        #[layout(DashboardShell)]
            #[route("/")]
            Dashboard {},
            #[route("/profile")]
            Profile {},
            #[route("/projects")]
            Projects {},
            #[route("/projects/new")]
            NewProject {},
            #[route("/projects/:project_id")]
            ProjectDetails { project_id: String },
            #[route("/projects/:project_id/edit")]
            EditProject { project_id: String },
            #[route("/templates")]
            Templates {},
            #[route("/settings")]
            Settings {},
        #[end_layout]
    #[end_nest]
    #[layout(SiteLayout)]
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    {
        match tokio::runtime::Runtime::new() {
            Ok(runtime) => runtime.block_on(launch_server()),
            Err(e) => eprintln!("Failed to start the tokio runtime: {e}"),
        }
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
async fn launch_server() {
    use axum::routing::get;
    use dioxus::server::{DioxusRouterExt, ServeConfig};
    use tower_sessions::cookie::time::Duration;
    use tower_sessions::cookie::SameSite;
    use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};
    use tracing_subscriber::EnvFilter;

    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Logs a warning per missing variable.
    let config = api::config::AppConfig::from_env();
    tracing::info!(
        data_api = %config.data_api_url,
        issuer = %config.identity_issuer_url,
        "configuration loaded"
    );

    // Sessions only hold the signed-in user and the pending OAuth state.
    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_secure(false) // Set to true in production with HTTPS
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    let router = axum::Router::new()
        .route("/auth/callback", get(auth_callback))
        .serve_dioxus_application(ServeConfig::new(), App)
        .layer(session_layer);

    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", addr, e);
            return;
        }
    };
    tracing::info!("Server listening on {}", addr);

    if let Err(e) = axum::serve(listener, router.into_make_service()).await {
        tracing::error!("Server error: {}", e);
    }
}

/// Where the identity provider sends the browser after its hosted screen.
#[cfg(feature = "server")]
async fn auth_callback(
    axum::extract::Query(params): axum::extract::Query<std::collections::HashMap<String, String>>,
    session: tower_sessions::Session,
) -> axum::response::Redirect {
    use axum::response::Redirect;

    if let Some(error) = params.get("error") {
        tracing::warn!("Identity provider returned an error: {}", error);
        return Redirect::to("/sign-in?error=oauth_error");
    }
    let Some(code) = params.get("code") else {
        tracing::error!("Auth callback missing code");
        return Redirect::to("/sign-in?error=oauth_error");
    };
    let Some(state) = params.get("state") else {
        tracing::error!("Auth callback missing state");
        return Redirect::to("/sign-in?error=invalid_state");
    };

    match complete_callback(&session, code, state).await {
        Ok(()) => Redirect::to("/dashboard"),
        Err(e) => {
            tracing::error!("Sign-in failed: {}", e);
            Redirect::to(&format!("/sign-in?error={}", e.kind()))
        }
    }
}

#[cfg(feature = "server")]
async fn complete_callback(
    session: &tower_sessions::Session,
    code: &str,
    state: &str,
) -> Result<(), api::auth::IdentityError> {
    let pending = api::auth::take_pending(session).await?;
    let provider = api::auth::IdentityProvider::new(&api::config::AppConfig::from_env())?;
    let user = provider.exchange_code(code, state, pending).await?;
    api::auth::complete_sign_in(session, &user).await?;
    tracing::info!(user = %user.id, "signed in");
    Ok(())
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: ui::DX_COMPONENTS_CSS }

        AuthProvider {
            ToastProvider {
                Router::<Route> {}
            }
        }
    }
}
