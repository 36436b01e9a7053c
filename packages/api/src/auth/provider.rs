//! # Hosted identity provider, OAuth 2.0 with PKCE
//!
//! Spotlight never handles credentials. Sign-in and sign-up both happen on the
//! provider's hosted screens; this module only builds the redirect and
//! finishes the authorization-code exchange.
//!
//! ## Flow
//!
//! 1. **[`authorize_url`](IdentityProvider::authorize_url)** builds the hosted
//!    screen URL (`prompt=create` for sign-up) with a random CSRF state and a
//!    SHA-256 PKCE challenge. The state and verifier are returned as a
//!    [`PendingAuth`] for the caller to keep in the server session.
//! 2. **[`exchange_code`](IdentityProvider::exchange_code)** runs on
//!    `/auth/callback`: it checks the returned state against the pending one,
//!    trades the code and verifier for an access token, and reads the user's
//!    claims from the provider's userinfo endpoint.
//!
//! Endpoints are derived from the issuer URL: `/oauth/authorize`,
//! `/oauth/token` and `/oauth/userinfo`.

use oauth2::basic::BasicClient;
use oauth2::{
    AuthUrl, AuthorizationCode, ClientId, ClientSecret, CsrfToken, EndpointNotSet, EndpointSet,
    PkceCodeChallenge, PkceCodeVerifier, RedirectUrl, Scope, TokenResponse, TokenUrl,
};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::AppConfig;
use crate::models::UserInfo;

#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("identity provider is misconfigured: {0}")]
    Config(String),
    #[error("no sign-in is in progress for this session")]
    MissingState,
    #[error("returned state does not match the pending sign-in")]
    StateMismatch,
    #[error("token exchange failed: {0}")]
    TokenExchange(String),
    #[error("could not read user info: {0}")]
    UserInfo(String),
    #[error("session error: {0}")]
    Session(String),
}

impl IdentityError {
    /// Short tag used in the `/sign-in?error=` redirect.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Config(_) => "config_error",
            Self::MissingState | Self::StateMismatch => "invalid_state",
            Self::TokenExchange(_) => "oauth_error",
            Self::UserInfo(_) => "userinfo_error",
            Self::Session(_) => "session_error",
        }
    }
}

/// Which hosted screen to open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthScreen {
    SignIn,
    SignUp,
}

/// CSRF state and PKCE verifier of a sign-in that has not come back yet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PendingAuth {
    pub state: String,
    pub verifier: String,
}

/// Standard OpenID Connect claims returned by the userinfo endpoint.
#[derive(Debug, Deserialize)]
struct UserClaims {
    sub: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    given_name: Option<String>,
    #[serde(default)]
    family_name: Option<String>,
    #[serde(default)]
    picture: Option<String>,
}

impl From<UserClaims> for UserInfo {
    fn from(claims: UserClaims) -> Self {
        UserInfo {
            id: claims.sub,
            email: claims.email.unwrap_or_default(),
            first_name: claims.given_name,
            last_name: claims.family_name,
            image_url: claims.picture,
        }
    }
}

/// OAuth client type with auth URL and token URL set.
type ConfiguredClient = oauth2::Client<
    oauth2::basic::BasicErrorResponse,
    oauth2::basic::BasicTokenResponse,
    oauth2::basic::BasicTokenIntrospectionResponse,
    oauth2::StandardRevocableToken,
    oauth2::basic::BasicRevocationErrorResponse,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

pub struct IdentityProvider {
    client_id: ClientId,
    client_secret: Option<ClientSecret>,
    auth_url: AuthUrl,
    token_url: TokenUrl,
    userinfo_url: String,
    redirect_url: RedirectUrl,
}

impl IdentityProvider {
    pub fn new(config: &AppConfig) -> Result<Self, IdentityError> {
        let issuer = config.identity_issuer_url.trim_end_matches('/');
        let endpoint = |path: &str| format!("{issuer}/oauth/{path}");

        Ok(Self {
            client_id: ClientId::new(config.identity_publishable_key.clone()),
            client_secret: config.identity_client_secret.clone().map(ClientSecret::new),
            auth_url: AuthUrl::new(endpoint("authorize"))
                .map_err(|e| IdentityError::Config(e.to_string()))?,
            token_url: TokenUrl::new(endpoint("token"))
                .map_err(|e| IdentityError::Config(e.to_string()))?,
            userinfo_url: endpoint("userinfo"),
            redirect_url: RedirectUrl::new(config.auth_redirect_uri.clone())
                .map_err(|e| IdentityError::Config(e.to_string()))?,
        })
    }

    fn create_client(&self) -> ConfiguredClient {
        let client = BasicClient::new(self.client_id.clone())
            .set_auth_uri(self.auth_url.clone())
            .set_token_uri(self.token_url.clone())
            .set_redirect_uri(self.redirect_url.clone());
        match &self.client_secret {
            Some(secret) => client.set_client_secret(secret.clone()),
            None => client,
        }
    }

    /// Hosted screen URL plus the state to remember until the callback.
    pub fn authorize_url(&self, screen: AuthScreen) -> (String, PendingAuth) {
        let client = self.create_client();
        let (pkce_challenge, pkce_verifier) = PkceCodeChallenge::new_random_sha256();

        let mut request = client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("openid".to_string()))
            .add_scope(Scope::new("email".to_string()))
            .add_scope(Scope::new("profile".to_string()))
            .set_pkce_challenge(pkce_challenge);
        if screen == AuthScreen::SignUp {
            request = request.add_extra_param("prompt", "create");
        }
        let (auth_url, csrf_state) = request.url();

        let pending = PendingAuth {
            state: csrf_state.secret().clone(),
            verifier: pkce_verifier.secret().clone(),
        };
        (auth_url.to_string(), pending)
    }

    /// Finish the flow started by [`authorize_url`](Self::authorize_url).
    pub async fn exchange_code(
        &self,
        code: &str,
        state: &str,
        pending: PendingAuth,
    ) -> Result<UserInfo, IdentityError> {
        if pending.state != state {
            return Err(IdentityError::StateMismatch);
        }

        let http_client = reqwest::ClientBuilder::new()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| IdentityError::TokenExchange(e.to_string()))?;

        let token_result = self
            .create_client()
            .exchange_code(AuthorizationCode::new(code.to_string()))
            .set_pkce_verifier(PkceCodeVerifier::new(pending.verifier))
            .request_async(&http_client)
            .await
            .map_err(|e| IdentityError::TokenExchange(e.to_string()))?;

        self.fetch_user(token_result.access_token().secret()).await
    }

    async fn fetch_user(&self, access_token: &str) -> Result<UserInfo, IdentityError> {
        let claims: UserClaims = Client::new()
            .get(&self.userinfo_url)
            .bearer_auth(access_token)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| IdentityError::UserInfo(e.to_string()))?
            .json()
            .await
            .map_err(|e| IdentityError::UserInfo(e.to_string()))?;

        Ok(claims.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config(issuer: &str) -> AppConfig {
        AppConfig::from_lookup(|key| match key {
            "IDENTITY_PUBLISHABLE_KEY" => Some("pk_test_spotlight".to_string()),
            "IDENTITY_ISSUER_URL" => Some(issuer.to_string()),
            _ => None,
        })
    }

    #[test]
    fn test_sign_up_url_requests_create_prompt() {
        let provider = IdentityProvider::new(&config("https://id.example.com/")).unwrap();

        let (sign_in, pending) = provider.authorize_url(AuthScreen::SignIn);
        assert!(sign_in.starts_with("https://id.example.com/oauth/authorize?"));
        assert!(sign_in.contains("client_id=pk_test_spotlight"));
        assert!(sign_in.contains("code_challenge_method=S256"));
        assert!(sign_in.contains(&format!("state={}", pending.state)));
        assert!(!sign_in.contains("prompt=create"));

        let (sign_up, _) = provider.authorize_url(AuthScreen::SignUp);
        assert!(sign_up.contains("prompt=create"));
    }

    #[tokio::test]
    async fn test_state_mismatch_is_rejected_before_any_request() {
        let provider = IdentityProvider::new(&config("https://id.example.com")).unwrap();
        let pending = PendingAuth {
            state: "expected".to_string(),
            verifier: "v".to_string(),
        };
        let err = provider
            .exchange_code("code", "forged", pending)
            .await
            .unwrap_err();
        assert!(matches!(err, IdentityError::StateMismatch));
        assert_eq!(err.kind(), "invalid_state");
    }

    #[tokio::test]
    async fn test_userinfo_claims_map_to_user() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/oauth/userinfo"))
            .and(header("authorization", "Bearer token-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "sub": "user_2abc",
                "email": "ada@example.com",
                "given_name": "Ada",
                "family_name": "Lovelace",
                "picture": "https://img.example.com/ada.png"
            })))
            .mount(&server)
            .await;

        let provider = IdentityProvider::new(&config(&server.uri())).unwrap();
        let user = provider.fetch_user("token-1").await.unwrap();
        assert_eq!(user.id, "user_2abc");
        assert_eq!(user.display_name(), "Ada Lovelace");
        assert_eq!(user.image_url.as_deref(), Some("https://img.example.com/ada.png"));
    }

    #[tokio::test]
    async fn test_userinfo_rejection_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/oauth/userinfo"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let provider = IdentityProvider::new(&config(&server.uri())).unwrap();
        let err = provider.fetch_user("expired").await.unwrap_err();
        assert_eq!(err.kind(), "userinfo_error");
    }
}
