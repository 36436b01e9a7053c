//! Session keys and helpers.

use tower_sessions::Session;

use super::provider::{IdentityError, PendingAuth};
use crate::models::UserInfo;

/// Key for storing the signed-in user in the session.
pub const SESSION_USER_KEY: &str = "user";

/// Key for the CSRF state and PKCE verifier of an in-flight sign-in.
pub const SESSION_PENDING_AUTH_KEY: &str = "pending_auth";

pub async fn current_user(session: &Session) -> Result<Option<UserInfo>, IdentityError> {
    session
        .get(SESSION_USER_KEY)
        .await
        .map_err(|e| IdentityError::Session(e.to_string()))
}

/// The signed-in user's id, or an error for anonymous callers.
pub async fn require_user_id(session: &Session) -> Result<String, String> {
    match current_user(session).await {
        Ok(Some(user)) => Ok(user.id),
        Ok(None) => Err("Not authenticated".to_string()),
        Err(e) => Err(e.to_string()),
    }
}

pub async fn begin_sign_in(session: &Session, pending: &PendingAuth) -> Result<(), IdentityError> {
    session
        .insert(SESSION_PENDING_AUTH_KEY, pending)
        .await
        .map_err(|e| IdentityError::Session(e.to_string()))
}

/// Take the pending sign-in out of the session; it is single use.
pub async fn take_pending(session: &Session) -> Result<PendingAuth, IdentityError> {
    session
        .remove::<PendingAuth>(SESSION_PENDING_AUTH_KEY)
        .await
        .map_err(|e| IdentityError::Session(e.to_string()))?
        .ok_or(IdentityError::MissingState)
}

/// Store the user and rotate the session id.
pub async fn complete_sign_in(session: &Session, user: &UserInfo) -> Result<(), IdentityError> {
    session
        .cycle_id()
        .await
        .map_err(|e| IdentityError::Session(e.to_string()))?;
    session
        .insert(SESSION_USER_KEY, user)
        .await
        .map_err(|e| IdentityError::Session(e.to_string()))?;
    session
        .save()
        .await
        .map_err(|e| IdentityError::Session(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tower_sessions::MemoryStore;

    fn session() -> Session {
        Session::new(None, Arc::new(MemoryStore::default()), None)
    }

    fn user() -> UserInfo {
        UserInfo {
            id: "user_1".to_string(),
            email: "ada@example.com".to_string(),
            first_name: Some("Ada".to_string()),
            last_name: None,
            image_url: None,
        }
    }

    #[tokio::test]
    async fn test_anonymous_session_is_rejected() {
        let session = session();
        assert_eq!(
            require_user_id(&session).await,
            Err("Not authenticated".to_string())
        );
    }

    #[tokio::test]
    async fn test_signed_in_user_id() {
        let session = session();
        complete_sign_in(&session, &user()).await.unwrap();
        assert_eq!(require_user_id(&session).await, Ok("user_1".to_string()));
        assert_eq!(current_user(&session).await.unwrap(), Some(user()));
    }

    #[tokio::test]
    async fn test_pending_auth_is_single_use() {
        let session = session();
        let pending = PendingAuth {
            state: "s".to_string(),
            verifier: "v".to_string(),
        };
        begin_sign_in(&session, &pending).await.unwrap();
        assert_eq!(take_pending(&session).await.unwrap(), pending);
        assert!(matches!(
            take_pending(&session).await,
            Err(IdentityError::MissingState)
        ));
    }
}
