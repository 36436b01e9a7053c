//! Authentication against the hosted identity provider.

#[cfg(feature = "server")]
mod provider;
#[cfg(feature = "server")]
mod session;

#[cfg(feature = "server")]
pub use provider::{AuthScreen, IdentityError, IdentityProvider, PendingAuth};
#[cfg(feature = "server")]
pub use session::{
    begin_sign_in, complete_sign_in, current_user, require_user_id, take_pending,
    SESSION_PENDING_AUTH_KEY, SESSION_USER_KEY,
};
