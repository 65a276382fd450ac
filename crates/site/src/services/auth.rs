//! Authentication service.
//!
//! Login is delegated to the box office; the site never sees a password
//! hash. This module owns every write to the session's identity record -
//! the gate and the role predicates are read-only consumers.

use chrono::Utc;
use tower_sessions::Session;
use tracing::warn;

use meridian_core::Identity;
use meridian_core::access::SessionState;

use crate::api::ApiError;
use crate::error::{clear_sentry_user, set_sentry_user};
use crate::models::{StoredAuth, session_keys};
use crate::state::AppState;

/// Errors from the login/logout flow.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The box office rejected the email/password pair.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The box office failed for a reason other than bad credentials.
    #[error("box-office error: {0}")]
    Api(#[from] ApiError),

    /// The session store could not be written.
    #[error("session error: {0}")]
    Session(#[from] tower_sessions::session::Error),
}

/// Log in with email and password.
///
/// On success the grant is stored in the session and the identity returned.
///
/// # Errors
///
/// Returns `AuthError::InvalidCredentials` if the box office rejects the
/// pair, `AuthError::Api` for upstream failures, `AuthError::Session` if the
/// session cannot be written.
pub async fn login(
    state: &AppState,
    session: &Session,
    email: &str,
    password: &str,
) -> Result<Identity, AuthError> {
    let grant = match state.box_office().login(email, password).await {
        Ok(grant) => grant,
        Err(ApiError::Unauthorized) => return Err(AuthError::InvalidCredentials),
        Err(other) => return Err(other.into()),
    };

    let stored = StoredAuth::from(grant);
    session
        .insert(session_keys::CURRENT_USER, &stored)
        .await?;

    set_sentry_user(&stored.user.id, Some(stored.user.email.as_str()));
    Ok(stored.user)
}

/// Log out: drop the identity record.
///
/// The cart slot is an independent store and is deliberately left alone.
///
/// # Errors
///
/// Returns `AuthError::Session` if the session cannot be modified.
pub async fn logout(session: &Session) -> Result<(), AuthError> {
    session
        .remove::<StoredAuth>(session_keys::CURRENT_USER)
        .await?;
    clear_sentry_user();
    Ok(())
}

/// Resolve the session to a stable authentication reading.
///
/// The gate must only decide on a stable reading, so this awaits any
/// re-validation round-trip: a stale token puts the session in the resolving
/// state until the box office confirms or rejects it. Resolution failures
/// are not errors - they produce the anonymous reading and the login flow
/// takes it from there.
pub async fn resolve(state: &AppState, session: &Session) -> SessionState {
    let stored: StoredAuth = match session.get(session_keys::CURRENT_USER).await {
        Ok(Some(stored)) => stored,
        Ok(None) => return SessionState::Anonymous,
        Err(e) => {
            warn!("discarding unreadable auth record in session: {e}");
            return SessionState::Anonymous;
        }
    };

    if stored.is_fresh(Utc::now()) {
        return SessionState::Authenticated(stored.user);
    }

    // Stale token: the reading is SessionState::Resolving until the box
    // office answers; nothing downstream observes it mid-flight.
    match state.box_office().refresh(&stored.token).await {
        Ok(grant) => {
            let refreshed = StoredAuth::from(grant);
            if let Err(e) = session
                .insert(session_keys::CURRENT_USER, &refreshed)
                .await
            {
                tracing::error!("failed to persist refreshed auth record: {e}");
            }
            SessionState::Authenticated(refreshed.user)
        }
        Err(e) => {
            warn!("token re-validation failed, treating session as signed out: {e}");
            if let Err(e) = session
                .remove::<StoredAuth>(session_keys::CURRENT_USER)
                .await
            {
                tracing::error!("failed to drop stale auth record: {e}");
            }
            SessionState::Anonymous
        }
    }
}

/// Read the stored auth record without resolving it.
///
/// For handlers that already sit behind a gate (which has just resolved the
/// session) and need the bearer token for box-office calls.
pub async fn stored_auth(session: &Session) -> Option<StoredAuth> {
    session
        .get(session_keys::CURRENT_USER)
        .await
        .ok()
        .flatten()
}
