//! Identity extractors for route handlers.
//!
//! Route protection itself is the gate's job (`middleware::gate`); these
//! extractors only hand the already-admitted identity to handlers.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use tower_sessions::Session;

use meridian_core::Identity;

use crate::services::auth::stored_auth;

/// Extractor for the identity a gate admitted.
///
/// Only valid inside a gated router nest - the gate inserts the identity
/// into request extensions on `Grant`.
///
/// # Example
///
/// ```rust,ignore
/// async fn account(Authenticated(user): Authenticated) -> impl IntoResponse {
///     format!("Hello, {}!", user.first_name)
/// }
/// ```
pub struct Authenticated(pub Identity);

/// Rejection when a handler expecting an identity is mounted outside a gate.
///
/// A wiring defect, surfaced loudly: the route table is wrong, not the user.
pub struct GateMissing;

impl IntoResponse for GateMissing {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "handler requires an authenticated identity but no gate admitted one",
        )
            .into_response()
    }
}

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = GateMissing;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<Identity>().cloned().map_or_else(
            || {
                tracing::error!(
                    path = %parts.uri.path(),
                    "identity-expecting handler mounted outside an authorization gate"
                );
                Err(GateMissing)
            },
            |identity| Ok(Self(identity)),
        )
    }
}

/// Extractor that optionally reads the signed-in identity.
///
/// Unlike [`Authenticated`] this works on ungated routes (e.g. the cart
/// page greeting a signed-in member). It reads the stored record without
/// forcing a re-validation round-trip; gates remain the only place access
/// decisions are made.
pub struct OptionalAuth(pub Option<Identity>);

impl<S> FromRequestParts<S> for OptionalAuth
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let identity = match parts.extensions.get::<Session>() {
            Some(session) => stored_auth(session).await.map(|stored| stored.user),
            None => None,
        };

        Ok(Self(identity))
    }
}
