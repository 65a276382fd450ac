//! The authorization gate: HTTP adapter for the access decision.
//!
//! The pure decision lives in `meridian_core::access`; this middleware feeds
//! it a *stable* session reading and performs the navigation side effect.
//! One gate wraps one router nest, carrying exactly one [`AccessPolicy`].

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use meridian_core::access::{AccessDecision, AccessPolicy, SessionState, evaluate};

use crate::filters;
use crate::services::auth;
use crate::state::AppState;

/// Placeholder rendered while the session is still resolving.
///
/// A suspension, not a decision: no redirect is issued and no guarded
/// content is rendered.
#[derive(Template, WebTemplate)]
#[template(path = "gate/pending.html")]
struct PendingTemplate;

/// Gate a request: resolve the session, evaluate the policy, then either
/// pass the request through (with the identity attached) or redirect.
///
/// The decision is evaluated exactly once per request, strictly after
/// [`auth::resolve`] returns a stable reading - never against a stale or
/// partial identity. While a redirect is issued the response body is empty,
/// so protected content cannot flash before navigation.
pub async fn guard(
    policy: AccessPolicy,
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let Some(session) = request.extensions().get::<Session>().cloned() else {
        // Wiring defect: a gate outside the session layer can never decide.
        tracing::error!(
            path = %request.uri().path(),
            "authorization gate mounted outside the session layer"
        );
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            "can't evaluate access: is `SessionManagerLayer` enabled?",
        )
            .into_response();
    };

    let reading = auth::resolve(&state, &session).await;

    match evaluate(policy, &reading) {
        AccessDecision::Grant => {
            if let SessionState::Authenticated(identity) = reading {
                request.extensions_mut().insert(identity);
            }
            next.run(request).await
        }
        AccessDecision::Redirect(path) => Redirect::to(path).into_response(),
        AccessDecision::Pending => PendingTemplate.into_response(),
    }
}
