//! Authentication route handlers.
//!
//! Login and logout against the box office. The box office checks the
//! credentials; the site only stores the resulting grant in the session and
//! lands the user on their role's dashboard.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::filters;
use crate::services::auth::{self, AuthError};
use crate::state::AppState;

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Query parameters for error/success display.
#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    pub error: Option<String>,
}

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
}

/// Display the login page.
pub async fn login_page(Query(query): Query<MessageQuery>) -> impl IntoResponse {
    LoginTemplate { error: query.error }
}

/// Handle login form submission.
///
/// On success the user lands on their role's dashboard; every back-office
/// role goes straight to its console, members to their account.
#[instrument(skip(state, session, form))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Response {
    match auth::login(&state, &session, &form.email, &form.password).await {
        Ok(identity) => Redirect::to(identity.dashboard_path()).into_response(),
        Err(AuthError::InvalidCredentials) => {
            Redirect::to("/auth/login?error=credentials").into_response()
        }
        Err(AuthError::Session(e)) => {
            tracing::error!("failed to write session during login: {e}");
            Redirect::to("/auth/login?error=session").into_response()
        }
        Err(AuthError::Api(e)) => {
            tracing::error!("box office unavailable during login: {e}");
            Redirect::to("/auth/login?error=unavailable").into_response()
        }
    }
}

/// Handle logout.
#[instrument(skip(session))]
pub async fn logout(session: Session) -> Response {
    if let Err(e) = auth::logout(&session).await {
        tracing::error!("failed to clear session during logout: {e}");
    }
    Redirect::to("/").into_response()
}
