//! Volunteer console: event shift signup.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Router,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
};
use tower_sessions::Session;
use tracing::instrument;

use meridian_core::EventId;

use crate::error::Result;
use crate::filters;
use crate::routes::bearer_token;
use crate::state::AppState;

/// Shift row for the console table.
#[derive(Clone)]
pub struct ShiftRow {
    pub id: i64,
    pub event: String,
    pub when: String,
    pub needed: u32,
    pub filled: u32,
}

/// Volunteer console template.
#[derive(Template, WebTemplate)]
#[template(path = "console/volunteer.html")]
pub struct VolunteerConsoleTemplate {
    pub shifts: Vec<ShiftRow>,
}

/// Create the volunteer console router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/shifts/{id}/signup", post(signup))
}

/// Console landing: upcoming shifts.
#[instrument(skip(state, session))]
pub async fn index(State(state): State<AppState>, session: Session) -> Result<impl IntoResponse> {
    let token = bearer_token(&session).await?;
    let shifts = state.box_office().shifts(&token).await?;

    Ok(VolunteerConsoleTemplate {
        shifts: shifts
            .iter()
            .map(|s| ShiftRow {
                id: s.id.as_i64(),
                event: s.event.clone(),
                when: s.starts_at.format("%B %e, %Y at %l:%M %p").to_string(),
                needed: s.needed,
                filled: s.filled,
            })
            .collect(),
    })
}

/// Sign up for a shift.
#[instrument(skip(state, session))]
pub async fn signup(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i64>,
) -> Result<Response> {
    let token = bearer_token(&session).await?;
    state
        .box_office()
        .signup_shift(&token, EventId::new(id))
        .await?;

    Ok(Redirect::to("/console/volunteer").into_response())
}
