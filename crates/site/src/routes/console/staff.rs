//! Staff console: concert scheduling.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form, Router,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
};
use chrono::NaiveDateTime;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use meridian_core::ConcertId;

use crate::api::types::NewConcert;
use crate::error::{AppError, Result};
use crate::filters;
use crate::routes::bearer_token;
use crate::state::AppState;

/// Concert row for the console table.
#[derive(Clone)]
pub struct ConcertRow {
    pub id: i64,
    pub title: String,
    pub when: String,
    pub venue: String,
    pub cancelled: bool,
}

/// Staff console template.
#[derive(Template, WebTemplate)]
#[template(path = "console/staff.html")]
pub struct StaffConsoleTemplate {
    pub concerts: Vec<ConcertRow>,
}

/// Concert creation form. `performs_at` arrives from a datetime-local input.
#[derive(Debug, Deserialize)]
pub struct NewConcertForm {
    pub title: String,
    pub venue: String,
    pub performs_at: String,
}

/// Create the staff console router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/concerts", post(create_concert))
        .route("/concerts/{id}/cancel", post(cancel_concert))
}

/// Console landing: the concert schedule.
#[instrument(skip(state, session))]
pub async fn index(State(state): State<AppState>, session: Session) -> Result<impl IntoResponse> {
    let token = bearer_token(&session).await?;
    let concerts = state.box_office().concerts(&token).await?;

    Ok(StaffConsoleTemplate {
        concerts: concerts
            .iter()
            .map(|c| ConcertRow {
                id: c.id.as_i64(),
                title: c.title.clone(),
                when: c.performs_at.format("%B %e, %Y at %l:%M %p").to_string(),
                venue: c.venue.clone(),
                cancelled: c.cancelled,
            })
            .collect(),
    })
}

/// Schedule a concert.
#[instrument(skip(state, session, form))]
pub async fn create_concert(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<NewConcertForm>,
) -> Result<Response> {
    let performs_at = NaiveDateTime::parse_from_str(&form.performs_at, "%Y-%m-%dT%H:%M")
        .map_err(|e| AppError::BadRequest(format!("invalid concert date: {e}")))?
        .and_utc();

    let token = bearer_token(&session).await?;
    let concert = NewConcert {
        title: form.title,
        performs_at,
        venue: form.venue,
    };
    state.box_office().create_concert(&token, &concert).await?;

    Ok(Redirect::to("/console/staff").into_response())
}

/// Cancel a concert.
#[instrument(skip(state, session))]
pub async fn cancel_concert(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i64>,
) -> Result<Response> {
    let token = bearer_token(&session).await?;
    state
        .box_office()
        .cancel_concert(&token, ConcertId::new(id))
        .await?;

    Ok(Redirect::to("/console/staff").into_response())
}
