//! Musicians roster page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::api::types::Musician;
use crate::error::Result;
use crate::filters;
use crate::state::AppState;

/// Musicians page template.
#[derive(Template, WebTemplate)]
#[template(path = "musicians.html")]
pub struct MusiciansTemplate {
    pub musicians: Vec<Musician>,
}

/// Display the orchestra roster.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let musicians = state.box_office().musicians().await?;
    Ok(MusiciansTemplate { musicians })
}
