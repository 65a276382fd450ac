//! Executives page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::api::types::Executive;
use crate::error::Result;
use crate::filters;
use crate::state::AppState;

/// Executives page template.
#[derive(Template, WebTemplate)]
#[template(path = "executives.html")]
pub struct ExecutivesTemplate {
    pub executives: Vec<Executive>,
}

/// Display board and staff leadership.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let executives = state.box_office().executives().await?;
    Ok(ExecutivesTemplate { executives })
}
