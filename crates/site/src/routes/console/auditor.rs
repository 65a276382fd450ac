//! Auditor console: read-only order inspection.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Router,
    extract::State,
    response::IntoResponse,
    routing::get,
};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::routes::account::OrderView;
use crate::routes::bearer_token;
use crate::state::AppState;

/// Auditor console template.
#[derive(Template, WebTemplate)]
#[template(path = "console/auditor.html")]
pub struct AuditorConsoleTemplate {
    pub orders: Vec<OrderView>,
}

/// Create the auditor console router.
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(index))
}

/// Console landing: every order in the system. Strictly read-only.
#[instrument(skip(state, session))]
pub async fn index(State(state): State<AppState>, session: Session) -> Result<impl IntoResponse> {
    let token = bearer_token(&session).await?;
    let orders = state.box_office().all_orders(&token).await?;

    Ok(AuditorConsoleTemplate {
        orders: orders.iter().map(OrderView::from).collect(),
    })
}
