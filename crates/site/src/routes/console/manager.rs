//! Manager console: sales reporting.

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
use crate::routes::bearer_token;
use crate::state::AppState;

/// Manager console template.
#[derive(Template, WebTemplate)]
#[template(path = "console/manager.html")]
pub struct ManagerConsoleTemplate {
    pub period: String,
    pub ticket_revenue: String,
    pub merch_revenue: String,
    pub order_count: u32,
}

/// Create the manager console router.
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(index))
}

/// Console landing: the current-period sales roll-up.
#[instrument(skip(state, session))]
pub async fn index(State(state): State<AppState>, session: Session) -> Result<impl IntoResponse> {
    let token = bearer_token(&session).await?;
    let report = state.box_office().sales_report(&token).await?;

    Ok(ManagerConsoleTemplate {
        period: report.period,
        ticket_revenue: report.ticket_revenue.to_string(),
        merch_revenue: report.merch_revenue.to_string(),
        order_count: report.order_count,
    })
}
