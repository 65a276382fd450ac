//! Member-area route handlers.
//!
//! Everything here sits behind a gate (`routes::account_routes`); handlers
//! receive the admitted identity via the [`Authenticated`] extractor.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tower_sessions::Session;
use tracing::instrument;

use crate::api::types::{Order, Ticket};
use crate::error::Result;
use crate::filters;
use crate::middleware::Authenticated;
use crate::routes::bearer_token;
use crate::state::AppState;

/// Ticket display data for templates.
#[derive(Clone)]
pub struct TicketView {
    pub concert: String,
    pub when: String,
    pub seat: String,
}

impl From<&Ticket> for TicketView {
    fn from(ticket: &Ticket) -> Self {
        Self {
            concert: ticket.concert.clone(),
            when: ticket.performs_at.format("%B %e, %Y at %l:%M %p").to_string(),
            seat: ticket.seat.clone(),
        }
    }
}

/// Order display data for templates.
#[derive(Clone)]
pub struct OrderView {
    pub id: i64,
    pub placed: String,
    pub total: String,
    pub status: String,
    pub item_count: u32,
}

impl From<&Order> for OrderView {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.as_i64(),
            placed: order.placed_at.format("%B %e, %Y").to_string(),
            total: order.total.to_string(),
            status: order.status.clone(),
            item_count: order.lines.iter().map(|line| line.quantity).sum(),
        }
    }
}

/// Account overview template.
#[derive(Template, WebTemplate)]
#[template(path = "account/index.html")]
pub struct AccountTemplate {
    pub name: String,
    pub email: String,
    pub role: String,
    pub is_member: bool,
}

/// Tickets page template.
#[derive(Template, WebTemplate)]
#[template(path = "account/tickets.html")]
pub struct TicketsTemplate {
    pub tickets: Vec<TicketView>,
}

/// Orders page template.
#[derive(Template, WebTemplate)]
#[template(path = "account/orders.html")]
pub struct OrdersTemplate {
    pub orders: Vec<OrderView>,
}

/// Account overview - any signed-in user.
#[instrument(skip(user))]
pub async fn index(Authenticated(user): Authenticated) -> impl IntoResponse {
    AccountTemplate {
        name: user.full_name(),
        email: user.email.to_string(),
        role: user.role.to_string(),
        is_member: user.is_member(),
    }
}

/// Ticket listing - members only.
#[instrument(skip(state, session))]
pub async fn tickets(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse> {
    let token = bearer_token(&session).await?;
    let tickets = state.box_office().my_tickets(&token).await?;

    Ok(TicketsTemplate {
        tickets: tickets.iter().map(TicketView::from).collect(),
    })
}

/// Order history - members only.
#[instrument(skip(state, session))]
pub async fn orders(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse> {
    let token = bearer_token(&session).await?;
    let orders = state.box_office().my_orders(&token).await?;

    Ok(OrdersTemplate {
        orders: orders.iter().map(OrderView::from).collect(),
    })
}
