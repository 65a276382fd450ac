//! Wire types for the box-office API.
//!
//! Field names match the box office's JSON verbatim; conversion to display
//! form happens in the routes, not here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use meridian_core::{
    ArticleId, ConcertId, EventId, Identity, MusicianId, OrderId, Price, ProductId, Role, TicketId,
    UserId, cart::ItemKind,
};

/// The `{ "data": ... }` envelope every box-office response arrives in.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

// =============================================================================
// Auth
// =============================================================================

/// A successful login or re-validation: the identity plus its bearer token.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginGrant {
    pub user: Identity,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Login request body.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

// =============================================================================
// Public content
// =============================================================================

/// An orchestra musician.
#[derive(Debug, Clone, Deserialize)]
pub struct Musician {
    pub id: MusicianId,
    pub name: String,
    pub section: String,
    pub instrument: String,
    pub bio: Option<String>,
    pub photo: Option<String>,
}

/// A board or staff executive.
#[derive(Debug, Clone, Deserialize)]
pub struct Executive {
    pub name: String,
    pub title: String,
    pub bio: Option<String>,
}

/// A news article. The body is markdown, rendered site-side.
#[derive(Debug, Clone, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub body: String,
    pub published_at: DateTime<Utc>,
}

/// A purchasable product: merchandise or a ticketed seat class.
#[derive(Debug, Clone, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: Option<String>,
    pub price: Price,
    pub kind: ItemKind,
    pub image: Option<String>,
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
}

// =============================================================================
// Member area
// =============================================================================

/// A ticket held by the logged-in member.
#[derive(Debug, Clone, Deserialize)]
pub struct Ticket {
    pub id: TicketId,
    pub concert: String,
    pub performs_at: DateTime<Utc>,
    pub seat: String,
}

/// One line of a placed order.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Price,
    pub quantity: u32,
}

/// A placed order.
#[derive(Debug, Clone, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub placed_at: DateTime<Utc>,
    pub total: Price,
    pub status: String,
    pub lines: Vec<OrderLine>,
}

/// One line of an order being placed at checkout.
#[derive(Debug, Serialize)]
pub struct NewOrderLine {
    pub product_id: ProductId,
    pub quantity: u32,
    pub size: Option<String>,
    pub color: Option<String>,
}

/// Checkout request body.
#[derive(Debug, Serialize)]
pub struct NewOrder {
    pub lines: Vec<NewOrderLine>,
}

// =============================================================================
// Back office
// =============================================================================

/// A user as seen by the admin console.
#[derive(Debug, Clone, Deserialize)]
pub struct ManagedUser {
    pub id: UserId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
}

/// Article creation body (admin console).
#[derive(Debug, Serialize)]
pub struct NewArticle {
    pub title: String,
    pub summary: String,
    pub body: String,
}

/// A scheduled concert (staff console).
#[derive(Debug, Clone, Deserialize)]
pub struct Concert {
    pub id: ConcertId,
    pub title: String,
    pub performs_at: DateTime<Utc>,
    pub venue: String,
    pub cancelled: bool,
}

/// Concert creation body (staff console).
#[derive(Debug, Serialize)]
pub struct NewConcert {
    pub title: String,
    pub performs_at: DateTime<Utc>,
    pub venue: String,
}

/// Revenue roll-up for the manager console.
#[derive(Debug, Clone, Deserialize)]
pub struct SalesReport {
    pub period: String,
    pub ticket_revenue: Price,
    pub merch_revenue: Price,
    pub order_count: u32,
}

/// A volunteer shift at an event.
#[derive(Debug, Clone, Deserialize)]
pub struct Shift {
    pub id: EventId,
    pub event: String,
    pub starts_at: DateTime<Utc>,
    pub needed: u32,
    pub filled: u32,
}
