//! HTTP route handlers for the site.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check
//!
//! # Public content
//! GET  /news                   - News listing
//! GET  /news/{slug}            - Article
//! GET  /musicians              - The orchestra
//! GET  /executives             - Board and staff leadership
//! GET  /shop                   - Merchandise and ticket products
//!
//! # Cart (HTMX fragments; session-scoped, no login required)
//! GET  /cart                   - Cart page
//! POST /cart/add               - Add to cart (returns count fragment)
//! POST /cart/update            - Set quantity (returns cart_items fragment)
//! POST /cart/remove            - Remove line (returns cart_items fragment)
//! POST /cart/clear             - Empty the cart
//! GET  /cart/count             - Cart count badge (fragment)
//! POST /checkout               - Place the order (gated: any signed-in user)
//!
//! # Auth
//! GET  /auth/login             - Login page
//! POST /auth/login             - Login action (rate limited)
//! POST /auth/logout            - Logout action
//!
//! # Member area (gated)
//! GET  /account                - Overview (any signed-in user)
//! GET  /account/tickets        - Tickets (members)
//! GET  /account/orders         - Order history (members)
//!
//! # Back office (gated per console)
//! /console/admin     - admins
//! /console/staff     - staff, admins
//! /console/manager   - managers, admins
//! /console/auditor   - auditors, admins
//! /console/volunteer - volunteers, staff, admins
//! ```

pub mod account;
pub mod auth;
pub mod cart;
pub mod console;
pub mod executives;
pub mod home;
pub mod musicians;
pub mod news;
pub mod shop;

use axum::extract::{Request, State};
use axum::middleware::{Next, from_fn_with_state};
use axum::{
    Router,
    routing::{get, post},
};
use tower_sessions::Session;

use meridian_core::access::AccessPolicy;

use crate::error::AppError;
use crate::middleware::{api_rate_limiter, auth_rate_limiter, gate};
use crate::services::auth::stored_auth;
use crate::state::AppState;

/// Wrap a router in an authorization gate carrying one policy.
pub(crate) fn gated(
    state: &AppState,
    policy: AccessPolicy,
    router: Router<AppState>,
) -> Router<AppState> {
    router.layer(from_fn_with_state(
        state.clone(),
        move |state: State<AppState>, request: Request, next: Next| {
            gate::guard(policy, state, request, next)
        },
    ))
}

/// The bearer token backing the current session.
///
/// Handlers behind a gate may still find the record gone if the session
/// expired between the gate and the handler; that surfaces as 401, not 500.
pub(crate) async fn bearer_token(session: &Session) -> Result<String, AppError> {
    stored_auth(session)
        .await
        .map(|stored| stored.token)
        .ok_or_else(|| AppError::Unauthorized("session expired".to_string()))
}

/// Create the auth routes router.
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", post(auth::logout))
        .layer(auth_rate_limiter())
}

/// Create the cart routes router.
fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
        .route("/count", get(cart::count))
        .layer(api_rate_limiter())
}

/// Create the member-area router (gated).
fn account_routes(state: &AppState) -> Router<AppState> {
    let overview = gated(
        state,
        AccessPolicy::Authenticated,
        Router::new().route("/", get(account::index)),
    );

    let member_only = gated(
        state,
        AccessPolicy::MemberOnly,
        Router::new()
            .route("/tickets", get(account::tickets))
            .route("/orders", get(account::orders)),
    );

    overview.merge(member_only)
}

/// Create all routes for the site.
pub fn routes(state: &AppState) -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Public content
        .route("/news", get(news::index))
        .route("/news/{slug}", get(news::show))
        .route("/musicians", get(musicians::index))
        .route("/executives", get(executives::index))
        .route("/shop", get(shop::index))
        // Cart
        .nest("/cart", cart_routes())
        // Checkout needs a signed-in user to bill the order to
        .merge(gated(
            state,
            AccessPolicy::Authenticated,
            Router::new().route("/checkout", post(cart::checkout)),
        ))
        // Member area
        .nest("/account", account_routes(state))
        // Back-office consoles
        .nest("/console", console::routes(state))
        // Auth routes
        .nest("/auth", auth_routes())
}
