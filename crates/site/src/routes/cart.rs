//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! The cart itself lives in the session slot; product details always come
//! from the box office, never from the form.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{AppendHeaders, Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use meridian_core::ProductId;
use meridian_core::cart::{Cart, CartItemInput};

use crate::api::types::{NewOrder, NewOrderLine};
use crate::error::Result;
use crate::filters;
use crate::middleware::OptionalAuth;
use crate::routes::bearer_token;
use crate::services::cart::CartStore;
use crate::state::AppState;

/// Cart line display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub product_id: i64,
    pub name: String,
    pub quantity: u32,
    pub unit_price: String,
    pub line_total: String,
    pub image: Option<String>,
    pub variant: String,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: u32,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart
                .lines()
                .iter()
                .map(|line| CartItemView {
                    product_id: line.product_id.as_i64(),
                    name: line.name.clone(),
                    quantity: line.quantity,
                    unit_price: line.unit_price.to_string(),
                    line_total: line.line_total().to_string(),
                    image: line.image.clone(),
                    variant: [line.size.as_deref(), line.color.as_deref()]
                        .into_iter()
                        .flatten()
                        .collect::<Vec<_>>()
                        .join(" / "),
                })
                .collect(),
            subtotal: cart.subtotal().to_string(),
            item_count: cart.item_count(),
        }
    }
}

// =============================================================================
// Form Types
// =============================================================================

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: i64,
    pub quantity: Option<u32>,
    pub size: Option<String>,
    pub color: Option<String>,
}

/// Update cart form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub product_id: i64,
    pub quantity: u32,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub product_id: i64,
}

// =============================================================================
// Templates
// =============================================================================

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
    pub signed_in: bool,
}

/// Cart items fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the cart page.
///
/// The cart belongs to the session, not the account, so the page is public;
/// signed-out shoppers just get a sign-in hint next to the checkout button.
#[instrument(skip(store, user))]
pub async fn show(store: CartStore, OptionalAuth(user): OptionalAuth) -> impl IntoResponse {
    CartShowTemplate {
        cart: CartView::from(store.cart()),
        signed_in: user.is_some(),
    }
}

/// Add a product to the cart (HTMX).
///
/// Fetches the product from the box office so the line carries trusted
/// name/price data, then returns the count badge with an HTMX trigger to
/// refresh other cart-aware elements.
#[instrument(skip(state, store))]
pub async fn add(
    State(state): State<AppState>,
    mut store: CartStore,
    Form(form): Form<AddToCartForm>,
) -> Response {
    let product = match state.box_office().product(ProductId::new(form.product_id)).await {
        Ok(product) => product,
        Err(e) => {
            tracing::error!("failed to fetch product for cart add: {e}");
            return (
                StatusCode::BAD_GATEWAY,
                Html("<span class=\"cart-error\">Error adding to cart</span>"),
            )
                .into_response();
        }
    };

    let item = CartItemInput {
        product_id: product.id,
        name: product.name,
        unit_price: product.price,
        image: product.image,
        kind: product.kind,
        size: form.size.filter(|s| !s.is_empty()),
        color: form.color.filter(|c| !c.is_empty()),
    };

    if let Err(e) = store.add_item(item, form.quantity.unwrap_or(1)).await {
        tracing::error!("failed to persist cart after add: {e}");
    }

    (
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartCountTemplate {
            count: store.cart().item_count(),
        },
    )
        .into_response()
}

/// Set a line's quantity (HTMX). Zero removes the line.
#[instrument(skip(store))]
pub async fn update(mut store: CartStore, Form(form): Form<UpdateCartForm>) -> Response {
    if let Err(e) = store
        .update_quantity(ProductId::new(form.product_id), form.quantity)
        .await
    {
        tracing::error!("failed to persist cart after update: {e}");
    }

    (
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate {
            cart: CartView::from(store.cart()),
        },
    )
        .into_response()
}

/// Remove a line from the cart (HTMX).
#[instrument(skip(store))]
pub async fn remove(mut store: CartStore, Form(form): Form<RemoveFromCartForm>) -> Response {
    if let Err(e) = store.remove_item(ProductId::new(form.product_id)).await {
        tracing::error!("failed to persist cart after remove: {e}");
    }

    (
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate {
            cart: CartView::from(store.cart()),
        },
    )
        .into_response()
}

/// Empty the cart (HTMX).
#[instrument(skip(store))]
pub async fn clear(mut store: CartStore) -> Response {
    if let Err(e) = store.clear().await {
        tracing::error!("failed to persist cart after clear: {e}");
    }

    (
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate {
            cart: CartView::from(store.cart()),
        },
    )
        .into_response()
}

/// Cart count badge (HTMX).
#[instrument(skip(store))]
pub async fn count(store: CartStore) -> impl IntoResponse {
    CartCountTemplate {
        count: store.cart().item_count(),
    }
}

/// Place the order and clear the cart.
///
/// Gated: only a signed-in user can check out. The cart is cleared only
/// after the box office accepts the order.
#[instrument(skip(state, session, store))]
pub async fn checkout(
    State(state): State<AppState>,
    session: Session,
    mut store: CartStore,
) -> Result<Response> {
    if store.cart().is_empty() {
        return Ok(Redirect::to("/cart").into_response());
    }

    let token = bearer_token(&session).await?;
    let order = NewOrder {
        lines: store
            .cart()
            .lines()
            .iter()
            .map(|line| NewOrderLine {
                product_id: line.product_id,
                quantity: line.quantity,
                size: line.size.clone(),
                color: line.color.clone(),
            })
            .collect(),
    };

    let placed = state.box_office().create_order(&token, &order).await?;
    tracing::info!(order_id = %placed.id, "order placed");

    if let Err(e) = store.clear().await {
        tracing::error!("failed to clear cart after checkout: {e}");
    }

    Ok(Redirect::to("/account/orders").into_response())
}
