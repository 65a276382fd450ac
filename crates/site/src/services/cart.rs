//! The session-durable cart store.
//!
//! The cart lives in a single string-keyed session slot as a JSON array of
//! lines. The extractor hydrates it once per request; every mutation
//! re-serializes the whole cart back into the slot. An unparseable slot is
//! recovered as an empty cart (with a diagnostic), because a shopper must
//! never be shown an error for state only we could have corrupted.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use tower_sessions::Session;
use tracing::warn;

use meridian_core::ProductId;
use meridian_core::cart::{Cart, CartItemInput};

use crate::models::session_keys;

/// The cart store for one request: the hydrated cart plus its session slot.
///
/// Mutating operations persist before returning, so the slot always reflects
/// the last successful mutation.
#[derive(Debug)]
pub struct CartStore {
    session: Session,
    cart: Cart,
}

/// Rejection when the cart store is requested outside a session scope.
///
/// This means `SessionManagerLayer` is not installed on the route - a wiring
/// defect, not a runtime condition. It fails every request loudly rather
/// than silently serving an empty, amnesiac cart.
#[derive(Debug)]
pub struct CartScopeMissing;

impl IntoResponse for CartScopeMissing {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "can't extract cart store: is `SessionManagerLayer` enabled?",
        )
            .into_response()
    }
}

impl<S> FromRequestParts<S> for CartStore
where
    S: Send + Sync,
{
    type Rejection = CartScopeMissing;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(session) = parts.extensions.get::<Session>().cloned() else {
            tracing::error!(
                path = %parts.uri.path(),
                "cart store requested outside a session scope; `SessionManagerLayer` is missing"
            );
            return Err(CartScopeMissing);
        };

        let cart = match session.get::<serde_json::Value>(session_keys::CART).await {
            Ok(Some(slot)) => parse_slot(slot),
            Ok(None) => Cart::new(),
            Err(e) => {
                warn!("failed to read cart slot, starting empty: {e}");
                Cart::new()
            }
        };

        Ok(Self { session, cart })
    }
}

impl CartStore {
    /// The hydrated cart.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Add units of a product, then persist.
    ///
    /// # Errors
    ///
    /// Returns the session store's error if the slot cannot be written.
    pub async fn add_item(
        &mut self,
        item: CartItemInput,
        quantity: u32,
    ) -> Result<(), tower_sessions::session::Error> {
        self.cart.add_item(item, quantity);
        self.persist().await
    }

    /// Remove a product's line, then persist.
    ///
    /// # Errors
    ///
    /// Returns the session store's error if the slot cannot be written.
    pub async fn remove_item(
        &mut self,
        product_id: ProductId,
    ) -> Result<(), tower_sessions::session::Error> {
        self.cart.remove_item(product_id);
        self.persist().await
    }

    /// Set a product's quantity (zero removes), then persist.
    ///
    /// # Errors
    ///
    /// Returns the session store's error if the slot cannot be written.
    pub async fn update_quantity(
        &mut self,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<(), tower_sessions::session::Error> {
        self.cart.update_quantity(product_id, quantity);
        self.persist().await
    }

    /// Empty the cart, then persist.
    ///
    /// # Errors
    ///
    /// Returns the session store's error if the slot cannot be written.
    pub async fn clear(&mut self) -> Result<(), tower_sessions::session::Error> {
        self.cart.clear();
        self.persist().await
    }

    /// Re-serialize the whole cart into its slot.
    async fn persist(&self) -> Result<(), tower_sessions::session::Error> {
        self.session.insert(session_keys::CART, &self.cart).await
    }
}

/// Parse a raw cart slot, recovering an empty cart from corruption.
fn parse_slot(slot: serde_json::Value) -> Cart {
    match serde_json::from_value(slot) {
        Ok(cart) => cart,
        Err(e) => {
            warn!("discarding unparseable cart slot: {e}");
            Cart::new()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use meridian_core::Price;
    use meridian_core::cart::ItemKind;
    use serde_json::json;

    #[test]
    fn test_parse_slot_roundtrip() {
        let mut cart = Cart::new();
        cart.add_item(
            CartItemInput {
                product_id: ProductId::new(3),
                name: "Season Program".to_owned(),
                unit_price: Price::from_cents(1500),
                image: None,
                kind: ItemKind::Digital,
                size: None,
                color: None,
            },
            2,
        );

        let slot = serde_json::to_value(&cart).unwrap();
        assert_eq!(parse_slot(slot), cart);
    }

    #[test]
    fn test_parse_slot_malformed_yields_empty_cart() {
        // Not an array of lines at all.
        assert!(parse_slot(json!({"cart": "nope"})).is_empty());
        // An array, but of garbage.
        assert!(parse_slot(json!([{"quantity": "three"}])).is_empty());
    }
}
