//! The shopping cart container and its mutation semantics.
//!
//! The cart is an ordered sequence of lines with at most one line per
//! product: adding a product that is already present accumulates quantity
//! instead of duplicating the line. Persistence is the site's concern; this
//! module only owns the in-memory semantics.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::id::ProductId;
use crate::types::price::Price;

/// Whether a product ships or is delivered electronically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// Merchandise that ships (posters, recordings, apparel).
    Physical,
    /// E-tickets and digital programs.
    Digital,
}

/// Product details for a line about to enter the cart.
///
/// Always built from box-office data, never from client input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItemInput {
    /// The product being added.
    pub product_id: ProductId,
    /// Display name.
    pub name: String,
    /// Price per unit.
    pub unit_price: Price,
    /// Optional product image reference.
    pub image: Option<String>,
    /// Physical or digital.
    pub kind: ItemKind,
    /// Selected size, for sized merchandise.
    pub size: Option<String>,
    /// Selected color, for colored merchandise.
    pub color: Option<String>,
}

/// One line of the cart.
///
/// `id` is the line's own identity (distinct from `product_id`) so the UI can
/// address a line without re-deriving it from product data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Line identity, minted when the line is first created.
    pub id: Uuid,
    /// The product this line holds.
    pub product_id: ProductId,
    /// Display name.
    pub name: String,
    /// Price per unit.
    pub unit_price: Price,
    /// Units of this product; always at least one.
    pub quantity: u32,
    /// Optional product image reference.
    pub image: Option<String>,
    /// Physical or digital.
    pub kind: ItemKind,
    /// Selected size, if any.
    pub size: Option<String>,
    /// Selected color, if any.
    pub color: Option<String>,
}

impl CartItem {
    /// The line total (unit price times quantity).
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.unit_price.times(self.quantity)
    }
}

/// The cart: an ordered sequence of lines, one per product.
///
/// Serializes transparently as a JSON array of lines, which is exactly the
/// shape persisted in the session slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartItem>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// The lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartItem] {
        &self.lines
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Sum of unit price times quantity across all lines.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.lines.iter().map(CartItem::line_total).sum()
    }

    /// Add `quantity` units of a product.
    ///
    /// If a line for the product already exists its quantity is incremented
    /// (the argument is an increment, never an absolute overwrite); otherwise
    /// a new line is appended. A zero increment counts as one so a line can
    /// never enter the cart empty.
    pub fn add_item(&mut self, item: CartItemInput, quantity: u32) {
        let quantity = quantity.max(1);

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product_id == item.product_id)
        {
            line.quantity += quantity;
            return;
        }

        self.lines.push(CartItem {
            id: Uuid::new_v4(),
            product_id: item.product_id,
            name: item.name,
            unit_price: item.unit_price,
            quantity,
            image: item.image,
            kind: item.kind,
            size: item.size,
            color: item.color,
        });
    }

    /// Remove the line for a product. Absent products are a no-op.
    pub fn remove_item(&mut self, product_id: ProductId) {
        self.lines.retain(|line| line.product_id != product_id);
    }

    /// Set a line's quantity to an absolute value.
    ///
    /// Zero removes the line entirely. Absent products are a no-op.
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove_item(product_id);
            return;
        }

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product_id == product_id)
        {
            line.quantity = quantity;
        }
    }

    /// Empty the cart. Idempotent.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn poster() -> CartItemInput {
        CartItemInput {
            product_id: ProductId::new(1),
            name: "Season Poster".to_owned(),
            unit_price: Price::from_cents(1000),
            image: Some("posters/season.jpg".to_owned()),
            kind: ItemKind::Physical,
            size: Some("A2".to_owned()),
            color: None,
        }
    }

    fn eticket() -> CartItemInput {
        CartItemInput {
            product_id: ProductId::new(2),
            name: "Mahler 5 - Balcony".to_owned(),
            unit_price: Price::from_cents(5500),
            image: None,
            kind: ItemKind::Digital,
            size: None,
            color: None,
        }
    }

    #[test]
    fn test_add_same_product_accumulates_one_line() {
        let mut cart = Cart::new();
        cart.add_item(poster(), 1);
        cart.add_item(poster(), 1);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.subtotal(), Price::from_cents(2000));
    }

    #[test]
    fn test_add_is_an_increment_not_an_overwrite() {
        let mut cart = Cart::new();
        cart.add_item(poster(), 3);
        cart.add_item(poster(), 2);
        assert_eq!(cart.lines()[0].quantity, 5);
    }

    #[test]
    fn test_distinct_products_keep_insertion_order() {
        let mut cart = Cart::new();
        cart.add_item(poster(), 1);
        cart.add_item(eticket(), 2);

        let ids: Vec<_> = cart.lines().iter().map(|l| l.product_id).collect();
        assert_eq!(ids, vec![ProductId::new(1), ProductId::new(2)]);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_update_quantity_is_absolute() {
        let mut cart = Cart::new();
        cart.add_item(poster(), 3);
        cart.update_quantity(ProductId::new(1), 2);
        assert_eq!(cart.lines()[0].quantity, 2);
    }

    #[test]
    fn test_update_quantity_zero_removes_line() {
        let mut cart = Cart::new();
        cart.add_item(poster(), 1);
        cart.add_item(eticket(), 1);
        cart.update_quantity(ProductId::new(1), 0);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.item_count(), 1);
        assert!(cart.lines().iter().all(|l| l.product_id != ProductId::new(1)));
    }

    #[test]
    fn test_update_quantity_unknown_product_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(poster(), 1);
        let before = cart.clone();
        cart.update_quantity(ProductId::new(99), 4);
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_unknown_product_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(poster(), 1);
        let serialized = serde_json::to_string(&cart).unwrap();

        cart.remove_item(ProductId::new(99));

        assert_eq!(serde_json::to_string(&cart).unwrap(), serialized);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut cart = Cart::new();
        cart.add_item(poster(), 2);
        cart.clear();
        assert!(cart.is_empty());
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_serde_roundtrip_preserves_lines_and_order() {
        let mut cart = Cart::new();
        cart.add_item(poster(), 2);
        cart.add_item(eticket(), 1);

        let json = serde_json::to_string(&cart).unwrap();
        let reloaded: Cart = serde_json::from_str(&json).unwrap();

        assert_eq!(reloaded, cart);
        let pairs: Vec<_> = reloaded
            .lines()
            .iter()
            .map(|l| (l.product_id, l.quantity))
            .collect();
        assert_eq!(pairs, vec![(ProductId::new(1), 2), (ProductId::new(2), 1)]);
    }

    #[test]
    fn test_persisted_form_is_a_json_array() {
        let mut cart = Cart::new();
        cart.add_item(eticket(), 1);
        let value = serde_json::to_value(&cart).unwrap();
        assert!(value.is_array());
    }
}
