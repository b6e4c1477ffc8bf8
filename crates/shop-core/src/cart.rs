//! # Cart Store
//!
//! The canonical in-memory cart for one storefront session.
//!
//! `CartStore` is a plain owned value: the session host creates one, lends it
//! out by shared reference to everything that renders cart state, and by
//! mutable reference to whatever handles add/remove interactions. There is no
//! global cart.
//!
//! Invariants held after every operation:
//! - at most one [`CartItem`] per product id
//! - [`CartStore::total`] is the sum of the current items' prices (recomputed on read)
//! - [`CartStore::len`] is `items().len()`

use crate::session::CheckoutRequest;
use crate::product::Product;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product selected into the cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Product ID (cart identity)
    pub id: String,

    /// Product name (denormalized for display)
    pub name: String,

    /// Image URL
    pub image_url: String,

    /// Display-formatted price
    pub price: String,

    /// Price in decimal currency units
    #[serde(with = "rust_decimal::serde::float")]
    pub number_price: Decimal,

    /// Provider price ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_price_id: Option<String>,
}

impl From<&Product> for CartItem {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            image_url: product.image_url.clone(),
            price: product.price.clone(),
            number_price: product.number_price,
            default_price_id: product.default_price_id.clone(),
        }
    }
}

/// Ordered set of cart items keyed by product id
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    items: Vec<CartItem>,
}

impl CartStore {
    /// Create an empty cart
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append `product` unless an item with the same id is already present.
    ///
    /// Returns `true` if the cart changed.
    pub fn add_item(&mut self, product: &Product) -> bool {
        if self.has_item(&product.id) {
            return false;
        }
        self.items.push(CartItem::from(product));
        true
    }

    /// Remove the item with `product_id`. Missing ids are ignored.
    ///
    /// Returns `true` if the cart changed.
    pub fn remove_item(&mut self, product_id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != product_id);
        self.items.len() != before
    }

    pub fn has_item(&self, product_id: &str) -> bool {
        self.items.iter().any(|item| item.id == product_id)
    }

    /// Items in insertion order, oldest first
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Sum of `number_price` over the current items, saturating at the
    /// bounds of `Decimal`
    pub fn total(&self) -> Decimal {
        self.items
            .iter()
            .fold(Decimal::ZERO, |sum, item| sum.saturating_add(item.number_price))
    }

    /// Number of items (the quantity shown to the visitor)
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Owned copy of the current contents for a checkout attempt
    pub fn snapshot(&self) -> CheckoutRequest {
        CheckoutRequest::new(self.items.clone())
    }

    /// Drop all items (end of session)
    pub fn clear(&mut self) {
        self.items.clear();
    }
}
