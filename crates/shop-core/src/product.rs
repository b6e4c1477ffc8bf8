//! # Product Types
//!
//! Catalog entries as supplied by the storefront's catalog provider.
//! The core never mutates them; it only copies what the cart needs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A purchasable product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique, stable product identifier (e.g., "prod_MLH5Wy0Y97hDAC")
    pub id: String,

    /// Display name
    pub name: String,

    /// Image URL
    pub image_url: String,

    /// Display-formatted price (e.g., "R$ 79,90")
    pub price: String,

    /// Price in decimal currency units
    #[serde(with = "rust_decimal::serde::float")]
    pub number_price: Decimal,

    /// Provider price ID used to build checkout line items
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_price_id: Option<String>,
}

impl Product {
    /// Create a product with display price derived from `number_price`
    pub fn new(id: impl Into<String>, name: impl Into<String>, number_price: Decimal) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image_url: String::new(),
            price: number_price.to_string(),
            number_price,
            default_price_id: None,
        }
    }

    /// Builder: set image URL
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = url.into();
        self
    }

    /// Builder: set display price
    pub fn with_display_price(mut self, price: impl Into<String>) -> Self {
        self.price = price.into();
        self
    }

    /// Builder: set provider price ID
    pub fn with_price_id(mut self, price_id: impl Into<String>) -> Self {
        self.default_price_id = Some(price_id.into());
        self
    }
}
