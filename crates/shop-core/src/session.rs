//! # Checkout Session Types
//!
//! The request snapshot sent to the checkout-session endpoint and the
//! session it hands back.

use crate::cart::CartItem;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Immutable snapshot of the cart taken when a checkout attempt starts.
///
/// Serializes to exactly `{"products": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    products: Vec<CartItem>,
}

impl CheckoutRequest {
    pub fn new(products: Vec<CartItem>) -> Self {
        Self { products }
    }

    /// Products in cart order
    pub fn products(&self) -> &[CartItem] {
        &self.products
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }
}

/// A checkout session created by the payment provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSession {
    /// URL to redirect the visitor to for payment
    pub checkout_url: String,

    /// Provider's session ID, when the gateway exposes it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,

    /// Gateway that produced the session (e.g., "http", "stripe")
    pub provider: String,

    /// When the session expires
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl CheckoutSession {
    pub fn new(provider: impl Into<String>, checkout_url: impl Into<String>) -> Self {
        Self {
            checkout_url: checkout_url.into(),
            session_id: None,
            provider: provider.into(),
            expires_at: None,
        }
    }

    /// Builder: set provider session ID
    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    /// Builder: set expiry
    pub fn with_expires_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    /// A session is usable when it carries a non-blank redirect URL
    pub fn has_checkout_url(&self) -> bool {
        !self.checkout_url.trim().is_empty()
    }
}
