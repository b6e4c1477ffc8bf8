//! # shop-stripe
//!
//! Stripe gateway for the ignite-shop checkout-session endpoint.
//!
//! `StripeCheckoutGateway` implements `CheckoutGateway` on top of the Stripe
//! Checkout Sessions API: every cart product becomes a line item priced by
//! its `defaultPriceId`, and the visitor is sent back to
//! `{SHOP_BASE_URL}/success` or `{SHOP_BASE_URL}/`.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use shop_stripe::StripeCheckoutGateway;
//! use shop_core::CheckoutGateway;
//!
//! let gateway = StripeCheckoutGateway::from_env()?;
//! let session = gateway.create_session(&request).await?;
//!
//! // Hand session.checkout_url back to the storefront
//! ```

pub mod checkout;
pub mod config;

// Re-exports
pub use checkout::StripeCheckoutGateway;
pub use config::{CheckoutUrls, StripeConfig};
