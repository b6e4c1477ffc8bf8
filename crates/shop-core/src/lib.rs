//! # shop-core
//!
//! Cart state and checkout orchestration for the ignite-shop storefront.
//!
//! This crate provides:
//! - `Product` and `CartItem` for catalog entries and cart lines
//! - `CartStore`, the single owner of the visitor's selection
//! - `CheckoutRequest` and `CheckoutSession` for the checkout hand-off
//! - `CheckoutGateway` trait for whatever creates checkout sessions
//! - `CheckoutOrchestrator`, the single-flight checkout state machine
//! - `ShopError` and `CheckoutRejected` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use shop_core::{CartStore, CheckoutOrchestrator, Product};
//!
//! let mut cart = CartStore::new();
//! cart.add_item(&product);
//!
//! let orchestrator = CheckoutOrchestrator::new(
//!     gateway,
//!     |url: &str| open_in_browser(url),
//!     |err: &ShopError| show_alert("Falha ao redirecionar ao checkout"),
//! );
//!
//! match orchestrator.checkout(&cart).await {
//!     Ok(outcome) => { /* redirected or reported */ }
//!     Err(rejected) => { /* empty cart or already submitting */ }
//! }
//! ```

pub mod cart;
pub mod checkout;
pub mod error;
pub mod gateway;
pub mod product;
pub mod session;

// Re-exports for convenience
pub use cart::{CartItem, CartStore};
pub use checkout::{
    CheckoutAttempt, CheckoutOrchestrator, CheckoutOutcome, CheckoutState, Navigator, Notifier,
};
pub use error::{CheckoutRejected, ShopError, ShopResult};
pub use gateway::{BoxedCheckoutGateway, CheckoutGateway};
pub use product::Product;
pub use session::{CheckoutRequest, CheckoutSession};
