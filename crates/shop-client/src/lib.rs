//! # shop-client
//!
//! Storefront-side adapters for the ignite-shop checkout flow.
//!
//! - **HttpCheckoutGateway** posts the cart snapshot to the checkout-session
//!   endpoint (`POST /api/checkout`) and returns the hosted checkout URL.
//! - **ClientConfig** loads the endpoint and timeout from the environment.
//! - **LoggingNotifier** reports failed attempts through `tracing`.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use shop_client::orchestrator_from_env;
//! use shop_core::CartStore;
//!
//! let mut cart = CartStore::new();
//! cart.add_item(&product);
//!
//! let checkout = orchestrator_from_env(|url: &str| open_in_browser(url))?;
//! checkout.checkout(&cart).await?;
//! ```

pub mod config;
pub mod gateway;
pub mod notify;

// Re-exports
pub use config::ClientConfig;
pub use gateway::HttpCheckoutGateway;
pub use notify::{LoggingNotifier, CHECKOUT_FAILED_MESSAGE};

use shop_core::{CheckoutOrchestrator, Navigator, ShopResult};

/// Orchestrator wired to the HTTP checkout endpoint
pub type HttpCheckout<N, A = LoggingNotifier> = CheckoutOrchestrator<HttpCheckoutGateway, N, A>;

/// Build an orchestrator from `SHOP_CHECKOUT_*` environment variables
pub fn orchestrator_from_env<N: Navigator>(navigator: N) -> ShopResult<HttpCheckout<N>> {
    let gateway = HttpCheckoutGateway::from_env()?;
    Ok(CheckoutOrchestrator::new(
        gateway,
        navigator,
        LoggingNotifier::default(),
    ))
}
