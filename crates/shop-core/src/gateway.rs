//! # Checkout Gateway Trait
//!
//! Strategy seam between the checkout flow and whatever creates the
//! provider-side checkout session.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  CheckoutGateway (trait)                    │
//! │  ├── create_session()                                       │
//! │  └── gateway_name()                                         │
//! └─────────────────────────────────────────────────────────────┘
//!                            ▲
//!               ┌────────────┴────────────┐
//!               │                         │
//!  ┌────────────┴───────────┐ ┌───────────┴────────────┐
//!  │  HttpCheckoutGateway   │ │ StripeCheckoutGateway  │
//!  │  (storefront client)   │ │  (session endpoint)    │
//!  └────────────────────────┘ └────────────────────────┘
//! ```

use crate::error::ShopResult;
use crate::session::{CheckoutRequest, CheckoutSession};
use async_trait::async_trait;
use std::sync::Arc;

/// Creates checkout sessions from cart snapshots.
#[async_trait]
pub trait CheckoutGateway: Send + Sync {
    /// Create a checkout session for `request` and return its redirect URL.
    ///
    /// Implementations issue at most one outbound request per call and never
    /// retry on their own.
    async fn create_session(&self, request: &CheckoutRequest) -> ShopResult<CheckoutSession>;

    /// Gateway name (for logging).
    fn gateway_name(&self) -> &'static str;
}

/// Type alias for a shared gateway (dynamic dispatch)
pub type BoxedCheckoutGateway = Arc<dyn CheckoutGateway>;

#[async_trait]
impl<T: CheckoutGateway + ?Sized> CheckoutGateway for Arc<T> {
    async fn create_session(&self, request: &CheckoutRequest) -> ShopResult<CheckoutSession> {
        (**self).create_session(request).await
    }

    fn gateway_name(&self) -> &'static str {
        (**self).gateway_name()
    }
}
