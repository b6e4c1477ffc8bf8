//! # shop-api
//!
//! Checkout-session endpoint for the ignite-shop storefront.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - `POST /api/checkout`, which turns a cart snapshot into a provider
//!   checkout session and answers with its redirect URL
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | POST | `/api/checkout` | Create checkout session |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
