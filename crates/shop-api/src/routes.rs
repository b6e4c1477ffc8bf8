//! # Routes
//!
//! Axum router configuration for the checkout-session endpoint.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the main application router
///
/// Routes:
/// - GET  /health, / - Health check
/// - POST /api/checkout - Create checkout session, returns `{"checkoutUrl": ...}`
pub fn create_router(state: AppState) -> Router {
    // Storefront may be served from another origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new().route("/checkout", post(handlers::create_checkout));

    Router::new()
        .route("/health", get(handlers::health))
        .route("/", get(handlers::health))
        .nest("/api", api_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
