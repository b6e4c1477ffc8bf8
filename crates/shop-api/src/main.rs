//! # Ignite Shop
//!
//! Checkout-session endpoint for the storefront.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables
//! export STRIPE_SECRET_KEY=sk_test_...
//! export SHOP_BASE_URL=http://localhost:3000
//!
//! # Run the server
//! ignite-shop
//! ```

use shop_api::{routes, state::AppState};
use shop_core::CheckoutGateway;
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    print_banner();

    let state = AppState::from_env()?;

    let addr = state.config.socket_addr()?;
    let is_prod = state.config.is_production();

    info!("Environment: {}", state.config.environment);
    info!("Checkout gateway: {}", state.gateway.gateway_name());

    let app = routes::create_router(state);

    info!("Ignite Shop checkout endpoint starting on http://{}", addr);

    if !is_prod {
        info!("Health: GET http://{}/health", addr);
        info!("Checkout: POST http://{}/api/checkout", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn print_banner() {
    println!(
        r#"
  Ignite Shop
  ━━━━━━━━━━━━━━━━━━━━━━━
  Checkout session endpoint
  Version: {}
"#,
        env!("CARGO_PKG_VERSION")
    );
}
