//! # Application State
//!
//! Shared state for the Axum application: the checkout gateway and the
//! service configuration.

use shop_core::BoxedCheckoutGateway;
use shop_stripe::StripeCheckoutGateway;
use std::net::SocketAddr;
use std::sync::Arc;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Environment (development, staging, production)
    pub environment: String,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load through an arbitrary variable lookup; unset or unparsable values fall back to defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string()),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid socket address {}:{}: {}", self.host, self.port, e))
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Gateway that creates provider checkout sessions
    pub gateway: BoxedCheckoutGateway,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    pub fn new(gateway: BoxedCheckoutGateway, config: AppConfig) -> Self {
        Self { gateway, config }
    }

    /// Create state with the Stripe gateway configured from the environment
    pub fn from_env() -> anyhow::Result<Self> {
        let config = AppConfig::from_env();

        let stripe = StripeCheckoutGateway::from_env()
            .map_err(|e| anyhow::anyhow!("Failed to initialize Stripe: {}", e))?;

        Ok(Self::new(Arc::new(stripe), config))
    }
}
