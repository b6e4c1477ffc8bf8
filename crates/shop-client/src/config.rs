//! # Client Configuration
//!
//! Where the storefront sends checkout requests and how long it waits.
//! Values come from environment variables (a `.env` file is honored).

use reqwest::Url;
use shop_core::{ShopError, ShopResult};
use std::env;
use std::time::Duration;

const DEFAULT_ENDPOINT: &str = "http://localhost:8080/api/checkout";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Checkout endpoint configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Absolute URL of the checkout-session endpoint
    pub checkout_endpoint: String,

    /// Upper bound on one checkout request
    pub timeout: Duration,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional env vars:
    /// - `SHOP_CHECKOUT_ENDPOINT` (default `http://localhost:8080/api/checkout`)
    /// - `SHOP_CHECKOUT_TIMEOUT_SECS` (default 30)
    pub fn from_env() -> ShopResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ShopResult<Self> {
        let checkout_endpoint =
            lookup("SHOP_CHECKOUT_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let timeout_secs = match lookup("SHOP_CHECKOUT_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                ShopError::Configuration(format!(
                    "SHOP_CHECKOUT_TIMEOUT_SECS must be a whole number of seconds, got {raw:?}"
                ))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let config = Self {
            checkout_endpoint,
            timeout: Duration::from_secs(timeout_secs),
        };
        config.validate()?;
        Ok(config)
    }

    /// Create config with an explicit endpoint and the default timeout
    pub fn new(checkout_endpoint: impl Into<String>) -> Self {
        Self {
            checkout_endpoint: checkout_endpoint.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Builder: set request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn validate(&self) -> ShopResult<()> {
        let url = Url::parse(&self.checkout_endpoint).map_err(|e| {
            ShopError::Configuration(format!(
                "SHOP_CHECKOUT_ENDPOINT is not an absolute URL ({}): {}",
                self.checkout_endpoint, e
            ))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ShopError::Configuration(
                "SHOP_CHECKOUT_ENDPOINT must use http or https".to_string(),
            ));
        }
        if self.timeout.is_zero() {
            return Err(ShopError::Configuration(
                "SHOP_CHECKOUT_TIMEOUT_SECS must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}
