//! # Stripe Configuration
//!
//! Configuration management for the Stripe integration.
//! Secrets are loaded from environment variables.

use shop_core::{ShopError, ShopResult};
use std::env;

const DEFAULT_API_BASE_URL: &str = "https://api.stripe.com";
const DEFAULT_API_VERSION: &str = "2024-12-18.acacia";
const DEFAULT_SHOP_BASE_URL: &str = "http://localhost:3000";

/// Storefront pages Stripe sends the visitor back to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutUrls {
    /// Public base URL of the storefront (e.g., "https://ignite-shop.example.com")
    pub base_url: String,
}

impl CheckoutUrls {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Success page with Stripe's session id placeholder
    pub fn success_url(&self) -> String {
        format!("{}/success?session_id={{CHECKOUT_SESSION_ID}}", self.base_url)
    }

    /// Cancelling returns the visitor to the catalog
    pub fn cancel_url(&self) -> String {
        format!("{}/", self.base_url)
    }
}

impl Default for CheckoutUrls {
    fn default() -> Self {
        Self::new(DEFAULT_SHOP_BASE_URL)
    }
}

/// Stripe API configuration
#[derive(Debug, Clone)]
pub struct StripeConfig {
    /// Secret API key (sk_test_... or sk_live_...)
    pub secret_key: String,

    /// API base URL (for testing/mocking)
    pub api_base_url: String,

    /// API version
    pub api_version: String,

    /// Return URLs for hosted checkout
    pub urls: CheckoutUrls,
}

impl StripeConfig {
    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `STRIPE_SECRET_KEY`
    ///
    /// Optional:
    /// - `STRIPE_API_BASE_URL` (default `https://api.stripe.com`)
    /// - `SHOP_BASE_URL` (default `http://localhost:3000`)
    pub fn from_env() -> ShopResult<Self> {
        dotenvy::dotenv().ok(); // Load .env file if present
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ShopResult<Self> {
        let secret_key = lookup("STRIPE_SECRET_KEY").ok_or_else(|| {
            ShopError::Configuration("STRIPE_SECRET_KEY not set".to_string())
        })?;

        if !secret_key.starts_with("sk_test_") && !secret_key.starts_with("sk_live_") {
            return Err(ShopError::Configuration(
                "STRIPE_SECRET_KEY must start with sk_test_ or sk_live_".to_string(),
            ));
        }

        let mut config = Self::new(secret_key);
        if let Some(api_base_url) = lookup("STRIPE_API_BASE_URL") {
            config = config.with_api_base_url(api_base_url);
        }
        if let Some(base_url) = lookup("SHOP_BASE_URL") {
            config = config.with_urls(CheckoutUrls::new(base_url));
        }
        Ok(config)
    }

    /// Create config with an explicit key (for testing)
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            urls: CheckoutUrls::default(),
        }
    }

    /// Check if using test keys
    pub fn is_test_mode(&self) -> bool {
        self.secret_key.starts_with("sk_test_")
    }

    /// Get authorization header value
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.secret_key)
    }

    /// Builder: set custom API base URL (for testing)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Builder: set return URLs
    pub fn with_urls(mut self, urls: CheckoutUrls) -> Self {
        self.urls = urls;
        self
    }
}
