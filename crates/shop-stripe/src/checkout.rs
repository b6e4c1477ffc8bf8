//! # Stripe Checkout Sessions
//!
//! Turns a cart snapshot into a Stripe-hosted Checkout Session.
//! Each product becomes one line item priced by its `defaultPriceId`.

use crate::config::StripeConfig;
use async_trait::async_trait;
use chrono::DateTime;
use reqwest::Client;
use serde::Deserialize;
use shop_core::{CheckoutGateway, CheckoutRequest, CheckoutSession, ShopError, ShopResult};
use tracing::{debug, error, info, instrument};
use uuid::Uuid;

/// Stripe Checkout Session gateway
///
/// Uses Stripe's hosted checkout page, so card data never touches the shop.
pub struct StripeCheckoutGateway {
    config: StripeConfig,
    client: Client,
}

impl StripeCheckoutGateway {
    /// Create a new Stripe checkout gateway
    pub fn new(config: StripeConfig) -> ShopResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| ShopError::Configuration(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { config, client })
    }

    /// Create from environment variables
    pub fn from_env() -> ShopResult<Self> {
        Self::new(StripeConfig::from_env()?)
    }

    pub fn config(&self) -> &StripeConfig {
        &self.config
    }

    /// Form body for `POST /v1/checkout/sessions`
    fn build_form_params(&self, request: &CheckoutRequest) -> ShopResult<Vec<(String, String)>> {
        if request.is_empty() {
            return Err(ShopError::InvalidRequest("Order has no items".to_string()));
        }

        let mut form_params: Vec<(String, String)> = vec![
            ("mode".to_string(), "payment".to_string()),
            ("success_url".to_string(), self.config.urls.success_url()),
            ("cancel_url".to_string(), self.config.urls.cancel_url()),
        ];

        for (i, product) in request.products().iter().enumerate() {
            let price_id = product
                .default_price_id
                .as_deref()
                .filter(|id| !id.is_empty())
                .ok_or_else(|| {
                    ShopError::InvalidRequest(format!("Price not found for product {}", product.id))
                })?;

            form_params.push((format!("line_items[{}][price]", i), price_id.to_string()));
            form_params.push((format!("line_items[{}][quantity]", i), "1".to_string()));
        }

        Ok(form_params)
    }
}

#[async_trait]
impl CheckoutGateway for StripeCheckoutGateway {
    #[instrument(skip(self, request), fields(items = request.len()))]
    async fn create_session(&self, request: &CheckoutRequest) -> ShopResult<CheckoutSession> {
        let form_params = self.build_form_params(request)?;
        let idempotency_key = Uuid::new_v4().to_string();

        debug!(
            "Creating Stripe checkout session: {} items, idempotency_key={}",
            request.len(),
            idempotency_key
        );

        let url = format!("{}/v1/checkout/sessions", self.config.api_base_url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", self.config.auth_header())
            .header("Stripe-Version", &self.config.api_version)
            .header("Idempotency-Key", &idempotency_key)
            .form(&form_params)
            .send()
            .await
            .map_err(|e| ShopError::NetworkError(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ShopError::NetworkError(e.to_string()))?;

        if !status.is_success() {
            error!("Stripe API error: status={}, body={}", status, body);

            let message = match serde_json::from_str::<StripeErrorResponse>(&body) {
                Ok(error_response) => error_response.error.message,
                Err(_) => format!("HTTP {}: {}", status, body),
            };
            return Err(ShopError::ProviderError {
                provider: "stripe".to_string(),
                message,
            });
        }

        let session_response: StripeCheckoutSessionResponse =
            serde_json::from_str(&body).map_err(|e| {
                ShopError::Serialization(format!("Failed to parse Stripe response: {}", e))
            })?;

        let checkout_url = session_response
            .url
            .filter(|url| !url.is_empty())
            .ok_or(ShopError::MissingCheckoutUrl)?;

        info!(
            "Created Stripe checkout session: id={}, url={}",
            session_response.id, checkout_url
        );

        let mut session =
            CheckoutSession::new("stripe", checkout_url).with_session_id(session_response.id);
        if let Some(expires_at) = session_response
            .expires_at
            .and_then(|ts| DateTime::from_timestamp(ts, 0))
        {
            session = session.with_expires_at(expires_at);
        }

        Ok(session)
    }

    fn gateway_name(&self) -> &'static str {
        "stripe"
    }
}

// =============================================================================
// Stripe API Types
// =============================================================================

#[derive(Debug, Deserialize)]
struct StripeCheckoutSessionResponse {
    id: String,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    expires_at: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct StripeErrorResponse {
    error: StripeError,
}

#[derive(Debug, Deserialize)]
struct StripeError {
    message: String,
}
