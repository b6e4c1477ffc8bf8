//! # HTTP Checkout Gateway
//!
//! Posts the cart snapshot to the storefront's checkout-session endpoint and
//! reads back the provider's hosted checkout URL.
//!
//! Wire contract:
//! - request: `POST {endpoint}` with body `{"products": [...]}`
//! - success: 2xx with `{"checkoutUrl": "https://..."}`
//! - anything else is an error

use crate::config::ClientConfig;
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use shop_core::{CheckoutGateway, CheckoutRequest, CheckoutSession, ShopError, ShopResult};
use tracing::{debug, error, info, instrument};

const PROVIDER: &str = "checkout-endpoint";

/// Checkout gateway backed by the storefront's own HTTP endpoint
pub struct HttpCheckoutGateway {
    config: ClientConfig,
    client: Client,
}

impl HttpCheckoutGateway {
    /// Create a gateway; the request timeout comes from `config`
    pub fn new(config: ClientConfig) -> ShopResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ShopError::Configuration(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { config, client })
    }

    /// Create from environment variables
    pub fn from_env() -> ShopResult<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    pub fn endpoint(&self) -> &str {
        &self.config.checkout_endpoint
    }
}

#[async_trait]
impl CheckoutGateway for HttpCheckoutGateway {
    #[instrument(skip(self, request), fields(items = request.len()))]
    async fn create_session(&self, request: &CheckoutRequest) -> ShopResult<CheckoutSession> {
        debug!("Requesting checkout session from {}", self.config.checkout_endpoint);

        let response = self
            .client
            .post(&self.config.checkout_endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| ShopError::NetworkError(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ShopError::NetworkError(e.to_string()))?;

        if !status.is_success() {
            error!("Checkout endpoint error: status={}, body={}", status, body);

            let message = match serde_json::from_str::<EndpointErrorResponse>(&body) {
                Ok(error_response) => error_response.error,
                Err(_) => format!("HTTP {}: {}", status, body),
            };
            return Err(ShopError::ProviderError {
                provider: PROVIDER.to_string(),
                message,
            });
        }

        let session_response: EndpointSessionResponse =
            serde_json::from_str(&body).map_err(|e| {
                ShopError::Serialization(format!("Failed to parse checkout response: {e}"))
            })?;

        let checkout_url = session_response
            .checkout_url
            .filter(|url| !url.trim().is_empty())
            .ok_or(ShopError::MissingCheckoutUrl)?;
        validate_redirect(&checkout_url)?;

        info!("Received checkout URL: {}", checkout_url);

        Ok(CheckoutSession::new("http", checkout_url))
    }

    fn gateway_name(&self) -> &'static str {
        "http"
    }
}

/// Navigation target must be an absolute http(s) URL
fn validate_redirect(url: &str) -> ShopResult<()> {
    match Url::parse(url) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => Ok(()),
        _ => Err(ShopError::MalformedCheckoutUrl {
            url: url.to_string(),
        }),
    }
}

// =============================================================================
// Endpoint API Types
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EndpointSessionResponse {
    #[serde(default)]
    checkout_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct EndpointErrorResponse {
    error: String,
}
