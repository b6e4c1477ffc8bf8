//! # Shop Error Types
//!
//! Typed error handling for the ignite-shop checkout flow.
//! Gateway operations return `Result<T, ShopError>`; checkout attempts that are
//! refused before any network call return [`CheckoutRejected`].

use thiserror::Error;

/// Error raised while creating a checkout session
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShopError {
    /// Configuration errors (missing keys, invalid config)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Payment provider or checkout endpoint answered with an error
    #[error("Provider error [{provider}]: {message}")]
    ProviderError { provider: String, message: String },

    /// Network/HTTP error reaching the endpoint (includes timeouts)
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Successful status but no redirect URL in the body
    #[error("Checkout session has no checkout URL")]
    MissingCheckoutUrl,

    /// Redirect URL present but not navigable
    #[error("Malformed checkout URL: {url}")]
    MalformedCheckoutUrl { url: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Internal error (should not happen)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ShopError {
    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            ShopError::Configuration(_) => 500,
            ShopError::InvalidRequest(_) => 400,
            ShopError::ProviderError { .. } => 502,
            ShopError::NetworkError(_) => 503,
            ShopError::MissingCheckoutUrl => 502,
            ShopError::MalformedCheckoutUrl { .. } => 502,
            ShopError::Serialization(_) => 500,
            ShopError::Internal(_) => 500,
        }
    }
}

/// Result type alias for checkout operations
pub type ShopResult<T> = Result<T, ShopError>;

/// Reason a checkout was refused without contacting the gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CheckoutRejected {
    #[error("cart is empty")]
    EmptyCart,

    #[error("a checkout request is already in flight")]
    InFlight,

    #[error("checkout already redirected to the payment provider")]
    Redirected,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ShopError::InvalidRequest("test".into()).status_code(), 400);
        assert_eq!(ShopError::NetworkError("timeout".into()).status_code(), 503);
        assert_eq!(ShopError::MissingCheckoutUrl.status_code(), 502);
        assert_eq!(
            ShopError::ProviderError {
                provider: "stripe".into(),
                message: "No such price".into()
            }
            .status_code(),
            502
        );
    }

    #[test]
    fn test_error_display() {
        let err = ShopError::ProviderError {
            provider: "stripe".into(),
            message: "No such price".into(),
        };
        assert_eq!(err.to_string(), "Provider error [stripe]: No such price");
        assert_eq!(CheckoutRejected::EmptyCart.to_string(), "cart is empty");
    }
}
