//! # Request Handlers
//!
//! Axum request handlers for the checkout-session endpoint.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use shop_core::{CheckoutGateway, CheckoutRequest, ShopError};
use tracing::{error, info, instrument};

// =============================================================================
// Request/Response Types
// =============================================================================

/// Create checkout response
#[derive(Debug, Serialize)]
pub struct CreateCheckoutResponse {
    /// Checkout URL (redirect the visitor here)
    #[serde(rename = "checkoutUrl")]
    pub checkout_url: String,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: u16) -> Self {
        Self {
            error: error.into(),
            code,
        }
    }
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn shop_error_to_response(err: ShopError) -> ApiError {
    let code = err.status_code();
    let response = ErrorResponse::new(err.to_string(), code);
    (
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        Json(response),
    )
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "ignite-shop",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Create a checkout session for the posted cart snapshot
#[instrument(skip(state, request), fields(items = request.len()))]
pub async fn create_checkout(
    State(state): State<AppState>,
    Json(request): Json<CheckoutRequest>,
) -> Result<(StatusCode, Json<CreateCheckoutResponse>), ApiError> {
    if request.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("No products in checkout request", 400)),
        ));
    }

    info!(
        "Creating checkout: {} products via {}",
        request.len(),
        state.gateway.gateway_name()
    );

    let session = state.gateway.create_session(&request).await.map_err(|e| {
        error!("Failed to create checkout: {}", e);
        shop_error_to_response(e)
    })?;

    info!(
        "Created checkout session: {}",
        session.session_id.as_deref().unwrap_or("unknown")
    );

    Ok((
        StatusCode::CREATED,
        Json(CreateCheckoutResponse {
            checkout_url: session.checkout_url,
        }),
    ))
}
