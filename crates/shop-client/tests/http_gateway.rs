//! Integration tests for `HttpCheckoutGateway` and the orchestrator wired to it.
//!
//! Each test stands up a local `wiremock` server playing the checkout-session
//! endpoint, so no real network traffic is made.

use rust_decimal::Decimal;
use serde_json::json;
use shop_client::{ClientConfig, HttpCheckoutGateway, LoggingNotifier};
use shop_core::{
    CartStore, CheckoutGateway, CheckoutOrchestrator, CheckoutOutcome, CheckoutRejected,
    CheckoutState, Product, ShopError,
};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn gateway_for(server: &MockServer) -> HttpCheckoutGateway {
    let config = ClientConfig::new(format!("{}/api/checkout", server.uri()))
        .with_timeout(Duration::from_secs(5));
    HttpCheckoutGateway::new(config).expect("failed to build test gateway")
}

fn camiseta(id: &str, price: i64) -> Product {
    Product::new(id, format!("Camiseta {id}"), Decimal::from(price))
        .with_image(format!("https://files.stripe.com/{id}.png"))
        .with_display_price(format!("R$ {price},00"))
        .with_price_id(format!("price_{id}"))
}

fn cart_of(products: &[Product]) -> CartStore {
    let mut cart = CartStore::new();
    for product in products {
        cart.add_item(product);
    }
    cart
}

fn navigation_log() -> (Arc<Mutex<Vec<String>>>, impl Fn(&str) + Send + Sync) {
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = log.clone();
    (log, move |url: &str| sink.lock().unwrap().push(url.to_string()))
}

// ---------------------------------------------------------------------------
// Gateway wire contract
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_session_posts_exact_snapshot_and_returns_url() {
    let server = MockServer::start().await;
    let cart = cart_of(&[camiseta("p1", 2000), camiseta("p2", 3000)]);

    Mock::given(method("POST"))
        .and(path("/api/checkout"))
        .and(body_json(json!({
            "products": [
                {
                    "id": "p1",
                    "name": "Camiseta p1",
                    "imageUrl": "https://files.stripe.com/p1.png",
                    "price": "R$ 2000,00",
                    "numberPrice": 2000.0,
                    "defaultPriceId": "price_p1"
                },
                {
                    "id": "p2",
                    "name": "Camiseta p2",
                    "imageUrl": "https://files.stripe.com/p2.png",
                    "price": "R$ 3000,00",
                    "numberPrice": 3000.0,
                    "defaultPriceId": "price_p2"
                }
            ]
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"checkoutUrl": "https://pay/xyz"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let session = gateway_for(&server)
        .create_session(&cart.snapshot())
        .await
        .expect("session should be created");

    assert_eq!(session.checkout_url, "https://pay/xyz");
    assert_eq!(session.provider, "http");
}

#[tokio::test]
async fn create_session_without_checkout_url_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/checkout"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"sessionId": "cs_1"})))
        .mount(&server)
        .await;

    let cart = cart_of(&[camiseta("p1", 1000)]);
    let err = gateway_for(&server)
        .create_session(&cart.snapshot())
        .await
        .unwrap_err();

    assert_eq!(err, ShopError::MissingCheckoutUrl);
}

#[tokio::test]
async fn create_session_with_relative_url_is_malformed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/checkout"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"checkoutUrl": "/pay"})))
        .mount(&server)
        .await;

    let cart = cart_of(&[camiseta("p1", 1000)]);
    let err = gateway_for(&server)
        .create_session(&cart.snapshot())
        .await
        .unwrap_err();

    assert!(
        matches!(err, ShopError::MalformedCheckoutUrl { ref url } if url == "/pay"),
        "unexpected error: {err:?}"
    );
}

#[tokio::test]
async fn create_session_maps_error_status_to_provider_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/checkout"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"error": "Failed to create session"})),
        )
        .mount(&server)
        .await;

    let cart = cart_of(&[camiseta("p1", 1000)]);
    let err = gateway_for(&server)
        .create_session(&cart.snapshot())
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ShopError::ProviderError {
            provider: "checkout-endpoint".to_string(),
            message: "Failed to create session".to_string(),
        }
    );
}

#[tokio::test]
async fn create_session_with_non_json_success_body_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/checkout"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
        .mount(&server)
        .await;

    let cart = cart_of(&[camiseta("p1", 1000)]);
    let err = gateway_for(&server)
        .create_session(&cart.snapshot())
        .await
        .unwrap_err();

    assert!(matches!(err, ShopError::Serialization(_)), "unexpected error: {err:?}");
}

#[tokio::test]
async fn create_session_times_out_as_network_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/checkout"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"checkoutUrl": "https://pay/late"}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = ClientConfig::new(format!("{}/api/checkout", server.uri()))
        .with_timeout(Duration::from_millis(200));
    let gateway = HttpCheckoutGateway::new(config).unwrap();
    let cart = cart_of(&[camiseta("p1", 1000)]);

    let err = gateway.create_session(&cart.snapshot()).await.unwrap_err();

    assert!(matches!(err, ShopError::NetworkError(_)), "unexpected error: {err:?}");
}

// ---------------------------------------------------------------------------
// Orchestrator over HTTP
// ---------------------------------------------------------------------------

#[tokio::test]
async fn checkout_redirects_to_endpoint_url() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/checkout"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"checkoutUrl": "https://pay/xyz"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (navigations, navigator) = navigation_log();
    let orchestrator =
        CheckoutOrchestrator::new(gateway_for(&server), navigator, LoggingNotifier::default());
    let cart = cart_of(&[camiseta("p1", 2000), camiseta("p2", 3000)]);
    assert_eq!(cart.total(), Decimal::from(5000));

    let outcome = orchestrator.checkout(&cart).await.unwrap();

    assert_eq!(outcome.checkout_url(), Some("https://pay/xyz"));
    assert_eq!(orchestrator.state(), CheckoutState::Redirecting);
    assert_eq!(*navigations.lock().unwrap(), vec!["https://pay/xyz".to_string()]);
}

#[tokio::test]
async fn failed_checkout_can_be_retried() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/checkout"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/checkout"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"checkoutUrl": "https://pay/retry"})),
        )
        .mount(&server)
        .await;

    let failures = Arc::new(Mutex::new(Vec::new()));
    let sink = failures.clone();
    let (navigations, navigator) = navigation_log();
    let orchestrator = CheckoutOrchestrator::new(gateway_for(&server), navigator, move |err: &ShopError| {
        sink.lock().unwrap().push(err.clone())
    });
    let cart = cart_of(&[camiseta("p1", 1000)]);

    let first = orchestrator.checkout(&cart).await.unwrap();
    assert!(matches!(first, CheckoutOutcome::Failed(ShopError::ProviderError { .. })));
    assert_eq!(orchestrator.state(), CheckoutState::Idle);
    assert_eq!(failures.lock().unwrap().len(), 1);
    assert!(navigations.lock().unwrap().is_empty());
    assert_eq!(cart.len(), 1);

    let second = orchestrator.checkout(&cart).await.unwrap();
    assert_eq!(second.checkout_url(), Some("https://pay/retry"));
    assert_eq!(failures.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn unreachable_endpoint_fails_and_returns_to_idle() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let endpoint = format!("http://{}/api/checkout", listener.local_addr().unwrap());
    drop(listener);

    let gateway = HttpCheckoutGateway::new(
        ClientConfig::new(endpoint).with_timeout(Duration::from_secs(2)),
    )
    .unwrap();
    let (navigations, navigator) = navigation_log();
    let orchestrator = CheckoutOrchestrator::new(gateway, navigator, LoggingNotifier::default());
    let cart = cart_of(&[camiseta("p1", 1000)]);

    let outcome = orchestrator.checkout(&cart).await.unwrap();

    assert!(matches!(outcome, CheckoutOutcome::Failed(ShopError::NetworkError(_))));
    assert_eq!(orchestrator.state(), CheckoutState::Idle);
    assert!(navigations.lock().unwrap().is_empty());
}

#[tokio::test]
async fn empty_cart_never_reaches_endpoint() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let (_, navigator) = navigation_log();
    let orchestrator =
        CheckoutOrchestrator::new(gateway_for(&server), navigator, LoggingNotifier::default());

    let rejected = orchestrator.checkout(&CartStore::new()).await.unwrap_err();

    assert_eq!(rejected, CheckoutRejected::EmptyCart);
}
