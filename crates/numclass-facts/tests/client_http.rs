//! Integration tests for the fact client against a mock fact service.

use std::time::Duration;

use numclass_facts::{FactClient, FactError, NO_FACT_FALLBACK};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> FactClient {
    FactClient::builder()
        .base_url(server.uri())
        .timeout(Duration::from_millis(500))
        .build()
        .expect("client should build")
}

#[tokio::test]
async fn returns_body_verbatim_on_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/42/math"))
        .respond_with(ResponseTemplate::new(200).set_body_string("42 is the answer."))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let fact = client.math_fact(42).await.expect("fact should succeed");
    assert_eq!(fact, "42 is the answer.");
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/7/math"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.math_fact(7).await.unwrap_err();
    assert!(matches!(err, FactError::Status(404)));
}

#[tokio::test]
async fn fallback_on_non_success_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/7/math"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    assert_eq!(client.math_fact_or_fallback(7).await, NO_FACT_FALLBACK);
}

#[tokio::test]
async fn fallback_on_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/9/math"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("too slow")
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    assert_eq!(client.math_fact_or_fallback(9).await, NO_FACT_FALLBACK);
}

#[tokio::test]
async fn fallback_on_unreachable_service() {
    // Nothing listens on this port.
    let client = FactClient::builder()
        .base_url("http://127.0.0.1:1")
        .timeout(Duration::from_millis(200))
        .build()
        .expect("client should build");

    assert_eq!(client.math_fact_or_fallback(3).await, NO_FACT_FALLBACK);
}

#[tokio::test]
async fn success_passes_through_fallback_variant() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/28/math"))
        .respond_with(ResponseTemplate::new(200).set_body_string("28 is a perfect number."))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    assert_eq!(
        client.math_fact_or_fallback(28).await,
        "28 is a perfect number."
    );
}
