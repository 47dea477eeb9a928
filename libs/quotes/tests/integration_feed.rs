//! Feed client against a local HTTP server

mod common;

use common::{tickers_body, MockFeedServer, MockResponse};
use hyperpoll::{Fetcher, HyperPollError};
use quotes::infrastructure::client::{FeedError, QuoteFeedClient};
use std::time::Duration;

fn client_for(server: &MockFeedServer) -> QuoteFeedClient {
    QuoteFeedClient::with_timeout(server.url(), Duration::from_secs(2)).unwrap()
}

#[tokio::test]
async fn test_get_tickers_decodes_data_array() {
    let body = tickers_body(&[("XBTUSDTPERP", "37000.5"), ("ETHUSDTPERP", "2000")]);
    let server = MockFeedServer::start(MockResponse::ok(body)).await;

    let batch = client_for(&server).get_tickers().await.unwrap();
    verbose_println!("batch: {:?}", batch);

    assert_eq!(batch.len(), 2);
    assert_eq!(batch[0].symbol, "XBTUSDTPERP");
    assert_eq!(batch[0].price, "37000.5");
    assert_eq!(batch[0].best_ask_size, "10");
    assert_eq!(batch[1].display_symbol(), "ETH");
    assert_eq!(server.requests(), 1);
}

#[tokio::test]
async fn test_http_error_status() {
    let server = MockFeedServer::start(MockResponse::status(500, "oops")).await;

    let err = client_for(&server).get_tickers().await.unwrap_err();
    match err {
        FeedError::ApiError { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "oops");
        }
        other => panic!("expected ApiError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_json_is_payload_failure() {
    let server = MockFeedServer::start(MockResponse::ok("<html>not json</html>")).await;

    let err = client_for(&server).fetch().await.unwrap_err();
    assert!(matches!(err, HyperPollError::Payload(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_missing_field_is_payload_failure() {
    let body = r#"{"data":[{"symbol":"XBTUSDTPERP","price":"1"}]}"#;
    let server = MockFeedServer::start(MockResponse::ok(body)).await;

    let err = client_for(&server).fetch().await.unwrap_err();
    assert!(matches!(err, HyperPollError::Payload(_)));
}

#[tokio::test]
async fn test_status_maps_through_fetcher() {
    let server = MockFeedServer::start(MockResponse::status(503, "")).await;

    let err = client_for(&server).fetch().await.unwrap_err();
    assert!(matches!(err, HyperPollError::Status { status: 503, .. }));
}

#[tokio::test]
async fn test_connection_refused_is_transport_failure() {
    // Bind then drop to get a port nobody listens on
    let addr = {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };
    let client =
        QuoteFeedClient::with_timeout(format!("http://{}/tickers", addr), Duration::from_secs(1))
            .unwrap();

    let err = client.fetch().await.unwrap_err();
    assert!(err.is_transport(), "got {:?}", err);
}

#[tokio::test]
async fn test_slow_response_times_out() {
    let server = MockFeedServer::start(
        MockResponse::ok(tickers_body(&[("XBTUSDTPERP", "1")])).delayed(Duration::from_millis(800)),
    )
    .await;
    let client = QuoteFeedClient::with_timeout(server.url(), Duration::from_millis(100)).unwrap();

    let err = client.fetch().await.unwrap_err();
    assert!(matches!(err, HyperPollError::Timeout(_)), "got {:?}", err);
}
