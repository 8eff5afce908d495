//! Order placement against a local mock server.

use auth::{ApiCredentials, RequestSigner};
use binance_futures::{BinanceFuturesClient, FuturesApiError, OrderSide};
use rest_client::TransportError;
use rust_decimal_macros::dec;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn credentials() -> ApiCredentials {
    ApiCredentials::new("test-key".into(), "test-secret".into())
}

async fn mock_order_endpoint(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/fapi/v1/order"))
        .and(header("X-MBX-APIKEY", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "orderId": 4616827,
            "symbol": "BTCUSDT",
            "status": "NEW",
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn market_order_sends_signed_form_body() {
    let server = MockServer::start().await;
    mock_order_endpoint(&server).await;

    let client = BinanceFuturesClient::with_base_url(credentials(), &server.uri()).unwrap();
    let payload = client
        .place_market_order("BTCUSDT", OrderSide::Buy, dec!(0.01))
        .await
        .unwrap();

    assert_eq!(payload["orderId"], 4616827);

    let requests = server.received_requests().await.unwrap();
    let body = String::from_utf8(requests[0].body.clone()).unwrap();

    // Fixed field order, then the injected timing fields, signature last.
    assert!(body.starts_with("symbol=BTCUSDT&side=BUY&type=MARKET&quantity=0.01&timestamp="));
    assert!(body.contains("&recvWindow=5000&signature="));

    // The signature must recompute from the bytes that precede it.
    let creds = credentials();
    let signer = RequestSigner::new(&creds);
    let (signed_part, signature) = body.rsplit_once("&signature=").unwrap();
    assert_eq!(signer.sign(signed_part), signature);
}

#[tokio::test]
async fn limit_order_sends_time_in_force_and_price() {
    let server = MockServer::start().await;
    mock_order_endpoint(&server).await;

    let client = BinanceFuturesClient::with_base_url(credentials(), &server.uri()).unwrap();
    client
        .place_limit_order("ETHUSDT", OrderSide::Sell, dec!(1.5), dec!(3000.50))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let body = String::from_utf8(requests[0].body.clone()).unwrap();

    assert!(body.starts_with(
        "symbol=ETHUSDT&side=SELL&type=LIMIT&timeInForce=GTC&quantity=1.5&price=3000.5&timestamp="
    ));
}

#[tokio::test]
async fn exchange_error_payload_is_returned_as_payload() {
    // The exchange reports stale timestamps as JSON with a 400 status;
    // the client passes that payload through instead of mapping it to an
    // error. Callers inspect the `code` field if they care.
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/fapi/v1/order"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "code": -1021,
            "msg": "Timestamp for this request is outside of the recvWindow."
        })))
        .mount(&server)
        .await;

    let client = BinanceFuturesClient::with_base_url(credentials(), &server.uri()).unwrap();
    let payload = client
        .place_market_order("BTCUSDT", OrderSide::Buy, dec!(0.01))
        .await
        .unwrap();

    assert_eq!(payload["code"], -1021);
}

#[tokio::test]
async fn connection_failure_surfaces_as_network_error() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let client = BinanceFuturesClient::with_base_url(credentials(), &uri).unwrap();
    let result = client
        .place_limit_order("BTCUSDT", OrderSide::Buy, dec!(0.01), dec!(50000))
        .await;

    match result {
        Err(err @ FuturesApiError::Transport(TransportError::Network { .. })) => {
            assert!(err.is_retryable());
        }
        other => panic!("expected network error, got {other:?}"),
    }
}

#[tokio::test]
async fn non_json_body_surfaces_as_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/fapi/v1/order"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = BinanceFuturesClient::with_base_url(credentials(), &server.uri()).unwrap();
    let result = client
        .place_market_order("BTCUSDT", OrderSide::Buy, dec!(0.01))
        .await;

    match result {
        Err(FuturesApiError::Transport(TransportError::Decode { status, body })) => {
            assert_eq!(status, 200);
            assert_eq!(body, "not json");
        }
        other => panic!("expected decode error, got {other:?}"),
    }
}

#[tokio::test]
async fn sequential_orders_get_fresh_timestamps() {
    // Timestamps are generated at dispatch, not cached: two sequential
    // calls must not reuse a signature.
    let server = MockServer::start().await;
    mock_order_endpoint(&server).await;

    let client = BinanceFuturesClient::with_base_url(credentials(), &server.uri()).unwrap();
    client
        .place_market_order("BTCUSDT", OrderSide::Buy, dec!(0.01))
        .await
        .unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    client
        .place_market_order("BTCUSDT", OrderSide::Buy, dec!(0.01))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);

    let first = String::from_utf8(requests[0].body.clone()).unwrap();
    let second = String::from_utf8(requests[1].body.clone()).unwrap();
    assert_ne!(first, second);
}
