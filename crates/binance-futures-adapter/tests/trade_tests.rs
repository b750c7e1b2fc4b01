/*
[INPUT]:  Mock order and account responses
[OUTPUT]: Test results for signed endpoints
[POS]:    Integration tests - signing protocol and order endpoints
[UPDATE]: When signed endpoints or signing rules change
*/

mod common;

use binance_futures_adapter::{
    BinanceError, ClientConfig, OrderSide, OrderType, QueryParams, RequestSigner, TimeInForce,
    ValidationError,
};
use common::{
    TEST_API_KEY, TEST_API_SECRET, ValidSignature, d, order_body, setup_mock_server,
    split_signature, test_client, test_client_with_config,
};
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_place_market_order_is_signed() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/fapi/v1/order"))
        .and(header("x-mbx-apikey", TEST_API_KEY))
        .and(query_param("symbol", "BTCUSDT"))
        .and(query_param("side", "BUY"))
        .and(query_param("type", "MARKET"))
        .and(query_param("quantity", "0.001"))
        .and(query_param_is_missing("price"))
        .and(query_param_is_missing("timeInForce"))
        .and(ValidSignature)
        .respond_with(ResponseTemplate::new(200).set_body_json(order_body("FILLED")))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let response = assert_ok!(
        client
            .place_order(
                "BTCUSDT",
                OrderSide::Buy,
                OrderType::Market,
                d("0.001"),
                None,
                TimeInForce::Gtc,
            )
            .await
    );

    assert_eq!(response.order_id, Some(283_194_212));
    assert_eq!(response.status.as_deref(), Some("FILLED"));
    assert_eq!(response.avg_price.as_deref(), Some("50000.00"));
}

#[tokio::test]
async fn test_place_limit_order_sends_price_and_time_in_force() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/fapi/v1/order"))
        .and(query_param("type", "LIMIT"))
        .and(query_param("price", "50000"))
        .and(query_param("timeInForce", "IOC"))
        .and(ValidSignature)
        .respond_with(ResponseTemplate::new(200).set_body_json(order_body("NEW")))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    assert_ok!(
        client
            .place_order(
                "BTCUSDT",
                OrderSide::Sell,
                OrderType::Limit,
                d("0.001"),
                Some(d("50000")),
                TimeInForce::Ioc,
            )
            .await
    );
}

#[tokio::test]
async fn test_market_order_drops_price_from_the_wire() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/fapi/v1/order"))
        .respond_with(ResponseTemplate::new(200).set_body_json(order_body("FILLED")))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    assert_ok!(
        client
            .place_order(
                "BTCUSDT",
                OrderSide::Buy,
                OrderType::Market,
                d("0.001"),
                Some(d("50000")),
                TimeInForce::Fok,
            )
            .await
    );

    let received = server.received_requests().await.expect("recording enabled");
    let query = received[0].url.query().expect("query string");
    assert!(query.starts_with("symbol=BTCUSDT&side=BUY&type=MARKET&quantity=0.001&timestamp="));
    assert!(!query.contains("price="));
    assert!(!query.contains("timeInForce="));
}

#[tokio::test]
async fn test_limit_order_without_price_never_reaches_exchange() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(order_body("NEW")))
        .expect(0)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = assert_err!(
        client
            .place_order(
                "BTCUSDT",
                OrderSide::Sell,
                OrderType::Limit,
                d("0.001"),
                None,
                TimeInForce::Gtc,
            )
            .await
    );
    assert!(matches!(
        err,
        BinanceError::Validation(ValidationError::MissingPrice)
    ));
}

#[tokio::test]
async fn test_get_order() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/fapi/v1/order"))
        .and(query_param("symbol", "BTCUSDT"))
        .and(query_param("orderId", "283194212"))
        .and(ValidSignature)
        .respond_with(ResponseTemplate::new(200).set_body_json(order_body("NEW")))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let response = assert_ok!(client.get_order("BTCUSDT", 283_194_212).await);
    assert_eq!(response.status.as_deref(), Some("NEW"));
}

#[tokio::test]
async fn test_cancel_order() {
    let server = setup_mock_server().await;
    Mock::given(method("DELETE"))
        .and(path("/fapi/v1/order"))
        .and(query_param("symbol", "BTCUSDT"))
        .and(query_param("orderId", "283194212"))
        .and(ValidSignature)
        .respond_with(ResponseTemplate::new(200).set_body_json(order_body("CANCELED")))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let response = assert_ok!(client.cancel_order("BTCUSDT", 283_194_212).await);
    assert_eq!(response.status.as_deref(), Some("CANCELED"));
}

#[tokio::test]
async fn test_cancel_unknown_order_is_api_error() {
    let server = setup_mock_server().await;
    Mock::given(method("DELETE"))
        .and(path("/fapi/v1/order"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(serde_json::json!({"code": -2011, "msg": "Unknown order sent."})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = assert_err!(client.cancel_order("BTCUSDT", 1).await);
    assert_eq!(err.to_string(), "API error [-2011]: Unknown order sent.");
}

#[tokio::test]
async fn test_account_balance_is_signed() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/fapi/v2/balance"))
        .and(header("x-mbx-apikey", TEST_API_KEY))
        .and(ValidSignature)
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "accountAlias": "SgsR",
                "asset": "USDT",
                "balance": "15000.00000000",
                "crossWalletBalance": "15000.00000000",
                "crossUnPnl": "0.00000000",
                "availableBalance": "14990.50000000",
                "maxWithdrawAmount": "14990.50000000",
                "marginAvailable": true,
                "updateTime": 1617939110373i64
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let balances = assert_ok!(client.account_balance().await);
    assert_eq!(balances.len(), 1);
    assert_eq!(balances[0].available_balance, d("14990.5"));
}

#[tokio::test]
async fn test_recv_window_is_signed_when_configured() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/fapi/v2/balance"))
        .and(query_param("recvWindow", "5000"))
        .and(ValidSignature)
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client_with_config(
        &server,
        ClientConfig {
            recv_window: Some(5000),
            ..ClientConfig::default()
        },
    );
    let balances = assert_ok!(client.account_balance().await);
    assert!(balances.is_empty());
}

#[tokio::test]
async fn test_sent_signature_reproduces_when_resigned() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/fapi/v1/order"))
        .respond_with(ResponseTemplate::new(200).set_body_json(order_body("NEW")))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    assert_ok!(
        client
            .place_order(
                "ETHUSDT",
                OrderSide::Buy,
                OrderType::Limit,
                d("0.5"),
                Some(d("2500.25")),
                TimeInForce::Gtc,
            )
            .await
    );

    let received = server.received_requests().await.expect("recording enabled");
    assert_eq!(received.len(), 1);

    let query = received[0].url.query().expect("query string").to_string();
    let (payload, signature) = split_signature(&query).expect("signature is last");
    assert!(payload.starts_with(
        "symbol=ETHUSDT&side=BUY&type=LIMIT&quantity=0.5&price=2500.25&timeInForce=GTC&timestamp="
    ));

    let signer = RequestSigner::new(TEST_API_SECRET).unwrap();
    assert_eq!(signer.sign(payload), signature);

    let params: QueryParams = received[0].url.query_pairs().collect();
    assert!(signer.verify(&params));
}

#[tokio::test]
async fn test_each_call_gets_a_fresh_signature() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/fapi/v2/balance"))
        .and(ValidSignature)
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(2)
        .mount(&server)
        .await;

    let client = test_client(&server);
    assert_ok!(client.account_balance().await);
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    assert_ok!(client.account_balance().await);

    let received = server.received_requests().await.expect("recording enabled");
    let timestamps: Vec<String> = received
        .iter()
        .map(|r| {
            r.url
                .query_pairs()
                .find(|(k, _)| k == "timestamp")
                .map(|(_, v)| v.into_owned())
                .expect("timestamp")
        })
        .collect();
    assert_ne!(timestamps[0], timestamps[1]);
}
