/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for binance-futures-adapter tests

#![allow(dead_code)]

use binance_futures_adapter::{BinanceFuturesClient, ClientConfig, Credentials, RequestSigner};
use rust_decimal::Decimal;
use wiremock::{Match, MockServer, Request};

pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_API_SECRET: &str = "test-api-secret";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

pub fn test_client(server: &MockServer) -> BinanceFuturesClient {
    test_client_with_config(server, ClientConfig::default())
}

pub fn test_client_with_config(server: &MockServer, config: ClientConfig) -> BinanceFuturesClient {
    BinanceFuturesClient::with_config_and_base_url(
        Credentials::new(TEST_API_KEY, TEST_API_SECRET),
        config,
        &server.uri(),
    )
    .expect("client init")
}

pub fn d(value: &str) -> Decimal {
    value.parse().expect("decimal literal")
}

/// Split a signed query string into (payload, signature)
pub fn split_signature(query: &str) -> Option<(&str, &str)> {
    query.rsplit_once("&signature=")
}

/// Matches requests whose trailing `signature` is the HMAC of the rest of the query
pub struct ValidSignature;

impl Match for ValidSignature {
    fn matches(&self, request: &Request) -> bool {
        let Some((payload, signature)) = request.url.query().and_then(split_signature) else {
            return false;
        };
        let signer = RequestSigner::new(TEST_API_SECRET).expect("signer");
        signer.sign(payload) == signature
    }
}

pub fn order_body(status: &str) -> serde_json::Value {
    serde_json::json!({
        "orderId": 283194212,
        "symbol": "BTCUSDT",
        "status": status,
        "clientOrderId": "x-testnet-1",
        "price": "0",
        "avgPrice": "50000.00",
        "origQty": "0.001",
        "executedQty": "0.001",
        "cumQuote": "50.00",
        "timeInForce": "GTC",
        "type": "MARKET",
        "reduceOnly": false,
        "side": "BUY",
        "updateTime": 1700000000000i64
    })
}
