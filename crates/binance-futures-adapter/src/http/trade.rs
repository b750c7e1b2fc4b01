/*
[INPUT]:  Order fields, symbol and order id
[OUTPUT]: Order records as returned by the exchange
[POS]:    HTTP layer - order endpoints (require timestamp + signature)
[UPDATE]: When adding new trading endpoints or changing order flow
*/

use reqwest::Method;
use rust_decimal::Decimal;
use tracing::info;

use crate::http::{BinanceFuturesClient, QueryParams, Result};
use crate::types::requests::new_order_params;
use crate::types::{OrderResponse, OrderSide, OrderType, TimeInForce, ValidationError};

const ORDER_ENDPOINT: &str = "/fapi/v1/order";

impl BinanceFuturesClient {
    /// Place a new order
    ///
    /// POST /fapi/v1/order
    ///
    /// `price` and `time_in_force` are only sent for LIMIT orders. A LIMIT order
    /// without a price fails with [`ValidationError::MissingPrice`] and nothing is sent.
    pub async fn place_order(
        &self,
        symbol: &str,
        side: OrderSide,
        order_type: OrderType,
        quantity: Decimal,
        price: Option<Decimal>,
        time_in_force: TimeInForce,
    ) -> Result<OrderResponse> {
        let price = match order_type {
            OrderType::Limit => Some(price.ok_or(ValidationError::MissingPrice)?),
            OrderType::Market => None,
        };
        let params = new_order_params(symbol, side, order_type, quantity, price, time_in_force);

        info!(
            %side,
            %quantity,
            symbol,
            %order_type,
            price = ?price,
            "placing order"
        );

        self.send_request(Method::POST, ORDER_ENDPOINT, params, true)
            .await
    }

    /// Query one order
    ///
    /// GET /fapi/v1/order?symbol={symbol}&orderId={order_id}
    pub async fn get_order(&self, symbol: &str, order_id: i64) -> Result<OrderResponse> {
        self.send_request(Method::GET, ORDER_ENDPOINT, order_params(symbol, order_id), true)
            .await
    }

    /// Cancel an open order
    ///
    /// DELETE /fapi/v1/order?symbol={symbol}&orderId={order_id}
    pub async fn cancel_order(&self, symbol: &str, order_id: i64) -> Result<OrderResponse> {
        info!(order_id, symbol, "cancelling order");
        self.send_request(Method::DELETE, ORDER_ENDPOINT, order_params(symbol, order_id), true)
            .await
    }
}

fn order_params(symbol: &str, order_id: i64) -> QueryParams {
    let mut params = QueryParams::new();
    params.push("symbol", symbol).push("orderId", order_id);
    params
}
