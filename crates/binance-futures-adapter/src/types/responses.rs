/*
[INPUT]:  JSON bodies returned by Binance futures REST endpoints
[OUTPUT]: Typed Rust response records with optional fields
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new endpoints are consumed
*/

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::models::SymbolInfo;

/// GET /fapi/v1/time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerTime {
    pub server_time: i64,
}

impl ServerTime {
    pub fn as_local(&self) -> Option<DateTime<Local>> {
        millis_to_local(self.server_time)
    }
}

/// GET /fapi/v1/exchangeInfo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeInfo {
    #[serde(default)]
    pub timezone: String,
    #[serde(default)]
    pub server_time: Option<i64>,
    #[serde(default)]
    pub symbols: Vec<SymbolInfo>,
}

/// Order record returned by the order endpoints.
///
/// Every field is optional: the exchange omits some of them depending on the
/// endpoint and the order state. Fields not modelled here land in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    #[serde(default)]
    pub order_id: Option<i64>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub client_order_id: Option<String>,
    #[serde(default)]
    pub side: Option<String>,
    #[serde(default, rename = "type")]
    pub order_type: Option<String>,
    #[serde(default)]
    pub orig_qty: Option<String>,
    #[serde(default)]
    pub executed_qty: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub avg_price: Option<String>,
    #[serde(default)]
    pub time_in_force: Option<String>,
    #[serde(default)]
    pub update_time: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl OrderResponse {
    /// Label/value pairs shown after an order call, in display order.
    /// Missing and empty values are skipped.
    pub fn display_fields(&self) -> Vec<(&'static str, String)> {
        let text = |label: &'static str, value: &Option<String>| {
            value
                .as_deref()
                .filter(|v| !v.is_empty())
                .map(|v| (label, v.to_string()))
        };

        [
            self.order_id.map(|id| ("Order ID", id.to_string())),
            text("Symbol", &self.symbol),
            text("Status", &self.status),
            text("Side", &self.side),
            text("Type", &self.order_type),
            text("Original Quantity", &self.orig_qty),
            text("Executed Quantity", &self.executed_qty),
            text("Price", &self.price),
            text("Average Price", &self.avg_price),
            text("Time In Force", &self.time_in_force),
            self.update_time
                .filter(|ms| *ms != 0)
                .map(|ms| ("Update Time", format_millis(ms))),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

fn millis_to_local(ms: i64) -> Option<DateTime<Local>> {
    DateTime::from_timestamp_millis(ms).map(|utc| utc.with_timezone(&Local))
}

/// Render an epoch-millisecond timestamp as local `YYYY-mm-dd HH:MM:SS`
pub fn format_millis(ms: i64) -> String {
    millis_to_local(ms)
        .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| ms.to_string())
}
