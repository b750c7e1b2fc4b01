/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed account and market records
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One entry of `exchangeInfo.symbols`. Filters and the remaining fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolInfo {
    pub symbol: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub base_asset: String,
    #[serde(default)]
    pub quote_asset: String,
    #[serde(default)]
    pub contract_type: Option<String>,
}

/// One asset row of GET /fapi/v2/balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetBalance {
    #[serde(default)]
    pub account_alias: Option<String>,
    pub asset: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub balance: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub available_balance: Decimal,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub cross_wallet_balance: Option<Decimal>,
    #[serde(default, rename = "crossUnPnl", with = "rust_decimal::serde::str_option")]
    pub cross_un_pnl: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub max_withdraw_amount: Option<Decimal>,
    #[serde(default)]
    pub update_time: Option<i64>,
}

impl AssetBalance {
    pub fn is_empty(&self) -> bool {
        self.balance.is_zero()
    }
}
