/*
[INPUT]:  Raw order fields as typed by a user (symbol, side, type, quantity, price)
[OUTPUT]: Validated, normalized OrderRequest or a ValidationError
[POS]:    Data layer - order validation gate before any network call
[UPDATE]: When exchange order rules change
*/

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use super::enums::{OrderSide, OrderType, TimeInForce};
use crate::http::QueryParams;

/// Reasons an order is rejected locally, before it reaches the exchange
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid {field}: '{value}'")]
    InvalidEnum { field: &'static str, value: String },

    #[error("Symbol must be non-empty and contain only alphanumeric characters, got '{0}'")]
    InvalidSymbol(String),

    #[error("Quantity must be greater than zero, got {0}")]
    InvalidQuantity(Decimal),

    #[error("Price must be greater than zero, got {0}")]
    InvalidPrice(Decimal),

    #[error("Price is required for LIMIT orders")]
    MissingPrice,

    #[error("Price should not be specified for MARKET orders")]
    UnexpectedPrice,
}

/// An order that passed every local rule. Only obtainable through [`OrderRequest::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderRequest {
    symbol: String,
    side: OrderSide,
    order_type: OrderType,
    quantity: Decimal,
    price: Option<Decimal>,
}

/// Trim and upper-case a symbol. Idempotent.
pub fn normalize_symbol(symbol: &str) -> String {
    symbol.trim().to_uppercase()
}

impl OrderRequest {
    /// Validate raw order input.
    ///
    /// Rules are checked in order and the first failure wins: side/type enums,
    /// symbol, quantity, price, then the LIMIT/MARKET price requirement.
    pub fn validate(
        symbol: &str,
        side: &str,
        order_type: &str,
        quantity: Decimal,
        price: Option<Decimal>,
    ) -> Result<Self, ValidationError> {
        let side: OrderSide = side.parse()?;
        let order_type: OrderType = order_type.parse()?;

        let symbol = normalize_symbol(symbol);
        if symbol.is_empty() || !symbol.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ValidationError::InvalidSymbol(symbol));
        }

        if quantity <= Decimal::ZERO {
            return Err(ValidationError::InvalidQuantity(quantity));
        }

        if let Some(p) = price {
            if p <= Decimal::ZERO {
                return Err(ValidationError::InvalidPrice(p));
            }
        }

        match (order_type, price) {
            (OrderType::Limit, None) => return Err(ValidationError::MissingPrice),
            (OrderType::Market, Some(_)) => return Err(ValidationError::UnexpectedPrice),
            _ => {}
        }

        Ok(Self {
            symbol,
            side,
            order_type,
            quantity,
            price,
        })
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn side(&self) -> OrderSide {
        self.side
    }

    pub fn order_type(&self) -> OrderType {
        self.order_type
    }

    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    pub fn price(&self) -> Option<Decimal> {
        self.price
    }

    /// Parameters for `POST /fapi/v1/order`, without timestamp or signature
    pub fn to_params(&self, time_in_force: TimeInForce) -> QueryParams {
        new_order_params(
            &self.symbol,
            self.side,
            self.order_type,
            self.quantity,
            self.price,
            time_in_force,
        )
    }
}

/// Order parameters in wire order. `price` and `timeInForce` go together and
/// only when a price is given.
pub(crate) fn new_order_params(
    symbol: &str,
    side: OrderSide,
    order_type: OrderType,
    quantity: Decimal,
    price: Option<Decimal>,
    time_in_force: TimeInForce,
) -> QueryParams {
    let mut params = QueryParams::new();
    params
        .push("symbol", symbol)
        .push("side", side)
        .push("type", order_type)
        .push("quantity", quantity);
    if let Some(price) = price {
        params.push("price", price).push("timeInForce", time_in_force);
    }
    params
}

impl fmt::Display for OrderRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} @ {}",
            self.side, self.quantity, self.symbol, self.order_type
        )?;
        if let Some(price) = self.price {
            write!(f, " price={price}")?;
        }
        Ok(())
    }
}

/// Free-function form of [`OrderRequest::validate`]
pub fn validate_order_input(
    symbol: &str,
    side: &str,
    order_type: &str,
    quantity: Decimal,
    price: Option<Decimal>,
) -> Result<OrderRequest, ValidationError> {
    OrderRequest::validate(symbol, side, order_type, quantity, price)
}
