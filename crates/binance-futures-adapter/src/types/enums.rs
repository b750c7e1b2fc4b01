/*
[INPUT]:  Binance futures enumerations and user supplied strings
[OUTPUT]: Typed Rust enums with serialization and case-insensitive parsing
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new enum values are supported
*/

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::requests::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl OrderSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderSide::Buy => "BUY",
            OrderSide::Sell => "SELL",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderType {
    Market,
    Limit,
}

impl OrderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::Market => "MARKET",
            OrderType::Limit => "LIMIT",
        }
    }
}

/// How long a LIMIT order stays on the book
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TimeInForce {
    /// Good till cancel
    #[default]
    Gtc,
    /// Immediate or cancel
    Ioc,
    /// Fill or kill
    Fok,
    /// Post only
    Gtx,
}

impl TimeInForce {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeInForce::Gtc => "GTC",
            TimeInForce::Ioc => "IOC",
            TimeInForce::Fok => "FOK",
            TimeInForce::Gtx => "GTX",
        }
    }
}

fn parse_enum<T: Copy>(
    field: &'static str,
    value: &str,
    variants: &[(&str, T)],
) -> Result<T, ValidationError> {
    let upper = value.trim().to_ascii_uppercase();
    variants
        .iter()
        .find(|(name, _)| *name == upper)
        .map(|(_, variant)| *variant)
        .ok_or_else(|| ValidationError::InvalidEnum {
            field,
            value: value.to_string(),
        })
}

impl FromStr for OrderSide {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_enum("side", s, &[("BUY", OrderSide::Buy), ("SELL", OrderSide::Sell)])
    }
}

impl FromStr for OrderType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_enum(
            "order_type",
            s,
            &[("MARKET", OrderType::Market), ("LIMIT", OrderType::Limit)],
        )
    }
}

impl FromStr for TimeInForce {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_enum(
            "time_in_force",
            s,
            &[
                ("GTC", TimeInForce::Gtc),
                ("IOC", TimeInForce::Ioc),
                ("FOK", TimeInForce::Fok),
                ("GTX", TimeInForce::Gtx),
            ],
        )
    }
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for TimeInForce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
