/*
[INPUT]:  Error sources (validation, transport, response parsing, exchange rejections)
[OUTPUT]: Structured error types grouped into taxonomy kinds
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use std::fmt;
use std::time::Duration;

use thiserror::Error;

use crate::types::ValidationError;

/// Main error type for the Binance futures adapter
#[derive(Error, Debug)]
pub enum BinanceError {
    /// Order rejected locally before any network call
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Request did not complete within the per-call timeout
    #[error("Request timeout after {duration:?} - please try again")]
    Timeout { duration: Duration },

    /// Could not reach the exchange
    #[error("Connection error - please check your internet connection: {0}")]
    Connection(String),

    /// Any other transport failure
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Body was not valid JSON or did not match the expected shape
    #[error("Invalid JSON response: {body}")]
    MalformedResponse { body: String },

    /// Exchange answered with a non-success status
    #[error("API error [{}]: {message}", api_code(.code))]
    Api { code: Option<i64>, message: String },

    /// HTTP method outside GET/POST/DELETE
    #[error("Unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Client could not be constructed
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Taxonomy family of a [`BinanceError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Transport,
    Protocol,
    Api,
    Programmer,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Validation => "Validation Error",
            ErrorKind::Transport => "Transport Error",
            ErrorKind::Protocol => "Protocol Error",
            ErrorKind::Api => "API Error",
            ErrorKind::Programmer => "Programmer Error",
        };
        f.write_str(name)
    }
}

fn api_code(code: &Option<i64>) -> String {
    code.map_or_else(|| "N/A".to_string(), |c| c.to_string())
}

impl BinanceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BinanceError::Validation(_) => ErrorKind::Validation,
            BinanceError::Timeout { .. } | BinanceError::Connection(_) | BinanceError::Http(_) => {
                ErrorKind::Transport
            }
            BinanceError::MalformedResponse { .. } => ErrorKind::Protocol,
            BinanceError::Api { .. } => ErrorKind::Api,
            BinanceError::UnsupportedMethod(_)
            | BinanceError::UrlParse(_)
            | BinanceError::Config(_) => ErrorKind::Programmer,
        }
    }

    /// Always false: every call is attempted exactly once
    pub fn is_retryable(&self) -> bool {
        false
    }

    /// Build an API error from the `code`/`msg` fields of an error body
    pub fn from_error_body(body: &serde_json::Value) -> Self {
        BinanceError::Api {
            code: body.get("code").and_then(serde_json::Value::as_i64),
            message: body
                .get("msg")
                .and_then(serde_json::Value::as_str)
                .unwrap_or("Unknown error")
                .to_string(),
        }
    }
}

/// Result type alias for Binance operations
pub type Result<T> = std::result::Result<T, BinanceError>;
