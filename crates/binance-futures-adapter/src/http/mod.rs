/*
[INPUT]:  Credentials, HTTP configuration and API endpoints
[OUTPUT]: Signed calls and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod account;
pub mod client;
pub mod error;
pub mod public;
pub mod signature;
pub mod trade;

pub use error::{BinanceError, ErrorKind, Result};
pub use signature::{QueryParams, RequestSigner};

pub use client::{BinanceFuturesClient, ClientConfig, Credentials, Environment};
