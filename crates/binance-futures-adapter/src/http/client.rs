/*
[INPUT]:  Credentials, environment selection and HTTP configuration (timeouts)
[OUTPUT]: Configured client that signs, sends and decodes Binance futures calls
[POS]:    HTTP layer - core client implementation and call lifecycle
[UPDATE]: When adding connection options or changing client behavior
*/

use std::fmt;
use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, error, info};

use crate::http::signature::{QueryParams, RequestSigner, timestamp_ms};
use crate::http::{BinanceError, Result};

/// Base URLs for the Binance USD-M futures API
const TESTNET_BASE_URL: &str = "https://testnet.binancefuture.com";
const PRODUCTION_BASE_URL: &str = "https://fapi.binance.com";

/// `X-MBX-APIKEY`; header names go on the wire case-insensitively
pub const API_KEY_HEADER: &str = "x-mbx-apikey";

const SUPPORTED_METHODS: [Method; 3] = [Method::GET, Method::POST, Method::DELETE];

/// Which exchange deployment to talk to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Environment {
    #[default]
    Testnet,
    Production,
}

impl Environment {
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Testnet => TESTNET_BASE_URL,
            Environment::Production => PRODUCTION_BASE_URL,
        }
    }
}

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Wall-clock ceiling for one call, including reading the body
    pub timeout: Duration,
    pub connect_timeout: Duration,
    /// Sent as `recvWindow` on signed calls when set (milliseconds)
    pub recv_window: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(10),
            recv_window: None,
        }
    }
}

/// API key pair. The secret only ever feeds the signer.
#[derive(Clone)]
pub struct Credentials {
    pub api_key: String,
    pub api_secret: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}

/// Main HTTP client for the Binance futures API
#[derive(Debug)]
pub struct BinanceFuturesClient {
    http_client: Client,
    base_url: Url,
    signer: RequestSigner,
    config: ClientConfig,
}

impl BinanceFuturesClient {
    /// Create a new client with default configuration
    pub fn new(credentials: Credentials, environment: Environment) -> Result<Self> {
        Self::with_config(credentials, environment, ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(
        credentials: Credentials,
        environment: Environment,
        config: ClientConfig,
    ) -> Result<Self> {
        let client = Self::with_config_and_base_url(credentials, config, environment.base_url())?;
        info!(
            testnet = environment == Environment::Testnet,
            base_url = %client.base_url,
            "initialized Binance futures client"
        );
        Ok(client)
    }

    /// Create a client against an arbitrary base URL (mock servers, proxies)
    pub fn with_config_and_base_url(
        credentials: Credentials,
        config: ClientConfig,
        base_url: &str,
    ) -> Result<Self> {
        let mut api_key = HeaderValue::from_str(&credentials.api_key)
            .map_err(|_| BinanceError::Config("API key is not a valid header value".into()))?;
        api_key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, api_key);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http_client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|err| BinanceError::Config(format!("failed to build HTTP client: {err}")))?;

        Ok(Self {
            http_client,
            base_url: Url::parse(base_url)?,
            signer: RequestSigner::new(&credentials.api_secret)?,
            config,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn signer(&self) -> &RequestSigner {
        &self.signer
    }

    /// Add `recvWindow` (when configured), `timestamp` and `signature`
    pub(crate) fn sign(&self, mut params: QueryParams, timestamp: i64) -> QueryParams {
        if let Some(window) = self.config.recv_window {
            params.push("recvWindow", window);
        }
        self.signer.sign_params(params, timestamp)
    }

    /// Build the full request URL with `params` as the literal query string
    pub(crate) fn endpoint_url(&self, endpoint: &str, params: &QueryParams) -> Result<Url> {
        let mut url = self.base_url.join(endpoint)?;
        if !params.is_empty() {
            url.set_query(Some(&params.to_query_string()));
        }
        Ok(url)
    }

    /// Execute one call: sign if requested, send once, decode.
    ///
    /// No retry is attempted on any failure.
    pub(crate) async fn send_request<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        params: QueryParams,
        signed: bool,
    ) -> Result<T> {
        if !SUPPORTED_METHODS.contains(&method) {
            error!(method = %method, endpoint, "unsupported HTTP method");
            return Err(BinanceError::UnsupportedMethod(method.to_string()));
        }

        let param_count = params.len();
        let params = if signed {
            self.sign(params, timestamp_ms())
        } else {
            params
        };
        let url = self.endpoint_url(endpoint, &params)?;

        debug!(method = %method, endpoint, signed, param_count, "sending request");

        let result = self.execute(method.clone(), url).await;
        match &result {
            Ok(_) => debug!(method = %method, endpoint, "request succeeded"),
            Err(err) => error!(method = %method, endpoint, error = %err, "request failed"),
        }
        result
    }

    async fn execute<T: DeserializeOwned>(&self, method: Method, url: Url) -> Result<T> {
        let response = self
            .http_client
            .request(method, url)
            .send()
            .await
            .map_err(|err| self.transport_error(err))?;

        let status = response.status();
        debug!(status = status.as_u16(), "response received");

        let body = response
            .text()
            .await
            .map_err(|err| self.transport_error(err))?;
        decode_response(status, &body)
    }

    fn transport_error(&self, err: reqwest::Error) -> BinanceError {
        if err.is_timeout() {
            BinanceError::Timeout {
                duration: self.config.timeout,
            }
        } else if err.is_connect() {
            BinanceError::Connection(err.to_string())
        } else {
            BinanceError::Http(err)
        }
    }
}

/// Turn a status and raw body into the expected record or a classified error
pub(crate) fn decode_response<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T> {
    let malformed = || BinanceError::MalformedResponse {
        body: body.to_string(),
    };

    let value: serde_json::Value = serde_json::from_str(body).map_err(|_| malformed())?;

    if status != StatusCode::OK {
        return Err(BinanceError::from_error_body(&value));
    }

    serde_json::from_value(value).map_err(|_| malformed())
}
