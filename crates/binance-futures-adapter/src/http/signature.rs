/*
[INPUT]:  Request parameters, millisecond timestamp and API secret
[OUTPUT]: URL-encoded query strings carrying an HMAC-SHA256 `signature`
[POS]:    HTTP layer - request signing for authenticated endpoints
[UPDATE]: When changing signing algorithm or query serialization
*/

use std::fmt;

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::http::{BinanceError, Result};

type HmacSha256 = Hmac<Sha256>;

pub const TIMESTAMP_PARAM: &str = "timestamp";
pub const SIGNATURE_PARAM: &str = "signature";

/// Ordered query parameters. Serialization follows insertion order, so the
/// string that gets signed is exactly the string that gets sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: &str, value: impl ToString) -> &mut Self {
        self.0.push((key.to_string(), value.to_string()));
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Copy of these parameters with every `key` entry removed
    pub fn without(&self, key: &str) -> Self {
        Self(self.0.iter().filter(|(k, _)| k != key).cloned().collect())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn to_query_string(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.0.iter())
            .finish()
    }
}

impl<K: ToString, V: ToString> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}

/// Signs query strings with the account's API secret
#[derive(Clone)]
pub struct RequestSigner {
    mac: HmacSha256,
}

impl fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestSigner").finish_non_exhaustive()
    }
}

impl RequestSigner {
    pub fn new(api_secret: &str) -> Result<Self> {
        let mac = HmacSha256::new_from_slice(api_secret.as_bytes())
            .map_err(|err| BinanceError::Config(format!("invalid API secret: {err}")))?;
        Ok(Self { mac })
    }

    /// Lower-case hex HMAC-SHA256 of `payload`
    pub fn sign(&self, payload: &str) -> String {
        let mut mac = self.mac.clone();
        mac.update(payload.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Append `timestamp`, sign the resulting query string, then append `signature`
    pub fn sign_params(&self, mut params: QueryParams, timestamp: i64) -> QueryParams {
        params.push(TIMESTAMP_PARAM, timestamp);
        let signature = self.sign(&params.to_query_string());
        params.push(SIGNATURE_PARAM, signature);
        params
    }

    /// Check that a signed parameter set carries the signature of everything before it
    pub fn verify(&self, params: &QueryParams) -> bool {
        match params.get(SIGNATURE_PARAM) {
            Some(signature) => {
                self.sign(&params.without(SIGNATURE_PARAM).to_query_string()) == signature
            }
            None => false,
        }
    }
}

/// Current time in milliseconds since the Unix epoch
pub fn timestamp_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Example key and request from the Binance API documentation.
    const DOC_SECRET: &str = "NhqPtmdSJYdKjVHjA7PZj4Mge3R5YNiP1e3UZjInClVN65XAbvqqM6A7H5fATj0j";
    const DOC_QUERY: &str = "symbol=LTCBTC&side=BUY&type=LIMIT&timeInForce=GTC&quantity=1&price=0.1&recvWindow=5000&timestamp=1499827319559";
    const DOC_SIGNATURE: &str = "c8db56825ae71d6d79447849e617115f4a920fa2acdcab2b053c4b2838bd6b71";

    #[test]
    fn test_sign_matches_documented_vector() {
        let signer = RequestSigner::new(DOC_SECRET).unwrap();
        assert_eq!(signer.sign(DOC_QUERY), DOC_SIGNATURE);
    }

    #[test]
    fn test_sign_matches_rfc4231_case_2() {
        let signer = RequestSigner::new("Jefe").unwrap();
        assert_eq!(
            signer.sign("what do ya want for nothing?"),
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }

    #[test]
    fn test_sign_params_builds_documented_query() {
        let signer = RequestSigner::new(DOC_SECRET).unwrap();
        let params: QueryParams = [
            ("symbol", "LTCBTC"),
            ("side", "BUY"),
            ("type", "LIMIT"),
            ("timeInForce", "GTC"),
            ("quantity", "1"),
            ("price", "0.1"),
            ("recvWindow", "5000"),
        ]
        .into_iter()
        .collect();

        let signed = signer.sign_params(params, 1_499_827_319_559);
        assert_eq!(
            signed.to_query_string(),
            format!("{DOC_QUERY}&signature={DOC_SIGNATURE}")
        );
        assert!(signer.verify(&signed));
    }

    #[test]
    fn test_signature_is_deterministic_and_sensitive() {
        let signer = RequestSigner::new("secret").unwrap();
        let mut params = QueryParams::new();
        params.push("symbol", "BTCUSDT").push("quantity", "0.001");

        let first = signer.sign_params(params.clone(), 1_700_000_000_000);
        let second = signer.sign_params(params.clone(), 1_700_000_000_000);
        assert_eq!(first.get(SIGNATURE_PARAM), second.get(SIGNATURE_PARAM));

        let mut changed = QueryParams::new();
        changed.push("symbol", "BTCUSDT").push("quantity", "0.002");
        let third = signer.sign_params(changed, 1_700_000_000_000);
        assert_ne!(first.get(SIGNATURE_PARAM), third.get(SIGNATURE_PARAM));

        let later = signer.sign_params(params, 1_700_000_000_001);
        assert_ne!(first.get(SIGNATURE_PARAM), later.get(SIGNATURE_PARAM));
    }

    #[test]
    fn test_signature_depends_on_secret() {
        let a = RequestSigner::new("secret-a").unwrap();
        let b = RequestSigner::new("secret-b").unwrap();
        assert_ne!(a.sign("symbol=BTCUSDT"), b.sign("symbol=BTCUSDT"));

        let signed = a.sign_params(QueryParams::new(), 1);
        assert!(!b.verify(&signed));
    }

    #[test]
    fn test_query_string_is_url_encoded() {
        let mut params = QueryParams::new();
        params.push("note", "a b&c=d");
        assert_eq!(params.to_query_string(), "note=a+b%26c%3Dd");
    }

    #[test]
    fn test_debug_hides_secret() {
        let signer = RequestSigner::new("top-secret").unwrap();
        assert!(!format!("{signer:?}").contains("top-secret"));
    }
}
