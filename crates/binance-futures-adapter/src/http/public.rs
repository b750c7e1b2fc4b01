/*
[INPUT]:  Optional symbol filter
[OUTPUT]: Connectivity status, server time and exchange metadata
[POS]:    HTTP layer - public endpoints (no timestamp, no signature)
[UPDATE]: When adding new public endpoints or changing response format
*/

use reqwest::Method;
use tracing::{error, info};

use crate::http::{BinanceFuturesClient, QueryParams, Result};
use crate::types::{ExchangeInfo, ServerTime};

impl BinanceFuturesClient {
    /// Connectivity probe
    ///
    /// GET /fapi/v1/ping
    pub async fn ping(&self) -> Result<()> {
        let _: serde_json::Value = self
            .send_request(Method::GET, "/fapi/v1/ping", QueryParams::new(), false)
            .await?;
        Ok(())
    }

    /// [`ping`](Self::ping) folded into a boolean, logging the outcome
    pub async fn test_connectivity(&self) -> bool {
        match self.ping().await {
            Ok(()) => {
                info!("API connectivity test passed");
                true
            }
            Err(err) => {
                error!(error = %err, "API connectivity test failed");
                false
            }
        }
    }

    /// GET /fapi/v1/time
    pub async fn server_time(&self) -> Result<ServerTime> {
        self.send_request(Method::GET, "/fapi/v1/time", QueryParams::new(), false)
            .await
    }

    /// Exchange trading rules and symbol list
    ///
    /// GET /fapi/v1/exchangeInfo?symbol={symbol}
    pub async fn exchange_info(&self, symbol: Option<&str>) -> Result<ExchangeInfo> {
        let mut params = QueryParams::new();
        if let Some(s) = symbol {
            params.push("symbol", s);
        }
        self.send_request(Method::GET, "/fapi/v1/exchangeInfo", params, false)
            .await
    }
}
