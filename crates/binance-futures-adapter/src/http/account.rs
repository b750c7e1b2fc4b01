/*
[INPUT]:  Signed query parameters
[OUTPUT]: Account balances
[POS]:    HTTP layer - account endpoints (require timestamp + signature)
[UPDATE]: When adding new account endpoints
*/

use reqwest::Method;

use crate::http::{BinanceFuturesClient, QueryParams, Result};
use crate::types::AssetBalance;

impl BinanceFuturesClient {
    /// Futures wallet balance per asset
    ///
    /// GET /fapi/v2/balance
    pub async fn account_balance(&self) -> Result<Vec<AssetBalance>> {
        self.send_request(Method::GET, "/fapi/v2/balance", QueryParams::new(), true)
            .await
    }
}
