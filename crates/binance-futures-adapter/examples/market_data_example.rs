/*
[INPUT]:  Public testnet endpoints
[OUTPUT]: Connectivity, server time and symbol metadata printed to stdout
[POS]:    Examples - public data
[UPDATE]: When public API changes
*/

use binance_futures_adapter::*;

/// Example: unsigned endpoints. Credentials are not checked by these calls,
/// so placeholders are fine.
#[tokio::main]
async fn main() {
    println!("=== Binance Futures Market Data Example ===\n");

    let client = match BinanceFuturesClient::new(Credentials::new("", ""), Environment::Testnet) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    if !client.test_connectivity().await {
        eprintln!("✗ Testnet unreachable");
        return;
    }
    println!("✓ Connected to {}", client.base_url());

    match client.server_time().await {
        Ok(time) => println!("Server time: {}", format_millis(time.server_time)),
        Err(e) => eprintln!("server_time failed: {}", e),
    }

    match client.exchange_info(Some("BTCUSDT")).await {
        Ok(info) => {
            for symbol in info.symbols.iter().filter(|s| s.symbol == "BTCUSDT") {
                println!(
                    "{} {}/{} status={}",
                    symbol.symbol, symbol.base_asset, symbol.quote_asset, symbol.status
                );
            }
        }
        Err(e) => eprintln!("exchange_info failed: {}", e),
    }
}
