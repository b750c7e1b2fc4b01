/*
[INPUT]:  BINANCE_API_KEY / BINANCE_API_SECRET and order parameters
[OUTPUT]: Order creation/cancellation confirmations
[POS]:    Examples - trading operations
[UPDATE]: When trading API changes
*/

use binance_futures_adapter::*;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Example: place a far-from-market LIMIT order on testnet, look it up, cancel it.
#[tokio::main]
async fn main() {
    println!("=== Binance Futures Trading Example ===\n");

    let (Ok(key), Ok(secret)) = (
        std::env::var("BINANCE_API_KEY"),
        std::env::var("BINANCE_API_SECRET"),
    ) else {
        eprintln!("Set BINANCE_API_KEY and BINANCE_API_SECRET to run this example");
        return;
    };

    let client = match BinanceFuturesClient::new(Credentials::new(key, secret), Environment::Testnet)
    {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    let order = match OrderRequest::validate(
        "btcusdt",
        "buy",
        "limit",
        Decimal::from_str("0.002").unwrap_or_default(),
        Some(Decimal::from_str("20000").unwrap_or_default()),
    ) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Invalid order: {}", e);
            return;
        }
    };
    println!("Submitting: {}", order);

    let placed = match client
        .place_order(
            order.symbol(),
            order.side(),
            order.order_type(),
            order.quantity(),
            order.price(),
            TimeInForce::Gtc,
        )
        .await
    {
        Ok(r) => r,
        Err(e) => {
            eprintln!("[{}] {}", e.kind(), e);
            return;
        }
    };

    let Some(order_id) = placed.order_id else {
        eprintln!("Exchange returned no order id");
        return;
    };
    println!("✓ Order {} placed, status {:?}", order_id, placed.status);

    match client.get_order(order.symbol(), order_id).await {
        Ok(r) => println!("✓ Order {} status {:?}", order_id, r.status),
        Err(e) => eprintln!("[{}] {}", e.kind(), e),
    }

    match client.cancel_order(order.symbol(), order_id).await {
        Ok(r) => println!("✓ Order {} cancelled, status {:?}", order_id, r.status),
        Err(e) => eprintln!("[{}] {}", e.kind(), e),
    }
}
