/*
[INPUT]:  CLI arguments, optional YAML configuration, BINANCE_* environment (.env)
[OUTPUT]: Orders placed, queried or cancelled on Binance futures; process exit code
[POS]:    Binary entry point
[UPDATE]: When changing CLI commands, flags or startup flow
*/

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use binance_futures_adapter::{
    BinanceError, BinanceFuturesClient, TimeInForce, validate_order_input,
};
use clap::{Parser, Subcommand};
use console::style;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use binance_futures_bot::logging::init_tracing;
use binance_futures_bot::{BotConfig, ConsolePresenter, OrderManager};

#[derive(Parser, Debug)]
#[command(
    name = "binance-futures-bot",
    version,
    about = "Binance USD-M futures testnet trading bot"
)]
struct Cli {
    /// YAML config file (defaults to ./binance-futures-bot.yaml when present)
    #[arg(long = "config", value_name = "PATH", global = true)]
    config_path: Option<PathBuf>,
    /// Console log filter, e.g. `info` or `binance_futures_adapter=debug`
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info", global = true)]
    log_level: String,
    #[arg(long = "log-dir", value_name = "DIR", default_value = "logs", global = true)]
    log_dir: PathBuf,
    /// Talk to the production exchange instead of the testnet
    #[arg(long, global = true)]
    production: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Place a MARKET or LIMIT order
    #[command(allow_negative_numbers = true)]
    PlaceOrder {
        /// Trading pair, e.g. BTCUSDT
        symbol: String,
        /// BUY or SELL
        side: String,
        /// MARKET or LIMIT
        order_type: String,
        quantity: Decimal,
        /// Limit price (required for LIMIT orders)
        #[arg(short, long)]
        price: Option<Decimal>,
        #[arg(long = "time-in-force", value_name = "TIF", default_value = "GTC")]
        time_in_force: TimeInForce,
    },
    /// Show non-zero futures wallet balances
    CheckBalance,
    /// Ping the exchange and print its clock
    TestConnection,
    /// Look up one order
    OrderStatus { symbol: String, order_id: i64 },
    /// Cancel one open order
    CancelOrder { symbol: String, order_id: i64 },
    /// Print version information
    Version,
}

#[tokio::main]
async fn main() -> ExitCode {
    match dotenvy::dotenv() {
        Ok(_) => {}
        Err(err) if err.not_found() => {}
        Err(err) => eprintln!("{} {err}", style("warning: failed to load .env:").yellow()),
    }

    let args = Cli::parse();
    if let Command::Version = args.command {
        print_version();
        return ExitCode::SUCCESS;
    }

    let (_guard, log_path) = match init_tracing(&args.log_level, &args.log_dir) {
        Ok(installed) => installed,
        Err(err) => {
            report(&err);
            return ExitCode::FAILURE;
        }
    };
    debug!(log_file = %log_path.display(), "file logging enabled");

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Cli) -> Result<()> {
    let mut config = BotConfig::load(args.config_path.as_deref())?;
    if args.production {
        config.testnet = false;
    }
    if !config.testnet {
        warn!("running against the PRODUCTION exchange");
    }

    let client = BinanceFuturesClient::with_config(
        config.credentials()?,
        config.environment(),
        config.client_config(),
    )
    .context("create Binance futures client")?;

    let presenter = ConsolePresenter::new();
    let title = if config.testnet {
        "Binance Futures Testnet Trading Bot"
    } else {
        "Binance Futures Trading Bot (PRODUCTION)"
    };
    presenter.banner(title, Some(client.base_url().as_str()));

    match args.command {
        Command::PlaceOrder {
            symbol,
            side,
            order_type,
            quantity,
            price,
            time_in_force,
        } => {
            let order = validate_order_input(&symbol, &side, &order_type, quantity, price)
                .map_err(BinanceError::from)?;

            presenter.progress("Testing API connection...");
            if !client.test_connectivity().await {
                anyhow::bail!("Cannot connect to Binance API. Please check your connection.");
            }
            presenter.success("API connection successful");

            let manager = OrderManager::new(client, presenter).with_time_in_force(time_in_force);
            let outcome = manager.submit(order).await?;
            info!(
                response = %serde_json::to_string(&outcome.response)?,
                "order completed"
            );
        }
        Command::CheckBalance => {
            presenter.progress("Fetching account balance...");
            let balances = client.account_balance().await?;
            info!(assets = balances.len(), "retrieved account balance");
            presenter.balances(&balances);
        }
        Command::TestConnection => {
            presenter.progress("Testing API connection...");
            client.ping().await?;
            let server_time = client.server_time().await?;
            presenter.success("API connection successful");
            let shown = server_time.as_local().map_or_else(
                || server_time.server_time.to_string(),
                |local| local.format("%Y-%m-%d %H:%M:%S %Z").to_string(),
            );
            presenter.success(&format!("Server time: {shown}"));
        }
        Command::OrderStatus { symbol, order_id } => {
            OrderManager::new(client, presenter)
                .get_order_status(&symbol, order_id)
                .await?;
        }
        Command::CancelOrder { symbol, order_id } => {
            OrderManager::new(client, presenter)
                .cancel_order(&symbol, order_id)
                .await?;
        }
        Command::Version => print_version(),
    }

    Ok(())
}

fn print_version() {
    println!(
        "{} {}",
        style(env!("CARGO_PKG_NAME")).bold().cyan(),
        env!("CARGO_PKG_VERSION")
    );
}

/// One-line failure summary on stderr, prefixed with the error family when known
fn report(err: &anyhow::Error) {
    let label = match err.downcast_ref::<BinanceError>() {
        Some(binance) => binance.kind().to_string(),
        None => "Error".to_string(),
    };
    eprintln!("{} {err:#}", style(format!("✗ {label}:")).red().bold());
}
