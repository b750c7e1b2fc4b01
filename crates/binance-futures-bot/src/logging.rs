/*
[INPUT]:  Console log level, log directory
[OUTPUT]: Global tracing subscriber (stderr + per-run log file) and its flush guard
[POS]:    Observability layer - process-wide logging setup
[UPDATE]: When changing log destinations, formats or default levels
*/

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use chrono::Local;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

/// The file log always captures this much, regardless of the console level
const FILE_FILTER: &str = "info,binance_futures_adapter=debug,binance_futures_bot=debug";

/// `binance_futures_bot_<YYYYmmdd_HHMMSS>.log`
pub fn log_file_name() -> String {
    format!(
        "binance_futures_bot_{}.log",
        Local::now().format("%Y%m%d_%H%M%S")
    )
}

/// Install the global subscriber.
///
/// Console output goes to stderr at `log_level`; a fresh file under `log_dir`
/// gets DEBUG detail for both crates. Keep the returned guard alive until exit
/// or buffered file lines are lost.
pub fn init_tracing(log_level: &str, log_dir: &Path) -> Result<(WorkerGuard, PathBuf)> {
    let console_filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    let file_filter = EnvFilter::try_new(FILE_FILTER).context("invalid file log filter")?;

    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("create log directory {}", log_dir.display()))?;
    let file_name = log_file_name();
    let log_path = log_dir.join(&file_name);

    let appender = tracing_appender::rolling::never(log_dir, &file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let console_layer = fmt::layer()
        .compact()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(console_filter);

    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_writer(writer)
        .with_filter(file_filter);

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;

    Ok((guard, log_path))
}
