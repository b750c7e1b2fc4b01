/*
[INPUT]:  Optional YAML file, BINANCE_* environment variables (.env loaded by the binary)
[OUTPUT]: Parsed bot configuration and exchange credentials
[POS]:    Configuration layer - client setup
[UPDATE]: When adding new configuration options
*/

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use binance_futures_adapter::{ClientConfig, Credentials, Environment};
use config::{Config, Environment as EnvSource, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Config file picked up from the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "binance-futures-bot.yaml";

/// Prefix of the environment variables read into [`BotConfig`]
pub const ENV_PREFIX: &str = "BINANCE";

/// Top-level configuration for the trading bot
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BotConfig {
    /// API key (BINANCE_API_KEY)
    #[serde(default)]
    pub api_key: Option<String>,
    /// API secret (BINANCE_API_SECRET)
    #[serde(default, skip_serializing)]
    pub api_secret: Option<String>,
    /// Use the futures testnet instead of production
    #[serde(default = "default_testnet")]
    pub testnet: bool,
    /// Per-call timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Optional recvWindow for signed calls, in milliseconds
    #[serde(default)]
    pub recv_window: Option<u64>,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_secret: None,
            testnet: default_testnet(),
            timeout_secs: default_timeout_secs(),
            recv_window: None,
        }
    }
}

fn default_testnet() -> bool {
    true
}

fn default_timeout_secs() -> u64 {
    10
}

impl BotConfig {
    /// Load configuration from an optional YAML file overlaid with `BINANCE_*` variables.
    ///
    /// An explicit `path` must exist; otherwise [`DEFAULT_CONFIG_FILE`] is read if present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(p) => File::from(p).required(true),
            None => File::new(DEFAULT_CONFIG_FILE, FileFormat::Yaml).required(false),
        };

        Config::builder()
            .add_source(file)
            .add_source(EnvSource::with_prefix(ENV_PREFIX))
            .build()
            .context("read configuration sources")?
            .try_deserialize::<Self>()
            .context("parse configuration")?
            .validated()
    }

    /// Parse configuration from YAML text only
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Config::builder()
            .add_source(File::from_str(content, FileFormat::Yaml))
            .build()
            .context("read configuration")?
            .try_deserialize::<Self>()
            .context("parse configuration")?
            .validated()
    }

    fn validated(self) -> Result<Self> {
        if self.timeout_secs == 0 {
            bail!("Invalid configuration: timeout_secs must be at least 1 second");
        }
        Ok(self)
    }

    /// API key pair, or a descriptive error naming the missing variables
    pub fn credentials(&self) -> Result<Credentials> {
        let key = self.api_key.as_deref().map(str::trim).unwrap_or_default();
        let secret = self.api_secret.as_deref().map(str::trim).unwrap_or_default();

        if key.is_empty() || secret.is_empty() {
            bail!(
                "Missing API credentials!\n\n\
                 Please set BINANCE_API_KEY and BINANCE_API_SECRET environment variables.\n\
                 You can create a .env file in the project root with:\n\n\
                 BINANCE_API_KEY=your_api_key_here\n\
                 BINANCE_API_SECRET=your_api_secret_here"
            );
        }

        Ok(Credentials::new(key, secret))
    }

    pub fn environment(&self) -> Environment {
        if self.testnet {
            Environment::Testnet
        } else {
            Environment::Production
        }
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            timeout: Duration::from_secs(self.timeout_secs),
            recv_window: self.recv_window,
            ..ClientConfig::default()
        }
    }
}
