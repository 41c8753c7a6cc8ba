//! Configuration for the price printer.
//!
//! Configuration comes from two sources:
//! - Environment variables (via .env file or shell), prefixed with `PRISM_`
//! - CLI arguments, taking precedence over the environment

use std::time::Duration;

use clap::Parser;
use prismswap::{MAINNET_LCD_URL, Network, client::DEFAULT_TIMEOUT};
use url::Url;

/// Environment configuration, every value is optional.
#[derive(Debug, Default, serde::Deserialize)]
pub struct EnvConfig {
    /// LCD endpoint (`PRISM_LCD_URL`)
    pub lcd_url: Option<String>,

    /// Request timeout in seconds (`PRISM_TIMEOUT_SECONDS`)
    pub timeout_seconds: Option<u64>,
}

impl EnvConfig {
    /// Load configuration from `PRISM_*` environment variables.
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::prefixed("PRISM_").from_env()
    }
}

/// CLI arguments.
#[derive(Debug, Parser)]
#[command(name = "prism_prices", version)]
#[command(about = "Print PrismSwap spot prices of the given tokens, comma-separated")]
pub struct CliConfig {
    /// Token symbols to price: PRISM, CLUNA, PLUNA, YLUNA
    #[arg(value_name = "SYMBOL", required = true)]
    pub symbols: Vec<String>,

    /// LCD endpoint to query [default: https://lcd.terra.dev]
    #[arg(long)]
    pub lcd_url: Option<String>,

    /// Request timeout in seconds [default: 30]
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Print token decimals instead of prices
    #[arg(long)]
    pub decimals: bool,
}

/// Resolved connection settings.
#[derive(Clone, Debug)]
pub struct Settings {
    pub network: Network,
    pub timeout: Duration,
}

impl CliConfig {
    /// Merge CLI arguments over the environment configuration.
    pub fn to_settings(&self, env: &EnvConfig) -> Result<Settings, ConfigError> {
        let lcd_url = self
            .lcd_url
            .as_deref()
            .or(env.lcd_url.as_deref())
            .unwrap_or(MAINNET_LCD_URL);
        let lcd_url =
            Url::parse(lcd_url).map_err(|_| ConfigError::InvalidLcdUrl(lcd_url.to_string()))?;

        let timeout = match self.timeout.or(env.timeout_seconds) {
            Some(0) => return Err(ConfigError::ZeroTimeout),
            Some(secs) => Duration::from_secs(secs),
            None => DEFAULT_TIMEOUT,
        };

        Ok(Settings {
            network: Network::custom(lcd_url),
            timeout,
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid LCD url: {0}")]
    InvalidLcdUrl(String),

    #[error("timeout cannot be zero")]
    ZeroTimeout,
}
