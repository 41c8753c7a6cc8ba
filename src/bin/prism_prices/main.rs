//! PrismSwap price printer.
//!
//! Prints spot prices of the given tokens, comma-separated, in the order given.
//! Any failure prints the error to stderr and exits with status 1.

mod config;
mod error;

use std::process::exit;

use clap::Parser;
use prismswap::{client::LcdClient, price::PriceFetcher};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use config::{CliConfig, EnvConfig};
use error::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Load .env file
    let dotenv = dotenvy::dotenv();

    // Set up logging, stdout is reserved for the result line
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = dotenv {
        debug!(%e, "no .env file loaded");
    }

    // Parse CLI arguments
    let cli_config = match CliConfig::try_parse() {
        Ok(config) => config,
        Err(e) => {
            let status = if e.use_stderr() { 1 } else { 0 };
            _ = e.print();
            exit(status);
        }
    };

    match run(cli_config).await {
        Ok(line) => println!("{line}"),
        Err(e) => {
            eprintln!("{e}");
            exit(1);
        }
    }
}

async fn run(cli_config: CliConfig) -> Result<String> {
    let env_config = EnvConfig::from_env()?;
    let settings = cli_config.to_settings(&env_config)?;
    debug!(
        lcd_url = %settings.network.lcd_url(),
        timeout = ?settings.timeout,
        symbols = ?cli_config.symbols,
        "Querying PrismSwap"
    );

    let client = LcdClient::new(&settings.network, settings.timeout)?;
    let fetcher = PriceFetcher::new(client);
    let line = if cli_config.decimals {
        fetcher.compute_decimals(&cli_config.symbols).await?
    } else {
        fetcher.compute_prices(&cli_config.symbols).await?
    };
    Ok(line)
}
