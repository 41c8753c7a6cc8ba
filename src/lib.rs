//! PrismSwap spot price SDK.
//!
//! # Overview
//!
//! Computes spot prices of the PrismSwap-listed tokens from the on-chain
//! state of their liquidity pool contracts, queried through a Terra LCD
//! endpoint and expressed through the pivot asset (PRISM).
//!
//! Use [`price::PriceFetcher`] with [`client::LcdClient`] to query
//! the pools, [`price::PriceFetcher::compute_prices`] produces the
//! comma-separated price line printed by the `prism_prices` binary.
//!
//! Supported tokens are fixed at build time, see [`types::MARKETS`].
//!
//! # Limitations/follow-ups
//!
//! * Every token is assumed to have 6 decimals; [`price::PriceFetcher::fetch_token_decimals`]
//!   is available but not used for price scaling.
//!
//! * Non-pivot prices are multiplied by the pivot's own reverse simulation rate,
//!   which is kept as is for compatibility with existing consumers.
//!
//! # Testing
//!
//! [`testing`] module provides an in-memory LCD with canned contract responses.
//!

pub mod client;
pub mod error;
pub mod num;
pub mod price;
pub mod testing;
pub mod types;

use url::Url;

/// Public Terra LCD endpoint.
pub const MAINNET_LCD_URL: &str = "https://lcd.terra.dev";

#[derive(Clone, Debug)]
/// Network the pools are queried on.
pub struct Network {
    lcd_url: Url,
}

impl Network {
    pub fn mainnet() -> Self {
        Self {
            lcd_url: Url::parse(MAINNET_LCD_URL).expect("valid mainnet LCD url"),
        }
    }

    pub fn custom(lcd_url: Url) -> Self {
        Self { lcd_url }
    }

    pub fn lcd_url(&self) -> &Url {
        &self.lcd_url
    }
}

impl Default for Network {
    fn default() -> Self {
        Self::mainnet()
    }
}
