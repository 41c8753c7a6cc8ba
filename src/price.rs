//! Pivot-denominated spot prices.
//!
//! Every listed token is priced by a reverse simulation against its PrismSwap pair:
//! the pair is asked how much has to be offered to receive exactly one unit of the
//! token, and the offered amount is taken as the token price. Prices of non-pivot
//! tokens are then multiplied by the pivot's own price.
//!
//! [`PriceFetcher::compute_prices`] runs a whole batch. The batch is all-or-nothing,
//! the first failed query fails it, and the pivot price is queried once per batch.

use futures::future;
use itertools::Itertools;
use tokio::sync::OnceCell;
use tracing::{debug, info};

use crate::{
    client::ContractQuerier,
    error::Error,
    num::{self, Price},
    types::{
        Decimals, MicroAmount, QueryMsg, QueryResponse, ReverseSimulationResponse, Symbol,
        TokenInfoResponse,
    },
};

/// Unrounded price of a token, in pivot terms.
#[derive(Clone, Copy, PartialEq, derive_more::Debug)]
pub struct PriceQuote {
    pub symbol: Symbol,
    #[debug("{price}")]
    pub price: Price,
}

impl PriceQuote {
    /// Price rounded and rendered with [`num::display_price`].
    pub fn display_price(&self) -> String {
        num::display_price(self.price)
    }
}

/// Computes token prices from the pair contracts state.
#[derive(Debug)]
pub struct PriceFetcher<Q> {
    querier: Q,
}

impl<Q: ContractQuerier> PriceFetcher<Q> {
    pub fn new(querier: Q) -> Self {
        Self { querier }
    }

    pub fn querier(&self) -> &Q {
        &self.querier
    }

    /// Amount of the token offered to the pair to receive one unit back,
    /// converted from micro-units.
    pub async fn fetch_asset_price(&self, symbol: Symbol) -> Result<Price, Error> {
        let market = symbol.market();
        let body = self
            .querier
            .query_contract(market.pair, &QueryMsg::reverse_simulation_one(market.asset))
            .await?;
        let resp: QueryResponse<ReverseSimulationResponse> = serde_json::from_value(body)?;
        let ReverseSimulationResponse {
            offer_amount,
            spread_amount,
            commission_amount,
        } = resp.result;

        let micro: MicroAmount = offer_amount
            .parse()
            .map_err(|_| Error::InvalidAmount(symbol, offer_amount.clone()))?;
        let price = num::Converter::micro()
            .from_unsigned::<4>(micro)
            .ok_or(Error::InvalidAmount(symbol, offer_amount))?;

        debug!(
            %symbol,
            pair = market.pair,
            %price,
            spread = ?spread_amount,
            commission = ?commission_amount,
            "fetched asset price"
        );
        Ok(price)
    }

    /// Price of the token expressed through the pivot.
    ///
    /// The pivot is priced by its own reverse simulation, any other token by its
    /// simulation multiplied by the pivot's.
    pub async fn fetch_pivot_relative_price(&self, symbol: Symbol) -> Result<Price, Error> {
        self.relative_price(symbol, &OnceCell::new()).await
    }

    /// Unrounded quotes of the symbols, in the same order.
    pub async fn quotes(&self, symbols: &[Symbol]) -> Result<Vec<PriceQuote>, Error> {
        let pivot_price = OnceCell::new();
        let pivot_price = &pivot_price;
        future::try_join_all(symbols.iter().map(|&symbol| async move {
            self.relative_price(symbol, pivot_price)
                .await
                .map(|price| PriceQuote { symbol, price })
        }))
        .await
    }

    /// Comma-separated rounded prices of the symbols, in input order.
    ///
    /// Unknown symbols fail the batch before any query is issued.
    pub async fn compute_prices<S: AsRef<str>>(&self, symbols: &[S]) -> Result<String, Error> {
        let symbols = parse_symbols(symbols)?;
        let quotes = self.quotes(&symbols).await?;
        info!(?quotes, "computed prices");
        Ok(quotes.iter().map(PriceQuote::display_price).join(","))
    }

    /// Decimals reported by the token contract.
    pub async fn fetch_token_decimals(&self, symbol: Symbol) -> Result<Decimals, Error> {
        let asset = symbol.market().asset;
        let body = self
            .querier
            .query_contract(asset, &QueryMsg::TokenInfo {})
            .await?;
        let resp: QueryResponse<TokenInfoResponse> = serde_json::from_value(body)?;
        let TokenInfoResponse {
            decimals,
            name,
            symbol: token_symbol,
        } = resp.result;
        debug!(%symbol, asset, decimals, ?name, ?token_symbol, "fetched token info");
        Ok(decimals)
    }

    /// Comma-separated token decimals of the symbols, in input order.
    pub async fn compute_decimals<S: AsRef<str>>(&self, symbols: &[S]) -> Result<String, Error> {
        let symbols = parse_symbols(symbols)?;
        let decimals = future::try_join_all(
            symbols
                .iter()
                .map(|&symbol| self.fetch_token_decimals(symbol)),
        )
        .await?;
        Ok(decimals.iter().join(","))
    }

    async fn relative_price(
        &self,
        symbol: Symbol,
        pivot_price: &OnceCell<Price>,
    ) -> Result<Price, Error> {
        let pivot = || self.fetch_asset_price(Symbol::PIVOT);
        if symbol.is_pivot() {
            return pivot_price.get_or_try_init(pivot).await.copied();
        }
        let (price, pivot_price) = futures::try_join!(
            self.fetch_asset_price(symbol),
            pivot_price.get_or_try_init(pivot)
        )?;
        Ok(price * *pivot_price)
    }
}

/// Resolves the symbols against [`crate::types::MARKETS`].
pub fn parse_symbols<S: AsRef<str>>(symbols: &[S]) -> Result<Vec<Symbol>, Error> {
    symbols.iter().map(|s| s.as_ref().parse()).collect()
}
