use serde::{Deserialize, Serialize};

use super::MicroAmount;
use crate::num::MICRO_UNITS;

/// Smart query accepted by PrismSwap token and pair contracts.
///
/// * [`QueryMsg::TokenInfo`] asks a cw20 token contract for its metadata.
/// * [`QueryMsg::ReverseSimulation`] asks a pair contract how much of the offer
///   asset has to be provided to receive exactly `ask_asset.amount` of the ask asset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    TokenInfo {},
    ReverseSimulation { ask_asset: Asset },
}

impl QueryMsg {
    /// Reverse simulation asking for one whole unit of the given cw20 token.
    pub fn reverse_simulation_one(asset: &str) -> Self {
        QueryMsg::ReverseSimulation {
            ask_asset: Asset::cw20(asset, MICRO_UNITS),
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).expect("QueryMsg: serializable")
    }
}

/// Asset amount in micro-units, the amount is string-encoded on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Asset {
    pub info: AssetInfo,
    pub amount: String,
}

impl Asset {
    pub fn cw20(contract: &str, amount: MicroAmount) -> Self {
        Self {
            info: AssetInfo::Cw20(contract.to_string()),
            amount: amount.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetInfo {
    Cw20(String),
}

/// Envelope of the LCD `/wasm/contracts/{contract}/store` response.
#[derive(Clone, Debug, Deserialize)]
pub struct QueryResponse<T> {
    pub result: T,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ReverseSimulationResponse {
    pub offer_amount: String,
    #[serde(default)]
    pub spread_amount: Option<String>,
    #[serde(default)]
    pub commission_amount: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct TokenInfoResponse {
    pub decimals: u8,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
}
