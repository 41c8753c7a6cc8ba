//! In-memory testing environment.
//!
//! [`MockLcd`] stands in for a Terra LCD endpoint: it serves canned responses
//! for exact `(contract, query message)` pairs, can inject transport failures,
//! and records every query it receives so tests can assert on the issued calls.
//!
//! Replies for the registry contracts are set up with [`MockLcd::with_offer_amount`]
//! and [`MockLcd::with_decimals`], arbitrary ones with [`MockLcd::with_reply`].
//!

use std::sync::Mutex;

use dashmap::DashMap;
use serde_json::json;

use crate::{
    client::ContractQuerier,
    error::Error,
    types::{QueryMsg, Symbol},
};

/// Canned outcome of a contract query.
#[derive(Clone, Debug)]
pub enum MockReply {
    /// Response body returned as is.
    Body(serde_json::Value),
    /// Non-success HTTP status.
    Status(u16),
    /// Connection level failure.
    Transport(String),
    Timeout,
}

impl MockReply {
    fn into_result(self) -> Result<serde_json::Value, Error> {
        match self {
            MockReply::Body(body) => Ok(body),
            MockReply::Status(status) => Err(Error::Status(status)),
            MockReply::Transport(msg) => Err(Error::Transport(msg)),
            MockReply::Timeout => Err(Error::Timeout),
        }
    }
}

/// Contract query received by [`MockLcd`].
#[derive(Clone, Debug, PartialEq)]
pub struct MockCall {
    pub contract: String,
    pub msg: serde_json::Value,
}

#[derive(Debug, Default)]
pub struct MockLcd {
    replies: DashMap<(String, String), MockReply>,
    calls: Mutex<Vec<MockCall>>,
}

impl MockLcd {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serves `reply` for the exact query of the contract.
    pub fn with_reply(self, contract: &str, msg: &QueryMsg, reply: MockReply) -> Self {
        self.replies.insert(key(contract, msg), reply);
        self
    }

    /// Reverse simulation reply of the symbol's pair, for one unit of its token.
    pub fn with_simulation_reply(self, symbol: Symbol, reply: MockReply) -> Self {
        let market = symbol.market();
        self.with_reply(
            market.pair,
            &QueryMsg::reverse_simulation_one(market.asset),
            reply,
        )
    }

    /// Successful reverse simulation of the symbol's pair returning `offer_amount`.
    pub fn with_offer_amount(self, symbol: Symbol, offer_amount: &str) -> Self {
        self.with_simulation_reply(
            symbol,
            MockReply::Body(json!({
                "height": "7544910",
                "result": {
                    "offer_amount": offer_amount,
                    "spread_amount": "0",
                    "commission_amount": "0"
                }
            })),
        )
    }

    /// Successful token info of the symbol's cw20 contract.
    pub fn with_decimals(self, symbol: Symbol, decimals: u8) -> Self {
        let market = symbol.market();
        self.with_reply(
            market.asset,
            &QueryMsg::TokenInfo {},
            MockReply::Body(json!({
                "height": "7544910",
                "result": {
                    "name": symbol.as_str(),
                    "symbol": symbol.as_str(),
                    "decimals": decimals,
                    "total_supply": "1000000000000"
                }
            })),
        )
    }

    /// All queries received so far, in order.
    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.lock().expect("MockLcd: calls lock").clone()
    }

    /// Number of queries received by the contract.
    pub fn call_count(&self, contract: &str) -> usize {
        self.calls
            .lock()
            .expect("MockLcd: calls lock")
            .iter()
            .filter(|c| c.contract == contract)
            .count()
    }
}

impl ContractQuerier for MockLcd {
    async fn query_contract(
        &self,
        contract: &str,
        msg: &QueryMsg,
    ) -> Result<serde_json::Value, Error> {
        self.calls
            .lock()
            .expect("MockLcd: calls lock")
            .push(MockCall {
                contract: contract.to_string(),
                msg: msg.to_json(),
            });
        match self.replies.get(&key(contract, msg)) {
            Some(reply) => reply.clone().into_result(),
            None => Err(Error::Transport(format!(
                "no mock reply for {contract}: {}",
                msg.to_json()
            ))),
        }
    }
}

fn key(contract: &str, msg: &QueryMsg) -> (String, String) {
    (contract.to_string(), msg.to_json().to_string())
}
