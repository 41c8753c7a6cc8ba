use std::time::Duration;

use tracing::debug;
use url::Url;

use crate::{Network, error::Error, types::QueryMsg};

/// Default timeout of a single LCD request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Read-only access to CosmWasm contract state.
///
/// Implemented by [`LcdClient`] over HTTP and by [`crate::testing::MockLcd`] in memory.
pub trait ContractQuerier {
    /// Runs the smart query against the contract and returns the whole response body,
    /// the queried value is expected under its `result` field.
    fn query_contract(
        &self,
        contract: &str,
        msg: &QueryMsg,
    ) -> impl Future<Output = Result<serde_json::Value, Error>>;
}

/// Terra LCD client issuing `GET /wasm/contracts/{contract}/store` queries.
#[derive(Clone, Debug)]
pub struct LcdClient {
    http: reqwest::Client,
    base: Url,
}

impl LcdClient {
    pub fn new(network: &Network, timeout: Duration) -> Result<Self, Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base: network.lcd_url().clone(),
        })
    }

    /// URL of the contract store query, with the message JSON-encoded
    /// into the `query_msg` parameter.
    pub fn store_url(&self, contract: &str, msg: &QueryMsg) -> Result<Url, Error> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| Error::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .extend(["wasm", "contracts", contract, "store"]);
        url.query_pairs_mut()
            .clear()
            .append_pair("query_msg", &serde_json::to_string(msg)?);
        Ok(url)
    }
}

impl ContractQuerier for LcdClient {
    async fn query_contract(
        &self,
        contract: &str,
        msg: &QueryMsg,
    ) -> Result<serde_json::Value, Error> {
        let url = self.store_url(contract, msg)?;
        debug!(%contract, %url, "querying contract store");
        let resp = self
            .http
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?
            .error_for_status()?;
        Ok(resp.json::<serde_json::Value>().await?)
    }
}
