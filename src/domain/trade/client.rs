//! Trades sub-client: recent executions per symbol.

use super::wire::TradeResponse;
use super::{Trade, TradesKey, TradesResource, DEFAULT_TRADES_LIMIT};
use crate::client::DoraClient;
use crate::error::SdkError;
use crate::shared::decode::decode_list;
use crate::shared::Symbol;

pub struct Trades<'a> {
    pub(crate) client: &'a DoraClient,
}

impl<'a> Trades<'a> {
    /// Recent trades for `symbol` (upper-cased before sending), in the
    /// backend's order. A non-array payload yields an empty list.
    pub async fn get(&self, symbol: &str, limit: Option<u32>) -> Result<Vec<Trade>, SdkError> {
        let symbol = Symbol::new(symbol);
        let raw = self
            .client
            .http
            .get_trades(&symbol, limit.unwrap_or(DEFAULT_TRADES_LIMIT))
            .await
            .map_err(|e| e.context(format!("Failed to fetch trades for {}", symbol)))?;

        Ok(decode_list::<TradeResponse, Trade>(raw, "trades"))
    }

    /// A live container keyed by `(symbol, limit)`. An empty symbol never
    /// fetches. Call `activate()` to load it.
    pub fn watch(&self, symbol: &str, limit: Option<u32>) -> TradesResource {
        super::state::new_resource(self.client.clone(), TradesKey::new(symbol, limit))
    }
}
