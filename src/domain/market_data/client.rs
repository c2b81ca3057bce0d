//! Market data sub-client.

use super::wire::KlineResponse;
use super::{Kline, KlinesKey, KlinesResource, DEFAULT_KLINE_LIMIT};
use crate::client::DoraClient;
use crate::error::SdkError;
use crate::shared::decode::decode_list;
use crate::shared::{KlineInterval, Symbol};

pub struct MarketData<'a> {
    pub(crate) client: &'a DoraClient,
}

impl<'a> MarketData<'a> {
    /// Candlesticks for `symbol`, defaulting to `1h` and 100 bars.
    ///
    /// Order is whatever the backend sends; use
    /// [`close_series`](super::close_series) for a time-sorted series.
    pub async fn klines(
        &self,
        symbol: &str,
        interval: Option<KlineInterval>,
        limit: Option<u32>,
    ) -> Result<Vec<Kline>, SdkError> {
        let symbol = Symbol::new(symbol);
        let raw = self
            .client
            .http
            .get_market_data(
                &symbol,
                interval.unwrap_or_default(),
                limit.unwrap_or(DEFAULT_KLINE_LIMIT),
            )
            .await
            .map_err(|e| e.context(format!("Failed to fetch market data for {}", symbol)))?;

        Ok(decode_list::<KlineResponse, Kline>(raw, "market data"))
    }

    /// A live container keyed by `(symbol, interval, limit)`. Switching any of
    /// them with `set_key` refetches; an empty symbol never fetches.
    pub fn watch(
        &self,
        symbol: &str,
        interval: Option<KlineInterval>,
        limit: Option<u32>,
    ) -> KlinesResource {
        super::state::new_resource(self.client.clone(), KlinesKey::new(symbol, interval, limit))
    }
}
