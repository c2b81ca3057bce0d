//! Kline container. Cleared on error so a chart never shows candles from a
//! previous symbol or interval.

use super::{Kline, DEFAULT_KLINE_LIMIT};
use crate::client::DoraClient;
use crate::live::{AsyncResource, OnError};
use crate::shared::{KlineInterval, Symbol};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KlinesKey {
    pub symbol: Symbol,
    pub interval: KlineInterval,
    pub limit: u32,
}

impl KlinesKey {
    pub fn new(symbol: &str, interval: Option<KlineInterval>, limit: Option<u32>) -> Self {
        Self {
            symbol: Symbol::new(symbol),
            interval: interval.unwrap_or_default(),
            limit: limit.unwrap_or(DEFAULT_KLINE_LIMIT),
        }
    }

    pub fn with_interval(&self, interval: KlineInterval) -> Self {
        Self {
            interval,
            ..self.clone()
        }
    }
}

pub type KlinesResource = AsyncResource<Vec<Kline>, KlinesKey>;

pub(crate) fn new_resource(client: DoraClient, key: KlinesKey) -> KlinesResource {
    AsyncResource::gated(
        key,
        OnError::ClearData,
        |k: &KlinesKey| !k.symbol.is_empty(),
        move |k: KlinesKey| {
            let client = client.clone();
            async move {
                client
                    .market_data()
                    .klines(k.symbol.as_str(), Some(k.interval), Some(k.limit))
                    .await
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_defaults() {
        let k = KlinesKey::new("ethusdt", None, None);
        assert_eq!(k.symbol.as_str(), "ETHUSDT");
        assert_eq!(k.interval, KlineInterval::Hour1);
        assert_eq!(k.limit, 100);

        let daily = k.with_interval(KlineInterval::Day1);
        assert_ne!(daily, k);
        assert_eq!(daily.symbol, k.symbol);
    }
}
