//! Trades container: keyed by `(symbol, limit)`, cleared on error so rows from
//! a previous symbol are never shown under a new one.

use super::{Trade, DEFAULT_TRADES_LIMIT};
use crate::client::DoraClient;
use crate::live::{AsyncResource, OnError};
use crate::shared::Symbol;

/// Dependency key of a trades container.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TradesKey {
    pub symbol: Symbol,
    pub limit: u32,
}

impl TradesKey {
    pub fn new(symbol: &str, limit: Option<u32>) -> Self {
        Self {
            symbol: Symbol::new(symbol),
            limit: limit.unwrap_or(DEFAULT_TRADES_LIMIT),
        }
    }
}

pub type TradesResource = AsyncResource<Vec<Trade>, TradesKey>;

pub(crate) fn new_resource(client: DoraClient, key: TradesKey) -> TradesResource {
    AsyncResource::gated(
        key,
        OnError::ClearData,
        |k: &TradesKey| !k.symbol.is_empty(),
        move |k: TradesKey| {
            let client = client.clone();
            async move { client.trades().get(k.symbol.as_str(), Some(k.limit)).await }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_defaults_and_normalizes() {
        let k = TradesKey::new("btcusdt", None);
        assert_eq!(k.symbol.as_str(), "BTCUSDT");
        assert_eq!(k.limit, 50);
        assert_eq!(k, TradesKey::new("BTCUSDT", Some(50)));
    }

    #[tokio::test]
    async fn test_empty_symbol_never_fetches() {
        // Nothing listens on this port; a fetch would record a network error.
        let client = DoraClient::builder()
            .base_url("http://127.0.0.1:9")
            .build()
            .unwrap();
        let r = new_resource(client, TradesKey::new("", Some(20)));
        r.activate().await;

        let s = r.state();
        assert!(s.loading);
        assert!(s.error.is_none());
        assert!(s.data.is_empty());
    }
}
