//! Prices sub-client.

use super::{decode_prices, PriceMap, PriceWatch};
use crate::client::DoraClient;
use crate::error::SdkError;
use crate::shared::Symbol;

pub struct Prices<'a> {
    pub(crate) client: &'a DoraClient,
}

impl<'a> Prices<'a> {
    /// Latest prices. `None` asks for every symbol the backend tracks.
    ///
    /// Symbols are trimmed and upper-cased before they are sent, so the
    /// returned keys are the backend's upper-case names. Entries whose price
    /// is not a number or numeric string are left out of the map.
    pub async fn get<S: AsRef<str>>(&self, symbols: Option<&[S]>) -> Result<PriceMap, SdkError> {
        let symbols: Option<Vec<Symbol>> = symbols.map(to_symbols);
        self.get_symbols(symbols.as_deref()).await
    }

    pub(crate) async fn get_symbols(&self, symbols: Option<&[Symbol]>) -> Result<PriceMap, SdkError> {
        let raw = self
            .client
            .http
            .get_prices(symbols)
            .await
            .map_err(|e| e.context("Failed to fetch prices"))?;
        Ok(decode_prices(raw))
    }

    /// Start polling prices every [`PRICE_POLL_INTERVAL`](super::PRICE_POLL_INTERVAL).
    ///
    /// The first fetch is issued immediately. Polling stops when the returned
    /// [`PriceWatch`] is stopped or dropped. Must be called inside a tokio
    /// runtime. Symbols are normalized as in [`get`](Self::get).
    pub fn watch<S: AsRef<str>>(&self, symbols: Option<&[S]>) -> PriceWatch {
        PriceWatch::start(self.client.clone(), symbols.map(to_symbols))
    }
}

fn to_symbols<S: AsRef<str>>(symbols: &[S]) -> Vec<Symbol> {
    symbols.iter().map(Symbol::new).collect()
}
