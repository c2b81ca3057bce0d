//! Polled price container.

use super::PriceMap;
use crate::client::DoraClient;
use crate::live::{AsyncResource, FetchState, OnError, Poller};
use crate::shared::Symbol;

use std::time::Duration;
use tokio::sync::watch;

pub const PRICE_POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Keyed by the requested symbols (`None` = all). Keeps the last good map on
/// error.
pub type PriceResource = AsyncResource<PriceMap, Option<Vec<Symbol>>>;

pub(crate) fn new_resource(client: DoraClient, symbols: Option<Vec<Symbol>>) -> PriceResource {
    AsyncResource::new(symbols, OnError::KeepData, move |symbols: Option<Vec<Symbol>>| {
        let client = client.clone();
        async move { client.prices().get_symbols(symbols.as_deref()).await }
    })
}

/// A price container plus the poller that refreshes it.
pub struct PriceWatch {
    resource: PriceResource,
    poller: Poller,
}

impl PriceWatch {
    pub(crate) fn start(client: DoraClient, symbols: Option<Vec<Symbol>>) -> Self {
        let resource = new_resource(client, symbols);
        let poller = Poller::start(resource.clone(), PRICE_POLL_INTERVAL);
        Self { resource, poller }
    }

    pub fn state(&self) -> FetchState<PriceMap> {
        self.resource.state()
    }

    pub fn subscribe(&self) -> watch::Receiver<FetchState<PriceMap>> {
        self.resource.subscribe()
    }

    /// Fetch now, outside the poll schedule.
    pub async fn refetch(&self) {
        self.resource.refetch().await;
    }

    /// Change the watched symbols and fetch immediately.
    pub async fn set_symbols<S: AsRef<str>>(&self, symbols: Option<&[S]>) {
        let symbols = symbols.map(|s| s.iter().map(Symbol::new).collect());
        self.resource.set_key(symbols).await;
    }

    pub fn resource(&self) -> &PriceResource {
        &self.resource
    }

    pub fn is_polling(&self) -> bool {
        self.poller.is_running()
    }

    /// Stop polling. The last fetched state stays readable.
    pub fn stop(&mut self) {
        self.poller.stop();
    }
}
