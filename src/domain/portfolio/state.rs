//! Portfolio container: no dependency key, keeps the last good value on error.

use super::Portfolio;
use crate::client::DoraClient;
use crate::live::{AsyncResource, OnError};

pub type PortfolioResource = AsyncResource<Option<Portfolio>, ()>;

pub(crate) fn new_resource(client: DoraClient) -> PortfolioResource {
    AsyncResource::new((), OnError::KeepData, move |()| {
        let client = client.clone();
        async move { client.portfolio().get().await.map(Some) }
    })
}
