use super::HealthStatus;
use crate::client::DoraClient;
use crate::live::{AsyncResource, OnError};

/// Keeps the last good status on error; pair with
/// [`ApiStatus::from_state`](super::ApiStatus::from_state) for an indicator.
pub type HealthResource = AsyncResource<Option<HealthStatus>, ()>;

pub(crate) fn new_resource(client: DoraClient) -> HealthResource {
    AsyncResource::new((), OnError::KeepData, move |()| {
        let client = client.clone();
        async move { client.health().check().await.map(Some) }
    })
}
