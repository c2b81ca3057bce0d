use super::{decode_health, HealthResource, HealthStatus};
use crate::client::DoraClient;
use crate::error::SdkError;

pub struct Health<'a> {
    pub(crate) client: &'a DoraClient,
}

impl<'a> Health<'a> {
    /// `GET /health`. Only transport failures are errors; any JSON body
    /// from a reachable backend decodes to a [`HealthStatus`].
    pub async fn check(&self) -> Result<HealthStatus, SdkError> {
        let raw = self
            .client
            .http
            .get_health()
            .await
            .map_err(|e| e.context("Health check failed"))?;
        Ok(decode_health(raw))
    }

    pub fn watch(&self) -> HealthResource {
        super::state::new_resource(self.client.clone())
    }
}
