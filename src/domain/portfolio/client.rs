//! Portfolio sub-client.

use super::{decode_portfolio, Portfolio, PortfolioResource};
use crate::client::DoraClient;
use crate::error::SdkError;

pub struct Portfolios<'a> {
    pub(crate) client: &'a DoraClient,
}

impl<'a> Portfolios<'a> {
    /// Fetch the portfolio. Only transport failures are errors; a malformed
    /// payload decodes to zero total and/or no positions.
    pub async fn get(&self) -> Result<Portfolio, SdkError> {
        let raw = self
            .client
            .http
            .get_portfolio()
            .await
            .map_err(|e| e.context("Failed to fetch portfolio"))?;
        Ok(decode_portfolio(raw))
    }

    /// A live container for the portfolio. Call `activate()` to load it.
    pub fn watch(&self) -> PortfolioResource {
        super::state::new_resource(self.client.clone())
    }
}
