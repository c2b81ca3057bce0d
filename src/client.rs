//! High-level client: `DoraClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods.

use crate::config::{ApiConfigSummary, ClientConfig};
use crate::domain::exchange_info::client::ExchangeInfo;
use crate::domain::health::client::Health;
use crate::domain::market_data::client::MarketData;
use crate::domain::portfolio::client::Portfolios;
use crate::domain::price::client::Prices;
use crate::domain::trade::client::Trades;
use crate::error::SdkError;
use crate::http::DoraHttp;

// Re-export sub-client types for convenience.
pub use crate::domain::exchange_info::client::ExchangeInfo as ExchangeInfoClient;
pub use crate::domain::health::client::Health as HealthClient;
pub use crate::domain::market_data::client::MarketData as MarketDataClient;
pub use crate::domain::portfolio::client::Portfolios as PortfolioClient;
pub use crate::domain::price::client::Prices as PricesClient;
pub use crate::domain::trade::client::Trades as TradesClient;

/// The primary entry point for the SDK.
///
/// Provides nested sub-client accessors for each resource:
/// `client.portfolio()`, `client.trades()`, etc. Cloning is cheap and shares
/// the underlying connection pool.
#[derive(Debug, Clone)]
pub struct DoraClient {
    pub(crate) http: DoraHttp,
    config: ClientConfig,
}

impl DoraClient {
    pub fn builder() -> DoraClientBuilder {
        DoraClientBuilder::default()
    }

    /// Build from `DORAQUANTS_API_URL` / `DORAQUANTS_API_KEY`.
    pub fn from_env() -> Result<Self, SdkError> {
        Self::from_config(ClientConfig::from_env()?)
    }

    pub fn from_config(config: ClientConfig) -> Result<Self, SdkError> {
        Ok(Self {
            http: DoraHttp::new(&config)?,
            config,
        })
    }

    /// Raw transport, for endpoints without a typed accessor.
    pub fn http(&self) -> &DoraHttp {
        &self.http
    }

    /// Configuration summary for diagnostics (never includes the key).
    pub fn api_config(&self) -> ApiConfigSummary {
        self.config.summary()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn portfolio(&self) -> Portfolios<'_> {
        Portfolios { client: self }
    }

    pub fn trades(&self) -> Trades<'_> {
        Trades { client: self }
    }

    pub fn market_data(&self) -> MarketData<'_> {
        MarketData { client: self }
    }

    pub fn prices(&self) -> Prices<'_> {
        Prices { client: self }
    }

    pub fn health(&self) -> Health<'_> {
        Health { client: self }
    }

    pub fn exchange_info(&self) -> ExchangeInfo<'_> {
        ExchangeInfo { client: self }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

#[derive(Default)]
pub struct DoraClientBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
}

impl DoraClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = Some(url.to_string());
        self
    }

    /// Empty or placeholder keys are ignored.
    pub fn api_key(mut self, key: &str) -> Self {
        self.api_key = Some(key.to_string());
        self
    }

    pub fn build(self) -> Result<DoraClient, SdkError> {
        let config = match self.base_url {
            Some(url) => ClientConfig::new(&url)?,
            None => ClientConfig::default(),
        };
        DoraClient::from_config(config.with_api_key(self.api_key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiKeyStatus;

    #[test]
    fn test_builder_defaults() {
        let client = DoraClient::builder().build().unwrap();
        assert_eq!(client.http().base_url(), "http://localhost:4000");
        let summary = client.api_config();
        assert!(!summary.has_api_key);
        assert_eq!(summary.api_key, ApiKeyStatus::Unset);
    }

    #[test]
    fn test_builder_with_key() {
        let client = DoraClient::builder()
            .base_url("http://127.0.0.1:9000/")
            .api_key("abc")
            .build()
            .unwrap();
        assert_eq!(client.http().base_url(), "http://127.0.0.1:9000");
        assert!(client.api_config().has_api_key);
    }

    #[test]
    fn test_builder_rejects_bad_url() {
        assert!(DoraClient::builder().base_url("ftp://x").build().is_err());
    }
}
