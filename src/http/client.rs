//! Low-level HTTP client: `DoraHttp`.
//!
//! One method per API endpoint. Returns raw JSON (decoding into domain types
//! happens in the sub-clients). Every call is a single attempt: no retries,
//! no client-side timeout. Retry policy belongs to the caller.

use crate::config::ClientConfig;
use crate::error::{HttpError, SdkError};
use crate::network::API_KEY_HEADER;
use crate::shared::{KlineInterval, Symbol};

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde_json::Value;

/// Per-request overrides, merged over the defaults.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: HeaderMap,
    pub body: Option<Value>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            headers: HeaderMap::new(),
            body: None,
        }
    }
}

/// Low-level HTTP client for the Doraquants REST API.
#[derive(Clone)]
pub struct DoraHttp {
    base_url: String,
    client: Client,
    /// Never exposed publicly.
    api_key: Option<HeaderValue>,
}

impl std::fmt::Debug for DoraHttp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DoraHttp")
            .field("base_url", &self.base_url)
            .field("has_api_key", &self.api_key.is_some())
            .finish()
    }
}

impl DoraHttp {
    pub fn new(config: &ClientConfig) -> Result<Self, SdkError> {
        let client = Client::builder()
            .pool_max_idle_per_host(10)
            .build()
            .map_err(HttpError::from)?;

        let api_key = match config.api_key() {
            Some(key) => Some(HeaderValue::from_str(key).map_err(|_| {
                SdkError::Config("API key contains characters not allowed in a header".into())
            })?),
            None => None,
        };

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
            api_key,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    // ── Health ───────────────────────────────────────────────────────────

    pub async fn get_health(&self) -> Result<Value, HttpError> {
        self.get("/health", &[]).await
    }

    // ── Portfolio ────────────────────────────────────────────────────────

    pub async fn get_portfolio(&self) -> Result<Value, HttpError> {
        self.get("/api/binance/portfolio", &[]).await
    }

    // ── Market data ──────────────────────────────────────────────────────

    pub async fn get_market_data(
        &self,
        symbol: &Symbol,
        interval: KlineInterval,
        limit: u32,
    ) -> Result<Value, HttpError> {
        let query = [
            ("symbol", symbol.as_str().to_string()),
            ("interval", interval.as_str().to_string()),
            ("limit", limit.to_string()),
        ];
        self.get("/api/binance/market-data", &query).await
    }

    pub async fn get_exchange_info(&self) -> Result<Value, HttpError> {
        self.get("/api/binance/exchange-info", &[]).await
    }

    // ── Trades ───────────────────────────────────────────────────────────

    pub async fn get_trades(&self, symbol: &Symbol, limit: u32) -> Result<Value, HttpError> {
        let query = [
            ("symbol", symbol.as_str().to_string()),
            ("limit", limit.to_string()),
        ];
        self.get("/api/binance/trades", &query).await
    }

    // ── Prices ───────────────────────────────────────────────────────────

    /// `None` asks the backend for every symbol it tracks.
    pub async fn get_prices(&self, symbols: Option<&[Symbol]>) -> Result<Value, HttpError> {
        match symbols {
            Some(symbols) => {
                let joined = symbols
                    .iter()
                    .map(Symbol::as_str)
                    .collect::<Vec<_>>()
                    .join(",");
                self.get("/api/binance/prices", &[("symbols", joined)]).await
            }
            None => self.get("/api/binance/prices", &[]).await,
        }
    }

    // ── Generic request ──────────────────────────────────────────────────

    pub async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Value, HttpError> {
        self.request(path, query, RequestOptions::default()).await
    }

    /// Issue one request and parse the JSON body.
    ///
    /// Connection failures map to [`HttpError::Network`]; non-2xx responses
    /// to [`HttpError::Api`] carrying the raw body text.
    pub async fn request(
        &self,
        path: &str,
        query: &[(&str, String)],
        options: RequestOptions,
    ) -> Result<Value, HttpError> {
        let url = self.url(path, query);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(key) = &self.api_key {
            headers.insert(HeaderName::from_static(API_KEY_HEADER), key.clone());
        }
        for (name, value) in options.headers.iter() {
            headers.insert(name.clone(), value.clone());
        }

        let mut req = self
            .client
            .request(options.method.clone(), &url)
            .headers(headers);
        if let Some(body) = &options.body {
            req = req.body(body.to_string());
        }

        tracing::debug!(method = %options.method, url = %url, "Sending request");

        let resp = req.send().await.map_err(|e| {
            if e.is_connect() {
                tracing::debug!(error = %e, "Connection failed");
                HttpError::Network { url: url.clone() }
            } else {
                HttpError::Reqwest(e)
            }
        })?;

        let status = resp.status();
        let body_text = resp.text().await?;

        if !status.is_success() {
            return Err(HttpError::Api {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
                body: body_text,
            });
        }

        serde_json::from_str(&body_text).map_err(|e| HttpError::InvalidJson(e.to_string()))
    }

    fn url(&self, path: &str, query: &[(&str, String)]) -> String {
        let mut url = format!("{}{}", self.base_url, path);
        if !query.is_empty() {
            let params = query
                .iter()
                .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
                .collect::<Vec<_>>()
                .join("&");
            url = format!("{}?{}", url, params);
        }
        url
    }
}
