//! # Doraquants SDK
//!
//! Rust client for the Doraquants trading dashboard backend: portfolio,
//! trades, klines, prices, health and exchange info over REST, plus live
//! `{data, loading, error}` containers for views.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core**: shared newtypes, domain models, lenient decoding, formatting
//! 2. **Config**: base URL and API key from the environment
//! 3. **HTTP API**: `DoraHttp`, a single-attempt JSON transport
//! 4. **Live state**: `AsyncResource` containers and the interval `Poller`
//! 5. **High-Level Client**: `DoraClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use doraquants_sdk::prelude::*;
//!
//! let client = DoraClient::builder()
//!     .base_url("http://localhost:4000")
//!     .build()?;
//!
//! let portfolio = client.portfolio().get().await?;
//! let klines = client.market_data().klines("btcusdt", Some(KlineInterval::Hour4), None).await?;
//!
//! let trades = client.trades().watch("BTCUSDT", None);
//! trades.activate().await;
//! println!("{:?}", trades.state());
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes, decoding and display helpers used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Default URL, header and environment variable names.
pub mod network;

// ── Layer 2: Config ──────────────────────────────────────────────────────────

/// Client configuration resolved from the environment or the builder.
pub mod config;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// JSON transport over `reqwest`.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: Live state ──────────────────────────────────────────────────────

/// Fetch-state containers and interval polling.
pub mod live;

// ── Layer 5: High-Level Client ───────────────────────────────────────────────

/// `DoraClient`, the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{KlineInterval, Symbol, TradeSide};

    // Formatting
    pub use crate::shared::fmt::{format_pct, format_timestamp, format_usd};

    // Domain types
    pub use crate::domain::health::{ApiStatus, HealthStatus};
    pub use crate::domain::market_data::{close_series, ChartPoint, Kline};
    pub use crate::domain::portfolio::{Portfolio, Position};
    pub use crate::domain::price::PriceMap;
    pub use crate::domain::trade::Trade;

    // Errors
    pub use crate::error::{HttpError, SdkError};

    // Config
    pub use crate::config::{ApiConfigSummary, ApiKeyStatus, ClientConfig};
    pub use crate::network::DEFAULT_API_URL;

    // Live state
    pub use crate::live::{AsyncResource, FetchState, OnError, Poller};

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        DoraClient, DoraClientBuilder, ExchangeInfoClient, HealthClient, MarketDataClient,
        PortfolioClient, PricesClient, TradesClient,
    };

    // Per-resource containers
    #[cfg(feature = "http")]
    pub use crate::domain::{
        health::HealthResource,
        market_data::{KlinesKey, KlinesResource},
        portfolio::PortfolioResource,
        price::{PriceResource, PriceWatch},
        trade::{TradesKey, TradesResource},
    };
}
