//! Market data domain: candlesticks (klines) and chart series.

pub mod chart;
#[cfg(feature = "http")]
pub mod client;
mod convert;
#[cfg(feature = "http")]
pub mod state;
pub mod wire;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use chart::{close_series, ChartPoint};
#[cfg(feature = "http")]
pub use state::{KlinesKey, KlinesResource};

/// Number of klines requested when no limit is given.
pub const DEFAULT_KLINE_LIMIT: u32 = 100;

/// One OHLCV candlestick bar.
///
/// Times are epoch milliseconds. A fetched list is in backend order; sort
/// by `open_time` (see [`close_series`]) before charting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kline {
    pub open_time: i64,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub volume: Decimal,
    pub close_time: i64,
    pub quote_asset_volume: Decimal,
    pub count: u64,
    pub taker_buy_base_asset_volume: Decimal,
    pub taker_buy_quote_asset_volume: Decimal,
}

impl Kline {
    pub fn is_bullish(&self) -> bool {
        self.close >= self.open
    }

    /// High minus low.
    pub fn range(&self) -> Decimal {
        self.high - self.low
    }
}
