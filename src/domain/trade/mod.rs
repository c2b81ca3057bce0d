//! Trade domain: past executions on the account.

#[cfg(feature = "http")]
pub mod client;
mod convert;
#[cfg(feature = "http")]
pub mod state;
pub mod wire;

use crate::shared::{Symbol, TradeSide};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[cfg(feature = "http")]
pub use state::{TradesKey, TradesResource};

/// Number of trades requested when no limit is given.
pub const DEFAULT_TRADES_LIMIT: u32 = 50;

/// A trade execution record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Trade {
    pub symbol: Symbol,
    pub id: u64,
    pub order_id: u64,
    pub side: TradeSide,
    pub qty: Decimal,
    pub price: Decimal,
    pub realized_pnl: Decimal,
    pub time: DateTime<Utc>,
    pub commission: Decimal,
    pub commission_asset: String,
}

impl Trade {
    /// Quote amount of the fill (`qty * price`).
    pub fn notional(&self) -> Decimal {
        self.qty * self.price
    }
}
