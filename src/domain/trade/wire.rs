//! Wire types for trade responses (REST).

use crate::shared::serde_util::string_or_number;
use crate::shared::TradeSide;
use serde::{Deserialize, Serialize};

/// REST response for a single trade (Binance `myTrades` shape).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TradeResponse {
    pub symbol: String,
    pub id: u64,
    pub order_id: u64,
    pub side: TradeSide,
    #[serde(deserialize_with = "string_or_number::deserialize")]
    pub qty: String,
    #[serde(deserialize_with = "string_or_number::deserialize")]
    pub price: String,
    #[serde(default, deserialize_with = "string_or_number::deserialize")]
    pub realized_pnl: String,
    /// Epoch milliseconds.
    pub time: i64,
    #[serde(default, deserialize_with = "string_or_number::deserialize")]
    pub commission: String,
    #[serde(default)]
    pub commission_asset: String,
}
