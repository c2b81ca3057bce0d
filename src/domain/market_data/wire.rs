//! Wire types for kline responses (REST).
//!
//! The backend proxy normally sends camelCase objects. When it forwards the
//! exchange payload untouched, each kline is a 12-element array instead.

use crate::shared::serde_util::string_or_number;
use serde::Deserialize;

/// A kline in either accepted shape.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum KlineResponse {
    Row(RawKlineRow),
    Object(KlineObject),
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KlineObject {
    pub open_time: i64,
    #[serde(deserialize_with = "string_or_number::deserialize")]
    pub open: String,
    #[serde(deserialize_with = "string_or_number::deserialize")]
    pub high: String,
    #[serde(deserialize_with = "string_or_number::deserialize")]
    pub low: String,
    #[serde(deserialize_with = "string_or_number::deserialize")]
    pub close: String,
    #[serde(deserialize_with = "string_or_number::deserialize")]
    pub volume: String,
    pub close_time: i64,
    #[serde(default, deserialize_with = "string_or_number::deserialize")]
    pub quote_asset_volume: String,
    #[serde(default)]
    pub count: u64,
    #[serde(default, deserialize_with = "string_or_number::deserialize")]
    pub taker_buy_base_asset_volume: String,
    #[serde(default, deserialize_with = "string_or_number::deserialize")]
    pub taker_buy_quote_asset_volume: String,
}

/// Raw exchange kline row, a JSON array of mixed types.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RawKlineRow(
    pub i64,    // 0: Open time
    pub String, // 1: Open
    pub String, // 2: High
    pub String, // 3: Low
    pub String, // 4: Close
    pub String, // 5: Volume
    pub i64,    // 6: Close time
    pub String, // 7: Quote asset volume
    pub u64,    // 8: Number of trades
    pub String, // 9: Taker buy base asset volume
    pub String, // 10: Taker buy quote asset volume
    pub serde_json::Value, // 11: Ignore
);
