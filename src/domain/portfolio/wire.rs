//! Wire types for the portfolio endpoint (REST).
//!
//! Backend shape:
//! `{status, testnet, totalUSDT, positions[], positionCount, timestamp}`.
//! Only `totalUSDT` and `positions` are consumed; the envelope is read
//! field by field in `convert.rs` so that a malformed field never rejects
//! the whole payload.

use serde::Deserialize;
use serde_json::Value;

/// A single position as sent by the backend. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PositionResponse {
    pub asset: Option<String>,
    pub free: Option<Value>,
    pub locked: Option<Value>,
    pub total: Option<Value>,
    #[serde(rename = "priceUSDT")]
    pub price_usdt: Option<Value>,
    #[serde(rename = "valueUSDT")]
    pub value_usdt: Option<Value>,
    pub pct: Option<Value>,
}
