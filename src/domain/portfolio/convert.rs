//! Conversion: raw portfolio JSON → `Portfolio`, with documented defaults.

use super::wire::PositionResponse;
use super::{Portfolio, Position};
use crate::shared::decode::{decimal_or_zero, decode_list, json_kind};
use serde_json::Value;

impl From<PositionResponse> for Position {
    fn from(p: PositionResponse) -> Self {
        Self {
            asset: p.asset.unwrap_or_default(),
            free: decimal_or_zero(p.free.as_ref()),
            locked: decimal_or_zero(p.locked.as_ref()),
            total: decimal_or_zero(p.total.as_ref()),
            price_usdt: decimal_or_zero(p.price_usdt.as_ref()),
            value_usdt: decimal_or_zero(p.value_usdt.as_ref()),
            pct: decimal_or_zero(p.pct.as_ref()),
        }
    }
}

/// Decode the portfolio envelope.
///
/// `totalUSDT` falls back to zero and `positions` to an empty list when
/// missing or malformed. Never fails.
pub fn decode_portfolio(value: Value) -> Portfolio {
    let mut object = match value {
        Value::Object(map) => map,
        other => {
            tracing::warn!(
                kind = json_kind(&other),
                "Portfolio payload is not an object, using empty portfolio"
            );
            return Portfolio::default();
        }
    };

    let total_usdt = decimal_or_zero(object.get("totalUSDT"));

    let positions = match object.remove("positions") {
        Some(list @ Value::Array(_)) => decode_list::<PositionResponse, Position>(list, "positions"),
        Some(Value::Null) | None => Vec::new(),
        Some(other) => {
            tracing::warn!(
                kind = json_kind(&other),
                "Portfolio positions is not an array, returning empty list"
            );
            Vec::new()
        }
    };

    Portfolio {
        total_usdt,
        positions,
    }
}
