use super::PriceMap;
use crate::shared::decode::{decimal, json_kind};
use serde_json::Value;

/// Decode a `{symbol: price}` object. Prices may be numbers or numeric
/// strings; any other entry is skipped. A non-object payload yields an
/// empty map.
pub fn decode_prices(value: Value) -> PriceMap {
    let entries = match value {
        Value::Object(entries) => entries,
        other => {
            tracing::warn!(kind = json_kind(&other), "prices is not an object, returning empty map");
            return PriceMap::new();
        }
    };

    entries
        .into_iter()
        .filter_map(|(symbol, raw)| match decimal(&raw) {
            Some(price) => Some((symbol, price)),
            None => {
                tracing::warn!(%symbol, kind = json_kind(&raw), "skipping unparseable price");
                None
            }
        })
        .collect()
}
