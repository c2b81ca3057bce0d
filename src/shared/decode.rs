//! Lenient decoding of loosely-typed backend payloads.
//!
//! A payload that parses as JSON but has the wrong shape is never an error
//! here: it is logged and replaced by a safe default so that views always get
//! well-typed collections.

use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::str::FromStr;

/// Decode a JSON array into domain items.
///
/// A non-array payload yields an empty vec. Elements that do not decode as
/// `W` are skipped.
pub fn decode_list<W, D>(value: Value, what: &str) -> Vec<D>
where
    W: DeserializeOwned,
    D: From<W>,
{
    let items = match value {
        Value::Array(items) => items,
        other => {
            tracing::warn!(
                kind = json_kind(&other),
                "{} is not an array, returning empty list",
                what
            );
            return Vec::new();
        }
    };

    let total = items.len();
    let decoded: Vec<D> = items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value::<W>(item) {
            Ok(wire) => Some(D::from(wire)),
            Err(e) => {
                tracing::warn!(index, error = %e, "skipping malformed {} entry", what);
                None
            }
        })
        .collect();

    if decoded.len() < total {
        tracing::debug!(kept = decoded.len(), total, "decoded {}", what);
    }
    decoded
}

/// A decimal from a JSON number or numeric string. Anything else is `None`.
pub fn decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => Decimal::from_str(&n.to_string())
            .or_else(|_| Decimal::from_scientific(&n.to_string()))
            .ok(),
        Value::String(s) => parse_decimal(s),
        _ => None,
    }
}

/// Parse a numeric string, accepting scientific notation.
pub fn parse_decimal(s: &str) -> Option<Decimal> {
    let s = s.trim();
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()
}

/// Same as [`decimal`], defaulting to zero.
pub fn decimal_or_zero(value: Option<&Value>) -> Decimal {
    value.and_then(decimal).unwrap_or(Decimal::ZERO)
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Wire {
        n: u32,
    }

    struct Item(u32);

    impl From<Wire> for Item {
        fn from(w: Wire) -> Self {
            Item(w.n)
        }
    }

    #[test]
    fn test_non_array_yields_empty() {
        let items: Vec<Item> = decode_list::<Wire, Item>(json!({"error": "nope"}), "items");
        assert!(items.is_empty());
        let items: Vec<Item> = decode_list::<Wire, Item>(Value::Null, "items");
        assert!(items.is_empty());
    }

    #[test]
    fn test_malformed_entries_skipped() {
        let items: Vec<Item> =
            decode_list::<Wire, Item>(json!([{"n": 1}, {"n": "x"}, 7, {"n": 3}]), "items");
        let ns: Vec<u32> = items.iter().map(|i| i.0).collect();
        assert_eq!(ns, [1, 3]);
    }

    #[test]
    fn test_decimal_from_number_and_string() {
        assert_eq!(decimal(&json!(12.5)), Some(Decimal::new(125, 1)));
        assert_eq!(decimal(&json!("45000.00")), Some(Decimal::new(4500000, 2)));
        assert_eq!(decimal(&json!("1e-3")), Some(Decimal::new(1, 3)));
        assert_eq!(decimal(&json!("abc")), None);
        assert_eq!(decimal(&json!(null)), None);
    }

    #[test]
    fn test_decimal_or_zero() {
        assert_eq!(decimal_or_zero(None), Decimal::ZERO);
        assert_eq!(decimal_or_zero(Some(&json!(false))), Decimal::ZERO);
        assert_eq!(decimal_or_zero(Some(&json!(3))), Decimal::from(3));
    }
}
