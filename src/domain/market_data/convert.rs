//! Conversions from wire types to domain types for klines.

use super::wire::{KlineObject, KlineResponse, RawKlineRow};
use super::Kline;
use crate::shared::decode::parse_decimal;

fn dec(s: &str) -> rust_decimal::Decimal {
    parse_decimal(s).unwrap_or_default()
}

impl From<KlineObject> for Kline {
    fn from(k: KlineObject) -> Self {
        Self {
            open_time: k.open_time,
            open: dec(&k.open),
            high: dec(&k.high),
            low: dec(&k.low),
            close: dec(&k.close),
            volume: dec(&k.volume),
            close_time: k.close_time,
            quote_asset_volume: dec(&k.quote_asset_volume),
            count: k.count,
            taker_buy_base_asset_volume: dec(&k.taker_buy_base_asset_volume),
            taker_buy_quote_asset_volume: dec(&k.taker_buy_quote_asset_volume),
        }
    }
}

impl From<RawKlineRow> for Kline {
    fn from(r: RawKlineRow) -> Self {
        Self {
            open_time: r.0,
            open: dec(&r.1),
            high: dec(&r.2),
            low: dec(&r.3),
            close: dec(&r.4),
            volume: dec(&r.5),
            close_time: r.6,
            quote_asset_volume: dec(&r.7),
            count: r.8,
            taker_buy_base_asset_volume: dec(&r.9),
            taker_buy_quote_asset_volume: dec(&r.10),
        }
    }
}

impl From<KlineResponse> for Kline {
    fn from(k: KlineResponse) -> Self {
        match k {
            KlineResponse::Object(o) => o.into(),
            KlineResponse::Row(r) => r.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::decode::decode_list;
    use rust_decimal::Decimal;
    use serde_json::json;
    use std::str::FromStr;

    fn object_json(open_time: i64, close: &str) -> serde_json::Value {
        json!({
            "openTime": open_time,
            "open": "42000.00",
            "high": "42500.50",
            "low": "41800.00",
            "close": close,
            "volume": 12.5,
            "closeTime": open_time + 3_599_999,
            "quoteAssetVolume": "525000.00",
            "count": 1200,
            "takerBuyBaseAssetVolume": "6.1",
            "takerBuyQuoteAssetVolume": "256000.00"
        })
    }

    #[test]
    fn test_object_shape() {
        let resp: KlineResponse = serde_json::from_value(object_json(1_705_320_000_000, "42300.10")).unwrap();
        let k: Kline = resp.into();
        assert_eq!(k.open_time, 1_705_320_000_000);
        assert_eq!(k.close, Decimal::from_str("42300.10").unwrap());
        assert_eq!(k.volume, Decimal::from_str("12.5").unwrap());
        assert_eq!(k.count, 1200);
        assert_eq!(k.range(), Decimal::from_str("700.50").unwrap());
        assert!(k.is_bullish());
    }

    #[test]
    fn test_raw_row_shape() {
        let row = json!([
            1_705_320_000_000i64, "42000.00", "42500.50", "41800.00", "41900.00", "12.5",
            1_705_323_599_999i64, "525000.00", 1200, "6.1", "256000.00", "0"
        ]);
        let resp: KlineResponse = serde_json::from_value(row).unwrap();
        assert!(matches!(resp, KlineResponse::Row(_)));
        let k: Kline = resp.into();
        assert_eq!(k.close_time, 1_705_323_599_999);
        assert_eq!(k.high, Decimal::from_str("42500.50").unwrap());
        assert!(!k.is_bullish());
    }

    #[test]
    fn test_non_array_and_bad_rows() {
        let klines: Vec<Kline> =
            decode_list::<KlineResponse, Kline>(json!({"error": "Invalid symbol"}), "market data");
        assert!(klines.is_empty());

        let klines: Vec<Kline> = decode_list::<KlineResponse, Kline>(
            json!([object_json(2, "1"), {"openTime": "soon"}, object_json(1, "2")]),
            "market data",
        );
        let times: Vec<i64> = klines.iter().map(|k| k.open_time).collect();
        assert_eq!(times, [2, 1]);
    }
}
