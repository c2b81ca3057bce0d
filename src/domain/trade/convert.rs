//! Conversions from wire types to domain types for trades.

use super::wire::TradeResponse;
use super::Trade;
use crate::shared::decode::parse_decimal;
use crate::shared::Symbol;
use chrono::TimeZone;

impl From<TradeResponse> for Trade {
    fn from(t: TradeResponse) -> Self {
        Self {
            symbol: Symbol::new(&t.symbol),
            id: t.id,
            order_id: t.order_id,
            side: t.side,
            qty: parse_decimal(&t.qty).unwrap_or_default(),
            price: parse_decimal(&t.price).unwrap_or_default(),
            realized_pnl: parse_decimal(&t.realized_pnl).unwrap_or_default(),
            time: chrono::Utc
                .timestamp_millis_opt(t.time)
                .single()
                .unwrap_or_default(),
            commission: parse_decimal(&t.commission).unwrap_or_default(),
            commission_asset: t.commission_asset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::decode::decode_list;
    use crate::shared::TradeSide;
    use rust_decimal::Decimal;
    use serde_json::json;
    use std::str::FromStr;

    fn sample_trade_json() -> serde_json::Value {
        json!({
            "symbol": "BTCUSDT",
            "id": 28457,
            "orderId": 100234,
            "side": "BUY",
            "qty": "0.00100000",
            "price": "45000.00",
            "realizedPnl": "0",
            "time": 1705326300000i64,
            "commission": "0.00000100",
            "commissionAsset": "BTC"
        })
    }

    #[test]
    fn test_trade_response_conversion() {
        let resp: TradeResponse = serde_json::from_value(sample_trade_json()).unwrap();
        let trade: Trade = resp.into();
        assert_eq!(trade.symbol.as_str(), "BTCUSDT");
        assert_eq!(trade.id, 28457);
        assert_eq!(trade.order_id, 100234);
        assert_eq!(trade.side, TradeSide::Buy);
        assert_eq!(trade.qty, Decimal::from_str("0.001").unwrap());
        assert_eq!(trade.price, Decimal::from_str("45000").unwrap());
        assert_eq!(trade.notional(), Decimal::from_str("45").unwrap());
        assert_eq!(trade.time.timestamp_millis(), 1705326300000);
        assert_eq!(trade.commission_asset, "BTC");
    }

    #[test]
    fn test_optional_fields_default() {
        let resp: TradeResponse = serde_json::from_value(json!({
            "symbol": "ethusdt",
            "id": 1,
            "orderId": 2,
            "side": "SELL",
            "qty": 1.5,
            "price": "2500",
            "time": 0
        }))
        .unwrap();
        let trade: Trade = resp.into();
        assert_eq!(trade.symbol.as_str(), "ETHUSDT");
        assert_eq!(trade.side, TradeSide::Sell);
        assert_eq!(trade.qty, Decimal::from_str("1.5").unwrap());
        assert_eq!(trade.realized_pnl, Decimal::ZERO);
        assert_eq!(trade.commission, Decimal::ZERO);
        assert_eq!(trade.commission_asset, "");
    }

    #[test]
    fn test_list_keeps_backend_order_and_skips_bad_rows() {
        let mut second = sample_trade_json();
        second["id"] = json!(28458);
        let bad = json!({"symbol": "BTCUSDT", "side": "HOLD"});

        let trades: Vec<Trade> =
            decode_list::<TradeResponse, Trade>(json!([second, bad, sample_trade_json()]), "trades");
        let ids: Vec<u64> = trades.iter().map(|t| t.id).collect();
        assert_eq!(ids, [28458, 28457]);
    }
}
