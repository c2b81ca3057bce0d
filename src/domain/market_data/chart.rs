//! Close-price line series for charting.

use super::Kline;
use crate::shared::fmt::format_axis_label;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One point of a line series. `time` is in epoch seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub time: i64,
    pub value: Decimal,
}

impl ChartPoint {
    pub fn at(&self) -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp(self.time, 0).unwrap_or_default()
    }

    /// Axis label: `HH:MM` for intraday charts, `YYYY-MM-DD` for daily and longer.
    pub fn label(&self, daily: bool) -> String {
        format_axis_label(self.at(), daily)
    }
}

/// Close prices ordered by open time ascending.
///
/// Klines arrive in backend order; this does not modify the input.
pub fn close_series(klines: &[Kline]) -> Vec<ChartPoint> {
    let mut points: Vec<ChartPoint> = klines
        .iter()
        .map(|k| ChartPoint {
            time: k.open_time.div_euclid(1000),
            value: k.close,
        })
        .collect();
    points.sort_by_key(|p| p.time);
    points
}
