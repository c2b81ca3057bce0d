//! Display helpers for prices, percentages and timestamps.

pub mod num;

pub use num::{display_fixed, format_pct, format_usd, group_thousands};

use chrono::{DateTime, Utc};

/// `2024-01-15 13:45:00 UTC`
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Axis label for a candle: time of day for intraday intervals, date otherwise.
pub fn format_axis_label(at: DateTime<Utc>, daily: bool) -> String {
    if daily {
        at.format("%Y-%m-%d").to_string()
    } else {
        at.format("%H:%M").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp() {
        let at = DateTime::<Utc>::from_timestamp_millis(1_705_326_300_000).unwrap();
        assert_eq!(format_timestamp(at), "2024-01-15 13:45:00 UTC");
        assert_eq!(format_axis_label(at, false), "13:45");
        assert_eq!(format_axis_label(at, true), "2024-01-15");
    }
}
