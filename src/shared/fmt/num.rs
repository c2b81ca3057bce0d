//! Number formatting utilities for human-readable display.

use rust_decimal::{Decimal, RoundingStrategy};

/// Adds thousands separators to the integer part of a formatted number.
///
/// The fractional part is left untouched.
pub fn group_thousands(formatted: &str) -> String {
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let grouped = integer
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|c| std::str::from_utf8(c).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(",");

    match fraction {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

/// Format a decimal with a fixed number of fractional digits and separators.
pub fn display_fixed(amount: Decimal, decimals: u32) -> String {
    let rounded = amount.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    let formatted = format!("{:.1$}", rounded, decimals as usize);
    group_thousands(&formatted)
}

/// USD display with two fixed decimals: `$45,000.00`.
pub fn format_usd(amount: Decimal) -> String {
    let body = display_fixed(amount.abs(), 2);
    if amount.is_sign_negative() && !amount.is_zero() {
        format!("-${}", body)
    } else {
        format!("${}", body)
    }
}

/// Percentage share with two decimals: `12.35%`.
pub fn format_pct(pct: Decimal) -> String {
    format!("{}%", display_fixed(pct, 2))
}
