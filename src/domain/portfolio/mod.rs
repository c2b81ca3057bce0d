//! Portfolio domain: balances and their USDT valuation.

#[cfg(feature = "http")]
pub mod client;
mod convert;
#[cfg(feature = "http")]
pub mod state;
pub mod wire;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use convert::decode_portfolio;
#[cfg(feature = "http")]
pub use state::PortfolioResource;

/// Full portfolio: total USDT value plus one entry per held asset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub total_usdt: Decimal,
    pub positions: Vec<Position>,
}

/// One held asset.
///
/// `total` is expected to equal `free + locked` and `pct` values to sum to
/// roughly 100 across a portfolio; neither is checked here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub asset: String,
    pub free: Decimal,
    pub locked: Decimal,
    pub total: Decimal,
    pub price_usdt: Decimal,
    pub value_usdt: Decimal,
    /// Share of the portfolio value, in percent.
    pub pct: Decimal,
}

impl Portfolio {
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn position(&self, asset: &str) -> Option<&Position> {
        self.positions
            .iter()
            .find(|p| p.asset.eq_ignore_ascii_case(asset))
    }

    /// Positions ordered by USDT value, largest first.
    pub fn by_value(&self) -> Vec<&Position> {
        let mut sorted: Vec<&Position> = self.positions.iter().collect();
        sorted.sort_by(|a, b| b.value_usdt.cmp(&a.value_usdt));
        sorted
    }
}
