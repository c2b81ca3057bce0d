//! Price domain: latest spot prices by symbol.

#[cfg(feature = "http")]
pub mod client;
mod convert;
#[cfg(feature = "http")]
pub mod state;

use rust_decimal::Decimal;
use std::collections::BTreeMap;

pub use convert::decode_prices;
#[cfg(feature = "http")]
pub use state::{PriceResource, PriceWatch, PRICE_POLL_INTERVAL};

/// Symbol → latest price. Keys are exactly what the backend returned.
pub type PriceMap = BTreeMap<String, Decimal>;
