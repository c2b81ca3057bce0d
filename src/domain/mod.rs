//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains some of:
//! - `mod.rs`: domain types with decimals and timestamps already parsed
//! - `wire.rs`: raw serde structs matching backend responses
//! - `convert.rs`: lenient wire → domain conversions
//! - `state.rs`: the live container for the resource
//! - `client.rs`: sub-client with the REST accessor and a `watch` constructor

pub mod exchange_info;
pub mod health;
pub mod market_data;
pub mod portfolio;
pub mod price;
pub mod trade;
