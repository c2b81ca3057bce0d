//! Exchange metadata, passed through as raw JSON.

#[cfg(feature = "http")]
pub mod client;
