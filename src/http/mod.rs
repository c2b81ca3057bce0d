//! HTTP client layer: `DoraHttp`, a single-attempt JSON transport.

pub mod client;

pub use client::{DoraHttp, RequestOptions};
