//! Backend health check and the derived connection status.

#[cfg(feature = "http")]
pub mod client;
mod convert;
#[cfg(feature = "http")]
pub mod state;

use crate::live::FetchState;
use crate::shared::serde_util::timestamp_ms;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub use convert::decode_health;
#[cfg(feature = "http")]
pub use state::HealthResource;

/// `GET /health` response, as far as the backend filled it in.
///
/// Any 2xx answer counts as healthy; `status` is whatever text the backend
/// reported (empty when absent).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub status: String,
    #[serde(default, with = "timestamp_ms::option")]
    pub timestamp: Option<DateTime<Utc>>,
}

/// Connection indicator derived from a health container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiStatus {
    Checking,
    Offline,
    Online,
}

impl ApiStatus {
    pub fn from_state(state: &FetchState<Option<HealthStatus>>) -> Self {
        if state.loading {
            ApiStatus::Checking
        } else if state.error.is_some() || state.data.is_none() {
            ApiStatus::Offline
        } else {
            ApiStatus::Online
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ApiStatus::Checking => "checking",
            ApiStatus::Offline => "offline",
            ApiStatus::Online => "online",
        }
    }
}

impl fmt::Display for ApiStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn healthy() -> HealthStatus {
        serde_json::from_value(json!({"status": "ok", "timestamp": 1_705_326_300_000u64})).unwrap()
    }

    #[test]
    fn test_typed_decode() {
        assert_eq!(healthy().status, "ok");
        assert_eq!(
            healthy().timestamp.map(|t| t.timestamp_millis()),
            Some(1_705_326_300_000)
        );
        let partial: HealthStatus = serde_json::from_value(json!({"status": "ok"})).unwrap();
        assert!(partial.timestamp.is_none());
    }

    #[test]
    fn test_api_status() {
        let mut s: FetchState<Option<HealthStatus>> = FetchState::default();
        assert_eq!(ApiStatus::from_state(&s), ApiStatus::Checking);

        s.loading = false;
        assert_eq!(ApiStatus::from_state(&s), ApiStatus::Offline);

        s.data = Some(healthy());
        assert_eq!(ApiStatus::from_state(&s), ApiStatus::Online);

        // stale data kept after a failure still reads as offline
        s.error = Some("Health check failed: boom".to_string());
        assert_eq!(ApiStatus::from_state(&s), ApiStatus::Offline);
        assert_eq!(ApiStatus::Offline.to_string(), "offline");
    }
}
