use super::HealthStatus;
use crate::shared::decode::json_kind;
use chrono::{DateTime, Utc};
use serde_json::Value;

/// Decode a health payload. Never fails: a missing or mistyped `status`
/// becomes empty, an unreadable `timestamp` becomes `None`.
pub fn decode_health(value: Value) -> HealthStatus {
    let object = match value {
        Value::Object(map) => map,
        other => {
            tracing::warn!(kind = json_kind(&other), "Health payload is not an object");
            return HealthStatus::default();
        }
    };

    let status = match object.get("status") {
        Some(Value::String(s)) => s.clone(),
        Some(other) => {
            tracing::warn!(kind = json_kind(other), "Health status is not a string");
            String::new()
        }
        None => String::new(),
    };

    let timestamp = object.get("timestamp").and_then(millis);

    HealthStatus { status, timestamp }
}

fn millis(value: &Value) -> Option<DateTime<Utc>> {
    let millis = match value {
        Value::Number(n) => n.as_i64()?,
        Value::String(s) => s.trim().parse().ok()?,
        _ => return None,
    };
    DateTime::<Utc>::from_timestamp_millis(millis)
}
