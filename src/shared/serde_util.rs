//! Custom serde helpers for backend wire formats.

/// Deserializes Unix-millis into `DateTime<Utc>`.
///
/// The backend sends timestamps as epoch milliseconds, not ISO 8601 strings.
pub mod timestamp_ms {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    fn from_millis<E: serde::de::Error>(millis: i64) -> Result<DateTime<Utc>, E> {
        DateTime::<Utc>::from_timestamp_millis(millis)
            .ok_or_else(|| E::custom(format!("Invalid timestamp: {}", millis)))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        from_millis(i64::deserialize(deserializer)?)
    }

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(value.timestamp_millis())
    }

    /// Optional variant; `null` is `None`.
    pub mod option {
        use chrono::{DateTime, Utc};
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
        where
            D: Deserializer<'de>,
        {
            Option::<i64>::deserialize(deserializer)?
                .map(super::from_millis)
                .transpose()
        }

        pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match value {
                Some(at) => super::serialize(at, serializer),
                None => serializer.serialize_none(),
            }
        }
    }
}

/// Accepts either a JSON string or a JSON number and yields its text.
///
/// Binance proxies send prices and quantities as numeric strings; some
/// backend builds send plain numbers instead.
pub mod string_or_number {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::String(s) => Ok(s),
            Value::Number(n) => Ok(n.to_string()),
            other => Err(serde::de::Error::custom(format!(
                "expected numeric string, got {}",
                other
            ))),
        }
    }
}
