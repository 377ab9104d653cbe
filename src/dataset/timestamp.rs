//! Serde helpers rendering [`NaiveDateTime`] with
//! [`TIMESTAMP_FORMAT`](crate::schema::TIMESTAMP_FORMAT).
//!
//! Sub-second precision is dropped on output. Input also accepts RFC 3339 and
//! `T`-separated ISO 8601 so that artifacts produced by other tools still parse.

use chrono::{DateTime, NaiveDateTime};
use serde::{de, Deserialize, Deserializer, Serializer};

use crate::schema::TIMESTAMP_FORMAT;

/// Render a timestamp as text.
pub fn format(value: &NaiveDateTime) -> String {
    value.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a timestamp rendered by [`format`] or a common ISO 8601 variant.
pub fn parse(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%.f"))
        .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f"))
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(text)
                .ok()
                .map(|dt| dt.naive_utc())
        })
}

/// Serialize with `#[serde(with = "crate::dataset::timestamp")]`.
pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format(value))
}

/// Deserialize with `#[serde(with = "crate::dataset::timestamp")]`.
pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    parse(&text).ok_or_else(|| de::Error::custom(format!("invalid timestamp '{}'", text)))
}
