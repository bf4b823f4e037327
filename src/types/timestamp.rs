//! Serde helpers for RagFlow's timestamp fields.
//!
//! Dataset dates arrive as RFC-1123 strings (`"Wed, 28 May 2025 14:30:33 GMT"`).
//! RFC-3339 strings and integer unix seconds are accepted too. Parsing is
//! one-way: serialization emits RFC-3339, not the original text.

use chrono::{DateTime, TimeZone, Utc};
use serde::de::{self, Deserializer, Visitor};
use std::fmt;

/// Parse an RFC-1123 (RFC-2822 family) date, falling back to RFC-3339.
pub fn parse_http_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    DateTime::parse_from_rfc2822(raw)
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(TimestampVisitor)
}

struct TimestampVisitor;

impl<'de> Visitor<'de> for TimestampVisitor {
    type Value = DateTime<Utc>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an RFC-1123 / RFC-3339 date string or unix seconds")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        parse_http_date(v).ok_or_else(|| E::custom(format!("invalid date: {}", v)))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Utc.timestamp_opt(v, 0)
            .single()
            .ok_or_else(|| E::custom(format!("timestamp out of range: {}", v)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        let secs = i64::try_from(v).map_err(|_| E::custom(format!("timestamp out of range: {}", v)))?;
        self.visit_i64(secs)
    }
}
