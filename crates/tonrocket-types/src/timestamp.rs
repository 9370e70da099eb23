//! ISO-8601 timestamps as used by invoices and webhook notifications.
//!
//! Rocket Pay emits RFC 3339 strings such as `"2024-01-01T00:00:00Z"` or
//! `"2024-01-01T12:30:00.123+03:00"`. [`Timestamp`] normalizes them to UTC.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A point in time, normalized to UTC.
///
/// # Serialization
///
/// Serialized as an RFC 3339 string with the `Z` suffix:
///
/// ```json
/// "2024-01-01T00:00:00Z"
/// ```
///
/// # Example
///
/// ```
/// use tonrocket_types::timestamp::Timestamp;
///
/// let ts: Timestamp = "2024-01-01T03:00:00+03:00".parse().unwrap();
/// assert_eq!(ts.to_string(), "2024-01-01T00:00:00Z");
/// assert_eq!(ts.as_secs(), 1704067200);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Ord, Eq, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Returns the wrapped [`DateTime`].
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Returns seconds since the Unix epoch.
    pub fn as_secs(&self) -> i64 {
        self.0.timestamp()
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value)
    }
}

impl From<Timestamp> for DateTime<Utc> {
    fn from(value: Timestamp) -> Self {
        value.0
    }
}

impl FromStr for Timestamp {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = DateTime::parse_from_rfc3339(s)?;
        Ok(Self(parsed.with_timezone(&Utc)))
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<Timestamp>().map_err(|e| {
            serde::de::Error::custom(format!("timestamp must be RFC 3339 ({e}): {s}"))
        })
    }
}
