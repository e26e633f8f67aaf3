//! Validated date and time fields.
//!
//! The store hands dates out in several shapes. They are normalized here so a
//! malformed value rejects the record instead of travelling on untyped.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveTime, SecondsFormat, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// A calendar date or timestamp from the content store.
///
/// Accepts `YYYY-MM-DD`, RFC 3339, or `{"$date": "<rfc3339>"}`. Date-only
/// values are pinned to midnight UTC. Always serialized as RFC 3339.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StoreDate(DateTime<Utc>);

impl StoreDate {
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(Self(dt.with_timezone(&Utc)));
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|naive| Self(naive.and_utc()))
    }
}

impl fmt::Display for StoreDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}

impl Serialize for StoreDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDate {
    Text(String),
    Wrapped {
        #[serde(rename = "$date")]
        date: String,
    },
}

impl<'de> Deserialize<'de> for StoreDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = match RawDate::deserialize(deserializer)? {
            RawDate::Text(s) => s,
            RawDate::Wrapped { date } => date,
        };
        StoreDate::parse(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid date: {:?}", raw)))
    }
}

/// A wall-clock time of day, e.g. an event's start time.
///
/// Accepts `HH:MM`, `HH:MM:SS` and `HH:MM:SS.fff`; serialized as `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct EventTime(NaiveTime);

impl EventTime {
    const FORMATS: [&'static str; 3] = ["%H:%M:%S%.f", "%H:%M:%S", "%H:%M"];

    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::FORMATS
            .iter()
            .find_map(|fmt| NaiveTime::parse_from_str(raw, fmt).ok())
            .map(Self)
    }
}

impl fmt::Display for EventTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

impl Serialize for EventTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for EventTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        EventTime::parse(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid time of day: {:?}", raw)))
    }
}
