use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Absolute dashboard time range. Serialized as epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub from: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub to: DateTime<Utc>,
}

impl TimeRange {
    pub fn new(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self { from, to }
    }

    /// Range from epoch milliseconds. Out-of-range inputs clamp to the epoch.
    pub fn from_millis(from: i64, to: i64) -> Self {
        let at = |ms: i64| Utc.timestamp_millis_opt(ms).single().unwrap_or_default();
        Self {
            from: at(from),
            to: at(to),
        }
    }

    pub fn from_ms(&self) -> f64 {
        self.from.timestamp_millis() as f64
    }

    pub fn to_ms(&self) -> f64 {
        self.to.timestamp_millis() as f64
    }
}
