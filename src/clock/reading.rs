//! Time readings and their wire form

use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde::{Deserialize, Serialize};

/// `YYYY-MM-DDTHH:MM:SS.ffffff`, the naive ISO-8601 form
pub const NAIVE_ISO8601_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// One captured wall-clock instant
///
/// Created per request and discarded once the response is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeReading {
    timestamp: DateTime<FixedOffset>,
    with_offset: bool,
}

impl TimeReading {
    /// Reading rendered with its UTC offset
    pub fn new(timestamp: DateTime<FixedOffset>) -> Self {
        Self {
            timestamp,
            with_offset: true,
        }
    }

    /// Reading rendered as wall time in its own offset, without the offset
    pub fn naive(timestamp: DateTime<FixedOffset>) -> Self {
        Self {
            timestamp,
            with_offset: false,
        }
    }

    /// Get the captured instant
    pub fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }

    /// Render as ISO-8601 with microsecond precision
    ///
    /// Naive readings drop the offset. Otherwise the RFC 3339 profile is
    /// used: a zero offset is written as `Z`, any other as `±HH:MM`.
    pub fn to_iso8601(&self) -> String {
        if self.with_offset {
            self.timestamp.to_rfc3339_opts(SecondsFormat::Micros, true)
        } else {
            self.timestamp
                .naive_local()
                .format(NAIVE_ISO8601_FORMAT)
                .to_string()
        }
    }
}

/// Body of `GET /time`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentTimeResponse {
    pub current_time: String,
}

impl From<TimeReading> for CurrentTimeResponse {
    fn from(reading: TimeReading) -> Self {
        Self {
            current_time: reading.to_iso8601(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn instant(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    #[test]
    fn test_utc_renders_with_z() {
        let r = TimeReading::new(instant("2024-01-02T03:04:05.123456+00:00"));
        assert_eq!(r.to_iso8601(), "2024-01-02T03:04:05.123456Z");
    }

    #[test]
    fn test_offset_renders_with_sign() {
        let r = TimeReading::new(instant("2024-01-02T03:04:05-05:30"));
        assert_eq!(r.to_iso8601(), "2024-01-02T03:04:05.000000-05:30");
    }

    #[test]
    fn test_naive_keeps_wall_time_and_drops_offset() {
        let r = TimeReading::naive(instant("2024-01-02T03:04:05.000042-05:30"));
        assert_eq!(r.to_iso8601(), "2024-01-02T03:04:05.000042");
    }

    #[test]
    fn test_naive_rendering_parses_back() {
        let ts = instant("2031-12-31T23:59:59.999999+09:00");
        let rendered = TimeReading::naive(ts).to_iso8601();
        let parsed = NaiveDateTime::parse_from_str(&rendered, NAIVE_ISO8601_FORMAT).unwrap();
        assert_eq!(parsed, ts.naive_local());
    }

    #[test]
    fn test_rendering_parses_back_to_same_instant() {
        let r = TimeReading::new(instant("2031-12-31T23:59:59.999999+09:00"));
        let parsed = DateTime::parse_from_rfc3339(&r.to_iso8601()).unwrap();
        assert_eq!(parsed, r.timestamp());
    }

    #[test]
    fn test_response_serialization() {
        let response = CurrentTimeResponse::from(TimeReading::new(instant("2024-01-02T03:04:05Z")));
        let json = serde_json::to_value(&response).unwrap();

        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert_eq!(json["current_time"], "2024-01-02T03:04:05.000000Z");
    }
}
