//! Clock sources
//!
//! `SystemClock` reads the host clock; `FixedClock` pins an instant for tests
//! and reproducible output.

use std::fmt;

use chrono::{DateTime, FixedOffset, Local, Utc};
use serde::{Deserialize, Serialize};

/// A source of wall-clock readings
pub trait Clock: Send + Sync {
    /// Read the current instant
    fn now(&self) -> DateTime<FixedOffset>;

    /// Whether readings are rendered with their UTC offset
    fn reports_offset(&self) -> bool {
        true
    }
}

/// How system readings are taken and rendered
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ClockMode {
    /// Host local wall time without an offset, e.g. `2024-01-02T03:04:05.000006`
    #[default]
    Naive,
    /// Coordinated Universal Time, rendered with a `Z` suffix
    Utc,
    /// Host local time with its `±HH:MM` offset
    Local,
}

impl ClockMode {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ClockMode::Naive => "naive",
            ClockMode::Utc => "utc",
            ClockMode::Local => "local",
        }
    }
}

impl fmt::Display for ClockMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Clock backed by the operating system
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    mode: ClockMode,
}

impl SystemClock {
    /// Create a system clock reporting in the given mode
    pub fn new(mode: ClockMode) -> Self {
        Self { mode }
    }

    /// Get the clock mode
    pub fn mode(&self) -> ClockMode {
        self.mode
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        match self.mode {
            ClockMode::Utc => Utc::now().fixed_offset(),
            ClockMode::Naive | ClockMode::Local => Local::now().fixed_offset(),
        }
    }

    fn reports_offset(&self) -> bool {
        self.mode != ClockMode::Naive
    }
}

/// Clock that always returns the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<FixedOffset>,
    reports_offset: bool,
}

impl FixedClock {
    pub fn new(instant: DateTime<FixedOffset>) -> Self {
        Self {
            instant,
            reports_offset: true,
        }
    }

    /// Pinned instant rendered as wall time in its own offset, offset dropped
    pub fn naive(instant: DateTime<FixedOffset>) -> Self {
        Self {
            instant,
            reports_offset: false,
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.instant
    }

    fn reports_offset(&self) -> bool {
        self.reports_offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utc_clock_has_zero_offset() {
        let clock = SystemClock::new(ClockMode::Utc);
        assert_eq!(clock.now().offset().local_minus_utc(), 0);
        assert!(clock.reports_offset());
    }

    #[test]
    fn test_naive_clock_reads_local_wall_time() {
        let clock = SystemClock::new(ClockMode::Naive);
        let reading = clock.now().naive_local();
        let wall = Local::now().naive_local();

        assert!(!clock.reports_offset());
        assert!((wall - reading) < chrono::Duration::seconds(2));
        assert!((reading - wall) < chrono::Duration::seconds(2));
    }

    #[test]
    fn test_local_clock_matches_utc_instant() {
        let local = SystemClock::new(ClockMode::Local).now();
        let utc = Utc::now();
        let drift = utc - local.with_timezone(&Utc);
        assert!(drift < chrono::Duration::seconds(2));
        assert!(drift > chrono::Duration::seconds(-2));
    }

    #[test]
    fn test_system_clock_advances() {
        let clock = SystemClock::default();
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
    }

    #[test]
    fn test_fixed_clock_is_pinned() {
        let instant = DateTime::parse_from_rfc3339("2024-05-01T12:30:00+02:00").unwrap();
        let clock = FixedClock::new(instant);
        assert_eq!(clock.now(), instant);
        assert_eq!(clock.now(), clock.now());
        assert!(clock.reports_offset());
        assert!(!FixedClock::naive(instant).reports_offset());
    }

    #[test]
    fn test_clock_mode_serde() {
        assert_eq!(serde_json::to_string(&ClockMode::Local).unwrap(), "\"local\"");
        let mode: ClockMode = serde_json::from_str("\"utc\"").unwrap();
        assert_eq!(mode, ClockMode::Utc);
        let mode: ClockMode = serde_json::from_str("\"naive\"").unwrap();
        assert_eq!(mode, ClockMode::Naive);
        assert!(serde_json::from_str::<ClockMode>("\"mars\"").is_err());
    }

    #[test]
    fn test_clock_mode_default_is_naive() {
        assert_eq!(ClockMode::default(), ClockMode::Naive);
        assert_eq!(SystemClock::default().mode().to_string(), "naive");
    }
}
