//! Time service
//!
//! Stateless apart from its clock handle, so clones are shared freely across
//! concurrent requests.

use std::sync::Arc;

use super::reading::{CurrentTimeResponse, TimeReading};
use super::source::{Clock, ClockMode, SystemClock};

/// Produces a fresh [`TimeReading`] on every call
#[derive(Clone)]
pub struct TimeService {
    clock: Arc<dyn Clock>,
}

impl TimeService {
    /// Create a service over the given clock
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Create a service over the host clock
    pub fn system(mode: ClockMode) -> Self {
        Self::new(Arc::new(SystemClock::new(mode)))
    }

    /// Read the clock now
    ///
    /// The host clock being unavailable is not recoverable and is not retried.
    pub fn current_time(&self) -> TimeReading {
        let now = self.clock.now();
        if self.clock.reports_offset() {
            TimeReading::new(now)
        } else {
            TimeReading::naive(now)
        }
    }

    /// Read the clock now and shape it for the wire
    pub fn current_time_response(&self) -> CurrentTimeResponse {
        self.current_time().into()
    }
}

impl Default for TimeService {
    fn default() -> Self {
        Self::system(ClockMode::default())
    }
}

impl std::fmt::Debug for TimeService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimeService").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::{DateTime, Utc};

    #[test]
    fn test_fixed_clock_reading() {
        let instant = DateTime::parse_from_rfc3339("2025-03-04T05:06:07Z").unwrap();
        let service = TimeService::new(Arc::new(FixedClock::new(instant)));

        assert_eq!(service.current_time().timestamp(), instant);
        assert_eq!(
            service.current_time_response().current_time,
            "2025-03-04T05:06:07.000000Z"
        );
    }

    #[test]
    fn test_naive_fixed_clock_reading() {
        let instant = DateTime::parse_from_rfc3339("2025-03-04T05:06:07.8+02:00").unwrap();
        let service = TimeService::new(Arc::new(FixedClock::naive(instant)));

        assert_eq!(
            service.current_time_response().current_time,
            "2025-03-04T05:06:07.800000"
        );
    }

    #[test]
    fn test_system_reading_is_fresh() {
        let service = TimeService::default();
        let before = Utc::now();
        let reading = service.current_time().timestamp();
        let after = Utc::now();

        assert!(reading >= before);
        assert!(reading <= after);
    }

    #[test]
    fn test_readings_are_not_cached() {
        let service = TimeService::default();
        let first = service.current_time();
        std::thread::sleep(std::time::Duration::from_millis(5));
        let second = service.current_time();
        assert!(second.timestamp() > first.timestamp());
    }

    #[test]
    fn test_clones_share_clock() {
        let instant = DateTime::parse_from_rfc3339("2020-02-29T00:00:00+01:00").unwrap();
        let service = TimeService::new(Arc::new(FixedClock::new(instant)));
        let clone = service.clone();
        assert_eq!(clone.current_time(), service.current_time());
    }
}
