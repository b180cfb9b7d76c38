//! Request counters
//!
//! - Counters only, monotonic
//! - Reset only on process start
//! - Lock-free (relaxed atomics)

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Registry of operational counters shared by all request handlers
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    /// Every request that produced a response
    requests_total: AtomicU64,
    /// Successful `/time` responses
    time_requests: AtomicU64,
    /// `/health` and `/ping` responses
    health_checks: AtomicU64,
    /// Requests that matched no route
    not_found: AtomicU64,
}

impl MetricsRegistry {
    /// Create a new metrics registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_requests(&self) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_time_requests(&self) {
        self.time_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_health_checks(&self) {
        self.health_checks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_not_found(&self) {
        self.not_found.fetch_add(1, Ordering::Relaxed);
    }

    /// Get all counters as a snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            requests_total: self.requests_total.load(Ordering::Relaxed),
            time_requests: self.time_requests.load(Ordering::Relaxed),
            health_checks: self.health_checks.load(Ordering::Relaxed),
            not_found: self.not_found.load(Ordering::Relaxed),
        }
    }
}

/// A point-in-time copy of all counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub requests_total: u64,
    pub time_requests: u64,
    pub health_checks: u64,
    pub not_found: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_registry_has_zero_values() {
        let snapshot = MetricsRegistry::new().snapshot();
        assert_eq!(
            snapshot,
            MetricsSnapshot {
                requests_total: 0,
                time_requests: 0,
                health_checks: 0,
                not_found: 0,
            }
        );
    }

    #[test]
    fn test_increment_counters() {
        let registry = MetricsRegistry::new();

        registry.increment_requests();
        registry.increment_requests();
        registry.increment_time_requests();
        registry.increment_health_checks();
        registry.increment_not_found();

        let snapshot = registry.snapshot();
        assert_eq!(snapshot.requests_total, 2);
        assert_eq!(snapshot.time_requests, 1);
        assert_eq!(snapshot.health_checks, 1);
        assert_eq!(snapshot.not_found, 1);
    }

    #[test]
    fn test_snapshot_serializes_for_metrics_route() {
        let registry = MetricsRegistry::new();
        registry.increment_time_requests();

        let parsed = serde_json::to_value(registry.snapshot()).unwrap();
        assert_eq!(parsed["time_requests"], 1);
        assert_eq!(parsed["requests_total"], 0);
    }

    #[test]
    fn test_thread_safety() {
        use std::sync::Arc;
        use std::thread;

        let registry = Arc::new(MetricsRegistry::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let reg = Arc::clone(&registry);
                thread::spawn(move || {
                    for _ in 0..250 {
                        reg.increment_requests();
                        reg.increment_time_requests();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let snapshot = registry.snapshot();
        assert_eq!(snapshot.requests_total, 2000);
        assert_eq!(snapshot.time_requests, 2000);
    }
}
