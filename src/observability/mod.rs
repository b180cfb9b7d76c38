//! Observability subsystem
//!
//! - Structured logging (JSON lines)
//! - Typed lifecycle and request events
//! - Lock-free request counters
//!
//! Observability is read-only: nothing here changes what a request returns.
//!
//! # Usage
//!
//! ```ignore
//! use timeserver::observability::{log_event_with_fields, Event, MetricsRegistry};
//!
//! log_event_with_fields(Event::ServerListening, &[("addr", "0.0.0.0:8000")]);
//!
//! let metrics = MetricsRegistry::new();
//! metrics.increment_time_requests();
//! ```

mod events;
mod logger;
mod metrics;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};

fn severity_for(event: Event) -> Severity {
    if event.is_fatal() {
        Severity::Fatal
    } else {
        Severity::Info
    }
}

/// Log a lifecycle event
pub fn log_event(event: Event) {
    Logger::log(severity_for(event), event.as_str(), &[]);
}

/// Log an event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(severity_for(event), event.as_str(), fields);
}
