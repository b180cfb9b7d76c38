//! # Clock Module
//!
//! Wall-clock readings for the `/time` endpoint.
//!
//! A [`TimeService`] asks its [`Clock`] for the current instant on every
//! call and wraps it in a [`TimeReading`]. Readings are never cached: each
//! one is captured while the request that returns it is being handled.
//!
//! # Usage
//!
//! ```ignore
//! use timeserver::clock::{ClockMode, TimeService};
//!
//! let service = TimeService::system(ClockMode::Utc);
//! let reading = service.current_time();
//! println!("{}", reading.to_iso8601());
//! ```

mod reading;
mod service;
mod source;

pub use reading::{CurrentTimeResponse, TimeReading, NAIVE_ISO8601_FORMAT};
pub use service::TimeService;
pub use source::{Clock, ClockMode, FixedClock, SystemClock};
