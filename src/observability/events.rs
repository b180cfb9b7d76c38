//! Observable events
//!
//! Every log line the server emits names one of these.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Server startup begins
    ServerStart,
    /// Listener bound, ready to serve
    ServerListening,
    /// Graceful shutdown finished
    ServerShutdown,
    /// Server could not start, crashed, or lost its shutdown signal
    ServerFailed,

    // Configuration
    /// Configuration loaded
    ConfigLoaded,

    // Requests
    /// A request finished with a response
    RequestComplete,
    /// A request hit no route
    RouteNotFound,
}

impl Event {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ServerStart => "SERVER_START",
            Event::ServerListening => "SERVER_LISTENING",
            Event::ServerShutdown => "SERVER_SHUTDOWN",
            Event::ServerFailed => "SERVER_FAILED",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::RequestComplete => "REQUEST_COMPLETE",
            Event::RouteNotFound => "ROUTE_NOT_FOUND",
        }
    }

    /// Whether this event ends the process
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::ServerFailed)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
