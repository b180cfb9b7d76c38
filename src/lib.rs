//! timeserver - reports the server's current time over HTTP
//!
//! `GET /time` answers `{"current_time": "<ISO-8601>"}` with a reading taken
//! while the request is handled.

pub mod cli;
pub mod clock;
pub mod http_server;
pub mod observability;
