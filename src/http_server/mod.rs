//! # HTTP Server Module
//!
//! Axum server exposing the time service.
//!
//! # Endpoints
//!
//! - `/time` - Current server time as ISO-8601
//! - `/health` - Health check with crate version
//! - `/ping` - Minimal liveness probe
//! - `/metrics` - Request counters
//!
//! Any other path returns a JSON 404.

pub mod config;
pub mod errors;
pub mod observability_routes;
pub mod server;
pub mod state;
pub mod time_routes;
pub mod tracking;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ErrorResponse};
pub use server::HttpServer;
pub use state::AppState;
pub use tracking::REQUEST_ID_HEADER;
