//! # HTTP Server
//!
//! Combines the time and observability routers behind CORS and request
//! tracking, and runs them on a tokio listener.

use std::future::{self, Future};
use std::io;
use std::sync::Arc;

use axum::{middleware, Router};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use super::config::HttpServerConfig;
use super::observability_routes::observability_routes;
use super::state::AppState;
use super::time_routes::time_routes;
use super::tracking::{not_found, track_requests};
use crate::clock::{Clock, SystemClock, TimeService};
use crate::observability::{log_event, log_event_with_fields, Event, MetricsRegistry};

/// HTTP server for the time service
pub struct HttpServer {
    config: HttpServerConfig,
    state: AppState,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new() -> Self {
        Self::with_config(HttpServerConfig::default())
    }

    /// Create a new HTTP server reading the host clock in the configured mode
    pub fn with_config(config: HttpServerConfig) -> Self {
        let clock = Arc::new(SystemClock::new(config.clock));
        Self::with_clock(config, clock)
    }

    /// Create a new HTTP server over an explicit clock
    pub fn with_clock(config: HttpServerConfig, clock: Arc<dyn Clock>) -> Self {
        let state = AppState::new(TimeService::new(clock));
        let router = Self::build_router(&config, state.clone());
        Self {
            config,
            state,
            router,
        }
    }

    fn build_router(config: &HttpServerConfig, state: AppState) -> Router {
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            // Origins were checked by HttpServerConfig::validate
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::<AppState>::new()
            .fallback(not_found)
            .with_state(state.clone())
            .merge(time_routes(state.clone()))
            .merge(observability_routes(state.clone()))
            .layer(middleware::from_fn_with_state(state, track_requests))
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Counters shared with the handlers
    pub fn metrics(&self) -> Arc<MetricsRegistry> {
        Arc::clone(&self.state.metrics)
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind the configured address and serve until Ctrl-C
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr = self.socket_addr();
        log_event_with_fields(
            Event::ServerStart,
            &[("addr", addr.as_str()), ("clock", self.config.clock.as_str())],
        );

        let listener = TcpListener::bind(addr.as_str()).await?;
        self.serve(listener, shutdown_signal(tokio::signal::ctrl_c()))
            .await
    }

    /// Serve on an already-bound listener until `shutdown` resolves
    ///
    /// In-flight requests are drained before this returns.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?.to_string();
        log_event_with_fields(Event::ServerListening, &[("addr", addr.as_str())]);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        log_event(Event::ServerShutdown);
        Ok(())
    }
}

/// Resolves when `signal` fires
///
/// If the handler could not be installed the failure is logged and the
/// future never resolves, leaving the process to the default SIGINT action.
async fn shutdown_signal<F>(signal: F)
where
    F: Future<Output = io::Result<()>>,
{
    if let Err(e) = signal.await {
        let message = e.to_string();
        log_event_with_fields(
            Event::ServerFailed,
            &[("error", message.as_str()), ("stage", "signal_handler")],
        );
        future::pending::<()>().await;
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}
