//! CLI command implementations

use std::fs;
use std::path::Path;

use crate::clock::{ClockMode, CurrentTimeResponse, TimeService};
use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::{log_event_with_fields, Event};

use super::args::Command;
use super::errors::{CliError, CliResult};
use super::io::write_json;

/// Load and validate a JSON configuration file
pub fn load_config(path: &Path) -> CliResult<HttpServerConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        CliError::config_error(format!("Failed to read config {}: {}", path.display(), e))
    })?;

    let config: HttpServerConfig = serde_json::from_str(&content)
        .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

    config.validate().map_err(CliError::config_error)?;

    Ok(config)
}

/// Build the effective configuration: file (or defaults), then flag overrides
pub fn resolve_config(
    path: Option<&Path>,
    host: Option<String>,
    port: Option<u16>,
) -> CliResult<HttpServerConfig> {
    let mut config = match path {
        Some(path) => load_config(path)?,
        None => HttpServerConfig::default(),
    };

    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    config.validate().map_err(CliError::config_error)?;
    Ok(config)
}

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, host, port } => {
            let config = resolve_config(config.as_deref(), host, port)?;
            serve(config)
        }
        Command::Now { clock } => now(clock),
    }
}

/// Start the HTTP server and block until Ctrl-C
pub fn serve(config: HttpServerConfig) -> CliResult<()> {
    let port = config.port.to_string();
    log_event_with_fields(
        Event::ConfigLoaded,
        &[
            ("clock", config.clock.as_str()),
            ("host", config.host.as_str()),
            ("port", port.as_str()),
        ],
    );

    let server = HttpServer::with_config(config);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(server.start()).map_err(|e| {
        let message = e.to_string();
        log_event_with_fields(Event::ServerFailed, &[("error", message.as_str())]);
        CliError::serve_failed(format!("HTTP server failed: {}", message))
    })
}

/// Print one reading in the `/time` response shape
pub fn now(mode: ClockMode) -> CliResult<()> {
    write_json(&now_response(mode))
}

fn now_response(mode: ClockMode) -> CurrentTimeResponse {
    TimeService::system(mode).current_time_response()
}
