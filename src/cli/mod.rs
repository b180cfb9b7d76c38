//! CLI module
//!
//! Provides command-line interface for:
//! - serve: run the HTTP server until Ctrl-C
//! - now: print one reading and exit

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{load_config, now, resolve_config, run, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::write_json;
