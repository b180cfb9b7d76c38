//! CLI argument definitions using clap
//!
//! Commands:
//! - timeserver serve [--config <path>] [--host <host>] [--port <port>]
//! - timeserver now [--clock naive|utc|local]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::clock::ClockMode;

/// timeserver - reports the server's current time over HTTP
#[derive(Parser, Debug)]
#[command(name = "timeserver")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to a JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Host to bind to (overrides the config file)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides the config file)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print the current time as JSON and exit
    Now {
        /// How to render the reading
        #[arg(long, value_enum, default_value_t = ClockMode::Naive)]
        clock: ClockMode,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
