//! CLI argument definitions using clap
//!
//! Commands:
//! - shipyard serve [--config <path>] [--port <port>]
//! - shipyard check-config --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// shipyard - a ship catalog service
#[derive(Parser, Debug)]
#[command(name = "shipyard")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to configuration file; defaults apply when omitted
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Load and validate a configuration file, then exit
    CheckConfig {
        /// Path to configuration file
        #[arg(long)]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
