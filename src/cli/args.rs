//! CLI argument definitions using clap
//!
//! Commands:
//! - reeldb serve --config <path> [--data-dir <dir>] [--host <host>] [--port <port>]
//! - reeldb check --config <path> [--data-dir <dir>]

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// reeldb - A read-only movie ratings catalog over HTTP
#[derive(Parser, Debug)]
#[command(name = "reeldb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load the dataset and serve it over HTTP
    Serve {
        #[command(flatten)]
        common: CommonArgs,

        /// Host to bind to (overrides the config file)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides the config file)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Load the dataset, print a table summary and exit
    Check {
        #[command(flatten)]
        common: CommonArgs,
    },
}

/// Arguments shared by every command
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Path to configuration file
    #[arg(long, default_value = "./reeldb.json")]
    pub config: PathBuf,

    /// Directory holding movies.csv, ratings.csv, tags.csv and links.csv
    /// (overrides the config file)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
