//! CLI module for reeldb
//!
//! Provides command-line interface for:
//! - serve: Load the dataset and serve it over HTTP
//! - check: Load the dataset, report table sizes and exit

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, Command, CommonArgs};
pub use commands::{check, run, run_command, serve};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
