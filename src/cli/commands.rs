//! CLI command implementations
//!
//! Both commands load the full dataset first. A load failure aborts before
//! anything is served.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::dataset::{Dataset, TableName};
use crate::http_server::HttpServer;

use super::args::{Command, CommonArgs};
use super::config::Config;
use super::errors::{CliError, CliResult};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    init_tracing();
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { common, host, port } => serve(&common, host, port),
        Command::Check { common } => check(&common),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init();
}

/// Resolve the config file and apply command-line overrides
fn resolve_config(common: &CommonArgs) -> CliResult<Config> {
    let mut config = Config::load(&common.config)?;
    if let Some(data_dir) = &common.data_dir {
        config.data_dir = data_dir.clone();
    }
    Ok(config)
}

fn load_dataset(config: &Config) -> CliResult<Dataset> {
    info!(data_dir = %config.data_dir.display(), "loading dataset");
    Ok(Dataset::load(&config.data_dir)?)
}

/// Load the dataset and serve it until shutdown
pub fn serve(common: &CommonArgs, host: Option<String>, port: Option<u16>) -> CliResult<()> {
    let mut config = resolve_config(common)?;
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    let dataset = Arc::new(load_dataset(&config)?);
    let server = HttpServer::new(config.server, dataset);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::serve_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Load the dataset and print one line per table
pub fn check(common: &CommonArgs) -> CliResult<()> {
    let config = resolve_config(common)?;
    let dataset = load_dataset(&config)?;

    for name in TableName::ALL {
        let table = dataset.table(name);
        println!(
            "{:<8} {:>10} rows  key={}  columns={}",
            table.name().as_str(),
            table.len(),
            table.key_column(),
            table.columns().join(",")
        );
    }

    Ok(())
}
