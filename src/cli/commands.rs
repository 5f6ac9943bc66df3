//! CLI command implementations

use std::path::Path;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use crate::config::ShipyardConfig;
use crate::http_server::HttpServer;
use crate::observability::{init_logging, log_event, Event};
use crate::storage::InMemoryShipStore;

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port } => serve(config.as_deref(), port),
        Command::CheckConfig { config } => check_config(&config),
    }
}

/// Resolve configuration: the file when given, defaults otherwise
pub fn load_config(path: Option<&Path>, port: Option<u16>) -> CliResult<ShipyardConfig> {
    let mut config = match path {
        Some(path) => ShipyardConfig::load(path)?,
        None => ShipyardConfig::default(),
    };

    if let Some(port) = port {
        config.port = port;
        config.validate()?;
    }

    Ok(config)
}

/// Start the HTTP server and block until shutdown
pub fn serve(path: Option<&Path>, port: Option<u16>) -> CliResult<()> {
    let config = load_config(path, port)?;

    init_logging(config.log_format, &config.log_level);
    log_startup(&config);

    let server = HttpServer::new(config, InMemoryShipStore::new());

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::serve_failed(format!("HTTP server failed: {}", e)))
    })
}

fn log_startup(config: &ShipyardConfig) {
    log_event(Event::BootStart);
    tracing::info!(
        event = %Event::ConfigLoaded,
        addr = %config.socket_addr(),
        page_size = config.default_page_size,
        log_format = %config.log_format,
    );
}

/// Validate a configuration file and print the effective values
pub fn check_config(path: &Path) -> CliResult<()> {
    let config = ShipyardConfig::load(path)?;
    let rendered = serde_json::to_string_pretty(&config)
        .map_err(|e| CliError::config_error(format!("Failed to render config: {}", e)))?;
    println!("{}", rendered);
    Ok(())
}
