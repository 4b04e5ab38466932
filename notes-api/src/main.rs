use anyhow::Result;
use clap::Parser;
use notes_api::{AppState, NotesServer};
use notes_core::config::Config;
use notes_core::logging::{init_logging_with_config, LogConfig};
use notes_core::metrics::PrometheusExporter;
use notes_core::shutdown::{install_signal_handlers, ShutdownCoordinator};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "notes-api")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Address to bind
    #[arg(long)]
    host: Option<IpAddr>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Set the log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    log_level: Option<String>,

    /// Enable JSON formatted logging
    #[arg(long)]
    json_logs: bool,
}

impl Args {
    /// File (or defaults), then `NOTES_*` variables, then flags
    fn load_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };
        config.apply_env_overrides(|key| std::env::var(key).ok())?;

        let bind = config.server.bind_address;
        config.server.bind_address = SocketAddr::new(
            self.host.unwrap_or(bind.ip()),
            self.port.unwrap_or(bind.port()),
        );
        if let Some(level) = &self.log_level {
            config.logging.level = level.to_lowercase();
        }
        if self.json_logs {
            config.logging.json_format = true;
        }

        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = args.load_config()?;

    init_logging_with_config(LogConfig::try_from(&config.logging)?)?;

    let metrics = if config.metrics.enabled {
        Some(PrometheusExporter::install()?)
    } else {
        None
    };

    let state = Arc::new(AppState::in_memory(metrics));
    let shutdown = Arc::new(ShutdownCoordinator::new(config.server.shutdown_timeout));
    install_signal_handlers(shutdown.clone());

    info!(version = env!("CARGO_PKG_VERSION"), "Notes API starting");

    NotesServer::new(config, state, shutdown).run().await?;

    info!("Notes API stopped");
    Ok(())
}
