//! item-service - item management with bounded-concurrency batch processing

use clap::Parser;
use item_service::config::{Config, ConfigSource, DEFAULT_CONFIG_PATH};
use item_service::utils::logging::init_tracing;
use item_service::{build_info, server};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "item-service", version, about)]
struct Args {
    /// Path to the YAML configuration file
    #[arg(short, long, env = "APP_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Override the bind host
    #[arg(long)]
    host: Option<String>,

    /// Override the bind port
    #[arg(short, long)]
    port: Option<u16>,
}

async fn load_config(args: &Args) -> item_service::Result<(Config, ConfigSource)> {
    let (mut config, source) =
        Config::load_with_source(&args.config, |name| std::env::var(name).ok()).await?;

    if let Some(host) = &args.host {
        config.service.server.host = host.clone();
    }
    if let Some(port) = args.port {
        config.service.server.port = port;
    }

    config.validate()?;
    Ok((config, source))
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let (config, source) = match load_config(&args).await {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_tracing(config.logging()) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    let build = build_info();
    match source {
        ConfigSource::File => info!(
            version = build.version,
            git_hash = build.git_hash,
            "Configuration loaded from {:?}",
            args.config
        ),
        ConfigSource::Defaults => info!(
            version = build.version,
            git_hash = build.git_hash,
            "Configuration file {:?} not found, using defaults",
            args.config
        ),
    }

    match server::run_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Display keeps the bind hints readable
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
