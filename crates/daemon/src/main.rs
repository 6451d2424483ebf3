//! OPI Storage Simulator Daemon
//!
//! Serves the storage services from in-memory state so the lifecycle
//! exerciser can run without a real storage backend.

use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use opi_storaged::config::DaemonConfig;
use opi_storaged::{grpc, state};

#[derive(Parser)]
#[command(name = "opi-storaged")]
#[command(about = "OPI storage simulator - in-memory NVMe-oF, null and AIO services")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "opi-storaged.toml")]
    config: PathBuf,

    /// gRPC listen address (overrides the config file)
    #[arg(short, long)]
    listen: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    info!("OPI storage simulator v{}", env!("CARGO_PKG_VERSION"));

    let mut config = DaemonConfig::load(&cli.config)?;
    if let Some(listen) = cli.listen {
        config.grpc_listen = listen;
    }

    let state = state::StateManager::new();
    state.seed(&config.seed)?;

    let grpc_handle = tokio::spawn(grpc::serve(config.clone(), state));

    info!("Daemon started on {}", config.grpc_listen);

    // Wait for shutdown signal
    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Received shutdown signal");
        }
        result = grpc_handle => {
            match result {
                Ok(Err(e)) => tracing::error!("gRPC server error: {}", e),
                Err(e) => tracing::error!("gRPC server task failed: {}", e),
                Ok(Ok(())) => {}
            }
        }
    }

    info!("Daemon shutdown complete");
    Ok(())
}
