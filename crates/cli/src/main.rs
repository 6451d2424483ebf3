//! OPI Storage CLI - Main Entry Point

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use opi_storage_common::client::{AioControllerClient, NullDebugClient, NvmfRemoteControllerClient};
use opi_storage_common::ResourceKind;
use tracing::debug;

use opi_storage_cli::commands::{aio, backend, null, nvme};
use opi_storage_cli::config::ExerciserConfig;
use opi_storage_cli::output::{self, print_item, print_success, OutputFormat, TableDisplay};

/// OPI storage service exerciser
#[derive(Parser)]
#[command(name = "opi-storagectl")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Storage service address (overrides the config file)
    #[arg(long, env = "OPI_STORAGE_ADDR", global = true)]
    addr: Option<String>,

    /// Configuration file
    #[arg(short, long, default_value = "opi-storagectl.toml", global = true)]
    config: PathBuf,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: output::OutputFormat,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full lifecycle against every storage service
    Backend(backend::BackendArgs),

    /// Manage NVMe-oF remote controllers
    #[command(subcommand)]
    Nvme(nvme::NvmeCommands),

    /// Manage null debug devices
    #[command(subcommand)]
    Null(null::NullCommands),

    /// Manage AIO controllers
    #[command(subcommand)]
    Aio(aio::AioCommands),

    /// Show the effective configuration
    Config {
        /// Write it to the config file
        #[arg(long)]
        write: bool,
    },

    /// Show version information
    Version,
}

#[derive(serde::Serialize)]
#[serde(transparent)]
struct ConfigView<'a>(&'a ExerciserConfig);

impl TableDisplay for ConfigView<'_> {
    fn headers() -> Vec<&'static str> {
        vec!["Endpoint", "Storage Host", "Kinds", "Parallel"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.0.endpoint.clone(),
            self.0.storage_host.clone().unwrap_or_else(|| "-".to_string()),
            self.0
                .backend
                .kinds
                .iter()
                .map(|k| k.label())
                .collect::<Vec<_>>()
                .join(","),
            self.0.backend.parallel.to_string(),
        ]
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_target(false)
        .init();

    let mut config = ExerciserConfig::load(&cli.config)?;
    if let Some(addr) = cli.addr {
        config.endpoint = addr;
    }
    debug!("Using endpoint {}", config.endpoint);

    let format: OutputFormat = cli.format;
    let endpoint = config.endpoint.clone();

    match cli.command {
        Commands::Backend(args) => backend::execute(args, &endpoint, &config, format).await?,
        Commands::Nvme(cmd) => {
            let client = NvmfRemoteControllerClient::connect(&endpoint).await?;
            nvme::execute(cmd, client, config.backend.nvme, format).await?
        }
        Commands::Null(cmd) => {
            let client = NullDebugClient::connect(&endpoint).await?;
            null::execute(cmd, client, config.backend.null, format).await?
        }
        Commands::Aio(cmd) => {
            let client = AioControllerClient::connect(&endpoint).await?;
            aio::execute(cmd, client, config.backend.aio, format).await?
        }
        Commands::Config { write } => {
            print_item(&ConfigView(&config), format);
            if write {
                config.save(&cli.config)?;
                print_success(&format!("Configuration written to {}", cli.config.display()));
            }
        }
        Commands::Version => {
            println!("opi-storagectl v{}", env!("CARGO_PKG_VERSION"));
            for kind in ResourceKind::ALL {
                println!("  {}", kind.service_name());
            }
        }
    }

    Ok(())
}
