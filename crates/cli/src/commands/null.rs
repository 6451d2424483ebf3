//! Null Debug Device Commands

use anyhow::Result;
use clap::{Args, Subcommand};
use opi_storage_common::client::NullDebugClient;
use opi_storage_common::NullDebug;

use super::{execute_op, ResourceOp};
use crate::output::{OutputFormat, TableDisplay};

#[derive(Subcommand)]
pub enum NullCommands {
    /// List null devices
    List,

    /// Get null device details
    Get {
        /// Device ID
        id: String,
    },

    /// Create a null device
    Create(NullArgs),

    /// Update a null device
    Update(NullArgs),

    /// Show I/O counters
    Stats {
        /// Device ID
        id: String,
    },

    /// Delete a null device
    Delete {
        /// Device ID
        id: String,
    },
}

#[derive(Args, Debug, Default)]
pub struct NullArgs {
    /// Device ID
    #[arg(long)]
    pub id: Option<String>,

    /// Block size in bytes
    #[arg(long)]
    pub block_size: Option<u64>,

    /// Number of blocks
    #[arg(long)]
    pub blocks_count: Option<u64>,
}

impl NullArgs {
    pub fn apply(self, mut base: NullDebug) -> NullDebug {
        if let Some(id) = self.id {
            base.id = id;
        }
        if let Some(block_size) = self.block_size {
            base.block_size = block_size;
        }
        if let Some(blocks_count) = self.blocks_count {
            base.blocks_count = blocks_count;
        }
        base
    }
}

impl TableDisplay for NullDebug {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Block Size", "Blocks"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.block_size.to_string(),
            self.blocks_count.to_string(),
        ]
    }
}

pub async fn execute(
    cmd: NullCommands,
    mut client: NullDebugClient,
    defaults: NullDebug,
    format: OutputFormat,
) -> Result<()> {
    let op = match cmd {
        NullCommands::List => ResourceOp::List,
        NullCommands::Get { id } => ResourceOp::Get(id),
        NullCommands::Create(args) => ResourceOp::Create(args.apply(defaults)),
        NullCommands::Update(args) => ResourceOp::Update(args.apply(defaults)),
        NullCommands::Stats { id } => ResourceOp::Stats(id),
        NullCommands::Delete { id } => ResourceOp::Delete(id),
    };
    execute_op(&mut client, op, format).await
}
