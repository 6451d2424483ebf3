//! AIO Controller Commands

use anyhow::Result;
use clap::{Args, Subcommand};
use opi_storage_common::client::AioControllerClient;
use opi_storage_common::AioController;

use super::{execute_op, ResourceOp};
use crate::output::{OutputFormat, TableDisplay};

#[derive(Subcommand)]
pub enum AioCommands {
    /// List AIO controllers
    List,

    /// Get AIO controller details
    Get {
        /// Controller ID
        id: String,
    },

    /// Create an AIO controller over a file
    Create(AioArgs),

    /// Update an AIO controller
    Update(AioArgs),

    /// Show I/O counters
    Stats {
        /// Controller ID
        id: String,
    },

    /// Delete an AIO controller
    Delete {
        /// Controller ID
        id: String,
    },
}

#[derive(Args, Debug, Default)]
pub struct AioArgs {
    /// Controller ID
    #[arg(long)]
    pub id: Option<String>,

    /// Backing file path
    #[arg(long)]
    pub filename: Option<String>,

    /// Block size in bytes
    #[arg(long)]
    pub block_size: Option<u64>,

    /// Number of blocks
    #[arg(long)]
    pub blocks_count: Option<u64>,
}

impl AioArgs {
    pub fn apply(self, mut base: AioController) -> AioController {
        if let Some(id) = self.id {
            base.id = id;
        }
        if let Some(filename) = self.filename {
            base.filename = filename;
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

impl TableDisplay for AioController {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "File", "Block Size", "Blocks"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.filename.clone(),
            self.block_size.to_string(),
            self.blocks_count.to_string(),
        ]
    }
}

pub async fn execute(
    cmd: AioCommands,
    mut client: AioControllerClient,
    defaults: AioController,
    format: OutputFormat,
) -> Result<()> {
    let op = match cmd {
        AioCommands::List => ResourceOp::List,
        AioCommands::Get { id } => ResourceOp::Get(id),
        AioCommands::Create(args) => ResourceOp::Create(args.apply(defaults)),
        AioCommands::Update(args) => ResourceOp::Update(args.apply(defaults)),
        AioCommands::Stats { id } => ResourceOp::Stats(id),
        AioCommands::Delete { id } => ResourceOp::Delete(id),
    };
    execute_op(&mut client, op, format).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_override() {
        let args = AioArgs {
            filename: Some("/var/tmp/disk.img".to_string()),
            ..Default::default()
        };
        let controller = args.apply(AioController::default());
        assert_eq!(controller.id, "OpiAio4");
        assert_eq!(controller.filename, "/var/tmp/disk.img");
    }
}
