//! NVMe-oF Remote Controller Commands

use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};
use opi_storage_common::client::NvmfRemoteControllerClient;
use opi_storage_common::{NvmeAddressFamily, NvmeRemoteController, NvmeTransportType};

use super::{execute_op, ResourceOp};
use crate::output::{print_success, OutputFormat, TableDisplay};

#[derive(Subcommand)]
pub enum NvmeCommands {
    /// List remote controllers
    List,

    /// Get remote controller details
    Get {
        /// Controller ID
        id: String,
    },

    /// Connect a remote controller
    Create(NvmeArgs),

    /// Update a remote controller
    Update(NvmeArgs),

    /// Show I/O counters
    Stats {
        /// Controller ID
        id: String,
    },

    /// Reset the controller connection
    Reset {
        /// Controller ID
        id: String,
    },

    /// Disconnect a remote controller
    Delete {
        /// Controller ID
        id: String,
    },
}

/// Overrides applied on top of the configured controller
#[derive(Args, Debug, Default)]
pub struct NvmeArgs {
    /// Controller ID
    #[arg(long)]
    pub id: Option<String>,

    /// Transport type
    #[arg(long)]
    pub transport: Option<TransportArg>,

    /// Address family
    #[arg(long)]
    pub adrfam: Option<AddressFamilyArg>,

    /// Transport address
    #[arg(long)]
    pub traddr: Option<String>,

    /// Transport service id
    #[arg(long)]
    pub trsvcid: Option<u16>,

    /// Subsystem NQN
    #[arg(long)]
    pub subnqn: Option<String>,

    /// Host NQN
    #[arg(long)]
    pub hostnqn: Option<String>,
}

impl NvmeArgs {
    pub fn apply(self, mut base: NvmeRemoteController) -> NvmeRemoteController {
        if let Some(id) = self.id {
            base.id = id;
        }
        if let Some(transport) = self.transport {
            base.transport = transport.into();
        }
        if let Some(adrfam) = self.adrfam {
            base.address_family = adrfam.into();
        }
        if let Some(traddr) = self.traddr {
            base.traddr = traddr;
        }
        if let Some(trsvcid) = self.trsvcid {
            base.trsvcid = trsvcid;
        }
        if let Some(subnqn) = self.subnqn {
            base.subnqn = subnqn;
        }
        if let Some(hostnqn) = self.hostnqn {
            base.hostnqn = hostnqn;
        }
        base
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TransportArg {
    Tcp,
    Rdma,
    Pcie,
}

impl From<TransportArg> for NvmeTransportType {
    fn from(arg: TransportArg) -> Self {
        match arg {
            TransportArg::Tcp => NvmeTransportType::Tcp,
            TransportArg::Rdma => NvmeTransportType::Rdma,
            TransportArg::Pcie => NvmeTransportType::Pcie,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum AddressFamilyArg {
    Ipv4,
    Ipv6,
}

impl From<AddressFamilyArg> for NvmeAddressFamily {
    fn from(arg: AddressFamilyArg) -> Self {
        match arg {
            AddressFamilyArg::Ipv4 => NvmeAddressFamily::Ipv4,
            AddressFamilyArg::Ipv6 => NvmeAddressFamily::Ipv6,
        }
    }
}

impl TableDisplay for NvmeRemoteController {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Transport", "Family", "Address", "Port", "Subsystem NQN"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            format!("{:?}", self.transport).to_uppercase(),
            format!("{:?}", self.address_family).to_lowercase(),
            self.traddr.clone(),
            self.trsvcid.to_string(),
            self.subnqn.clone(),
        ]
    }
}

pub async fn execute(
    cmd: NvmeCommands,
    mut client: NvmfRemoteControllerClient,
    defaults: NvmeRemoteController,
    format: OutputFormat,
) -> Result<()> {
    let op = match cmd {
        NvmeCommands::List => ResourceOp::List,
        NvmeCommands::Get { id } => ResourceOp::Get(id),
        NvmeCommands::Create(args) => ResourceOp::Create(args.apply(defaults)),
        NvmeCommands::Update(args) => ResourceOp::Update(args.apply(defaults)),
        NvmeCommands::Stats { id } => ResourceOp::Stats(id),
        NvmeCommands::Delete { id } => ResourceOp::Delete(id),
        NvmeCommands::Reset { id } => {
            client.reset(&id).await?;
            print_success(&format!("Remote controller '{}' reset", id));
            return Ok(());
        }
    };
    execute_op(&mut client, op, format).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_keep_unset_fields() {
        let args = NvmeArgs {
            traddr: Some("198.51.100.7".to_string()),
            adrfam: Some(AddressFamilyArg::Ipv4),
            transport: Some(TransportArg::Rdma),
            ..Default::default()
        };
        let controller = args.apply(NvmeRemoteController::default());

        assert_eq!(controller.id, "OpiNvme8");
        assert_eq!(controller.traddr, "198.51.100.7");
        assert_eq!(controller.transport, NvmeTransportType::Rdma);
        assert_eq!(controller.trsvcid, 4444);
    }

    #[test]
    fn test_table_row() {
        let row = NvmeRemoteController::default().row();
        assert_eq!(row[1], "TCP");
        assert_eq!(row[2], "ipv4");
        assert_eq!(row[4], "4444");
    }
}
