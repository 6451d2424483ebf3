//! Core types for OPI storage resources

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::generated as pb;

/// Which storage service a lifecycle run targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    RemoteController,
    NullDevice,
    AioDevice,
}

impl ResourceKind {
    /// All kinds, in the order the backend run exercises them
    pub const ALL: [ResourceKind; 3] = [
        ResourceKind::RemoteController,
        ResourceKind::NullDevice,
        ResourceKind::AioDevice,
    ];

    /// Short label used in log lines
    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::RemoteController => "NVMf",
            ResourceKind::NullDevice => "Null",
            ResourceKind::AioDevice => "Aio",
        }
    }

    /// Name of the gRPC service serving this kind
    pub fn service_name(&self) -> &'static str {
        match self {
            ResourceKind::RemoteController => "NvmfRemoteControllerService",
            ResourceKind::NullDevice => "NullDebugService",
            ResourceKind::AioDevice => "AioControllerService",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceKind::RemoteController => write!(f, "nvmf_remote_controller"),
            ResourceKind::NullDevice => write!(f, "null_debug"),
            ResourceKind::AioDevice => write!(f, "aio_controller"),
        }
    }
}

impl FromStr for ResourceKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "nvme" | "nvmf" | "remote_controller" | "nvmf_remote_controller" => {
                Ok(ResourceKind::RemoteController)
            }
            "null" | "null_device" | "null_debug" => Ok(ResourceKind::NullDevice),
            "aio" | "aio_device" | "aio_controller" => Ok(ResourceKind::AioDevice),
            other => Err(Error::InvalidArgument(format!(
                "unknown resource kind: {}",
                other
            ))),
        }
    }
}

/// A resource that can be driven through the storage lifecycle
pub trait StorageResource: Clone + Debug + PartialEq + Send + Sync + 'static {
    /// Service this resource belongs to
    const KIND: ResourceKind;

    /// Caller-chosen key addressing the resource after creation
    fn id(&self) -> &str;

    /// Check the fields a create/update request needs.
    fn validate(&self) -> Result<()> {
        if self.id().is_empty() {
            return Err(Error::InvalidArgument(format!(
                "{} id must not be empty",
                Self::KIND
            )));
        }
        Ok(())
    }
}

/// NVMe-oF transport type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NvmeTransportType {
    #[default]
    Tcp,
    Rdma,
    Pcie,
}

/// NVMe-oF address family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NvmeAddressFamily {
    #[default]
    Ipv4,
    Ipv6,
}

/// Connection to a remote NVMe-oF subsystem
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NvmeRemoteController {
    pub id: String,
    pub transport: NvmeTransportType,
    pub address_family: NvmeAddressFamily,
    /// Transport address, usually the storage host IP
    pub traddr: String,
    /// Transport service id (TCP port)
    pub trsvcid: u16,
    pub subnqn: String,
    pub hostnqn: String,
}

impl Default for NvmeRemoteController {
    fn default() -> Self {
        Self {
            id: "OpiNvme8".to_string(),
            transport: NvmeTransportType::Tcp,
            address_family: NvmeAddressFamily::Ipv4,
            traddr: "127.0.0.1".to_string(),
            trsvcid: 4444,
            subnqn: "nqn.2016-06.io.spdk:cnode1".to_string(),
            hostnqn: "nqn.2014-08.org.nvmexpress:uuid:feb98abe-d51f-40c8-b348-2753f3571d3c"
                .to_string(),
        }
    }
}

impl StorageResource for NvmeRemoteController {
    const KIND: ResourceKind = ResourceKind::RemoteController;

    fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Result<()> {
        if self.id.is_empty() {
            return Err(Error::InvalidArgument(
                "remote controller id must not be empty".to_string(),
            ));
        }
        if self.traddr.is_empty() {
            return Err(Error::InvalidArgument("traddr must not be empty".to_string()));
        }
        if self.trsvcid == 0 {
            return Err(Error::InvalidArgument("trsvcid must be non-zero".to_string()));
        }
        if self.subnqn.is_empty() {
            return Err(Error::InvalidArgument("subnqn must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Null block device, discards writes and reads zeroes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NullDebug {
    pub id: String,
    pub block_size: u64,
    pub blocks_count: u64,
}

impl Default for NullDebug {
    fn default() -> Self {
        Self {
            id: "OpiNull9".to_string(),
            block_size: 512,
            blocks_count: 64,
        }
    }
}

impl StorageResource for NullDebug {
    const KIND: ResourceKind = ResourceKind::NullDevice;

    fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Result<()> {
        if self.id.is_empty() {
            return Err(Error::InvalidArgument(
                "null debug id must not be empty".to_string(),
            ));
        }
        wire_count(self.block_size, "block_size")?;
        wire_count(self.blocks_count, "blocks_count")?;
        Ok(())
    }
}

/// Block device backed by a file through Linux AIO
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AioController {
    pub id: String,
    pub filename: String,
    pub block_size: u64,
    pub blocks_count: u64,
}

impl Default for AioController {
    fn default() -> Self {
        Self {
            id: "OpiAio4".to_string(),
            filename: "/tmp/aio_bdev_file".to_string(),
            block_size: 512,
            blocks_count: 64,
        }
    }
}

impl StorageResource for AioController {
    const KIND: ResourceKind = ResourceKind::AioDevice;

    fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Result<()> {
        if self.id.is_empty() {
            return Err(Error::InvalidArgument(
                "aio controller id must not be empty".to_string(),
            ));
        }
        if self.filename.is_empty() {
            return Err(Error::InvalidArgument("filename must not be empty".to_string()));
        }
        wire_count(self.block_size, "block_size")?;
        wire_count(self.blocks_count, "blocks_count")?;
        Ok(())
    }
}

/// I/O counters reported by the Stats call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VolumeStats {
    pub read_bytes_count: u64,
    pub read_ops_count: u64,
    pub write_bytes_count: u64,
    pub write_ops_count: u64,
    pub read_latency_ticks: u64,
    pub write_latency_ticks: u64,
}

/// Creation payload for any resource kind, as found in config files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResourceSpec {
    RemoteController(NvmeRemoteController),
    NullDevice(NullDebug),
    AioDevice(AioController),
}

impl ResourceSpec {
    pub fn kind(&self) -> ResourceKind {
        match self {
            ResourceSpec::RemoteController(_) => ResourceKind::RemoteController,
            ResourceSpec::NullDevice(_) => ResourceKind::NullDevice,
            ResourceSpec::AioDevice(_) => ResourceKind::AioDevice,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            ResourceSpec::RemoteController(r) => r.id(),
            ResourceSpec::NullDevice(r) => r.id(),
            ResourceSpec::AioDevice(r) => r.id(),
        }
    }
}

// ============================================================================
// Proto conversions
// ============================================================================

/// Build an object key for request messages
pub fn object_key(value: &str) -> Option<pb::ObjectKey> {
    Some(pb::ObjectKey {
        value: value.to_string(),
    })
}

fn unkey(key: Option<pb::ObjectKey>, kind: ResourceKind) -> Result<String> {
    key.map(|k| k.value)
        .ok_or_else(|| Error::InvalidResponse(format!("{} without id", kind)))
}

fn non_negative(value: i64, field: &str) -> Result<u64> {
    u64::try_from(value)
        .map_err(|_| Error::InvalidResponse(format!("{} is negative: {}", field, value)))
}

/// Proto carries counts as int64; values above `i64::MAX` are rejected.
fn wire_count(value: u64, field: &str) -> Result<i64> {
    i64::try_from(value)
        .map_err(|_| Error::InvalidArgument(format!("{} out of range: {}", field, value)))
}

impl From<NvmeTransportType> for pb::NvmeTransportType {
    fn from(t: NvmeTransportType) -> Self {
        match t {
            NvmeTransportType::Tcp => pb::NvmeTransportType::Tcp,
            NvmeTransportType::Rdma => pb::NvmeTransportType::Rdma,
            NvmeTransportType::Pcie => pb::NvmeTransportType::Pcie,
        }
    }
}

impl From<NvmeAddressFamily> for pb::NvmeAddressFamily {
    fn from(a: NvmeAddressFamily) -> Self {
        match a {
            NvmeAddressFamily::Ipv4 => pb::NvmeAddressFamily::Ipv4,
            NvmeAddressFamily::Ipv6 => pb::NvmeAddressFamily::Ipv6,
        }
    }
}

impl From<NvmeRemoteController> for pb::NvmfRemoteController {
    fn from(c: NvmeRemoteController) -> Self {
        Self {
            id: object_key(&c.id),
            trtype: pb::NvmeTransportType::from(c.transport) as i32,
            adrfam: pb::NvmeAddressFamily::from(c.address_family) as i32,
            traddr: c.traddr,
            trsvcid: i64::from(c.trsvcid),
            subnqn: c.subnqn,
            hostnqn: c.hostnqn,
        }
    }
}

impl TryFrom<pb::NvmfRemoteController> for NvmeRemoteController {
    type Error = Error;

    fn try_from(c: pb::NvmfRemoteController) -> Result<Self> {
        let transport = match pb::NvmeTransportType::try_from(c.trtype) {
            Ok(pb::NvmeTransportType::Tcp) => NvmeTransportType::Tcp,
            Ok(pb::NvmeTransportType::Rdma) => NvmeTransportType::Rdma,
            Ok(pb::NvmeTransportType::Pcie) => NvmeTransportType::Pcie,
            _ => {
                return Err(Error::InvalidResponse(format!(
                    "unsupported transport type: {}",
                    c.trtype
                )))
            }
        };
        let address_family = match pb::NvmeAddressFamily::try_from(c.adrfam) {
            Ok(pb::NvmeAddressFamily::Ipv4) => NvmeAddressFamily::Ipv4,
            Ok(pb::NvmeAddressFamily::Ipv6) => NvmeAddressFamily::Ipv6,
            _ => {
                return Err(Error::InvalidResponse(format!(
                    "unsupported address family: {}",
                    c.adrfam
                )))
            }
        };
        let trsvcid = u16::try_from(c.trsvcid)
            .map_err(|_| Error::InvalidResponse(format!("trsvcid out of range: {}", c.trsvcid)))?;

        Ok(Self {
            id: unkey(c.id, ResourceKind::RemoteController)?,
            transport,
            address_family,
            traddr: c.traddr,
            trsvcid,
            subnqn: c.subnqn,
            hostnqn: c.hostnqn,
        })
    }
}

impl TryFrom<NullDebug> for pb::NullDebug {
    type Error = Error;

    fn try_from(n: NullDebug) -> Result<Self> {
        Ok(Self {
            handle: object_key(&n.id),
            block_size: wire_count(n.block_size, "block_size")?,
            blocks_count: wire_count(n.blocks_count, "blocks_count")?,
        })
    }
}

impl TryFrom<pb::NullDebug> for NullDebug {
    type Error = Error;

    fn try_from(n: pb::NullDebug) -> Result<Self> {
        Ok(Self {
            id: unkey(n.handle, ResourceKind::NullDevice)?,
            block_size: non_negative(n.block_size, "block_size")?,
            blocks_count: non_negative(n.blocks_count, "blocks_count")?,
        })
    }
}

impl TryFrom<AioController> for pb::AioController {
    type Error = Error;

    fn try_from(a: AioController) -> Result<Self> {
        Ok(Self {
            handle: object_key(&a.id),
            block_size: wire_count(a.block_size, "block_size")?,
            blocks_count: wire_count(a.blocks_count, "blocks_count")?,
            filename: a.filename,
        })
    }
}

impl TryFrom<pb::AioController> for AioController {
    type Error = Error;

    fn try_from(a: pb::AioController) -> Result<Self> {
        Ok(Self {
            id: unkey(a.handle, ResourceKind::AioDevice)?,
            filename: a.filename,
            block_size: non_negative(a.block_size, "block_size")?,
            blocks_count: non_negative(a.blocks_count, "blocks_count")?,
        })
    }
}

impl TryFrom<VolumeStats> for pb::VolumeStats {
    type Error = Error;

    fn try_from(s: VolumeStats) -> Result<Self> {
        Ok(Self {
            read_bytes_count: wire_count(s.read_bytes_count, "read_bytes_count")?,
            read_ops_count: wire_count(s.read_ops_count, "read_ops_count")?,
            write_bytes_count: wire_count(s.write_bytes_count, "write_bytes_count")?,
            write_ops_count: wire_count(s.write_ops_count, "write_ops_count")?,
            read_latency_ticks: wire_count(s.read_latency_ticks, "read_latency_ticks")?,
            write_latency_ticks: wire_count(s.write_latency_ticks, "write_latency_ticks")?,
        })
    }
}

impl TryFrom<pb::VolumeStats> for VolumeStats {
    type Error = Error;

    fn try_from(s: pb::VolumeStats) -> Result<Self> {
        Ok(Self {
            read_bytes_count: non_negative(s.read_bytes_count, "read_bytes_count")?,
            read_ops_count: non_negative(s.read_ops_count, "read_ops_count")?,
            write_bytes_count: non_negative(s.write_bytes_count, "write_bytes_count")?,
            write_ops_count: non_negative(s.write_ops_count, "write_ops_count")?,
            read_latency_ticks: non_negative(s.read_latency_ticks, "read_latency_ticks")?,
            write_latency_ticks: non_negative(s.write_latency_ticks, "write_latency_ticks")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parsing() {
        assert_eq!("nvme".parse::<ResourceKind>().unwrap(), ResourceKind::RemoteController);
        assert_eq!("NULL".parse::<ResourceKind>().unwrap(), ResourceKind::NullDevice);
        assert_eq!("aio_controller".parse::<ResourceKind>().unwrap(), ResourceKind::AioDevice);
        assert!("iscsi".parse::<ResourceKind>().is_err());
    }

    #[test]
    fn test_validation_rejects_empty_fields() {
        let nvme = NvmeRemoteController {
            id: String::new(),
            ..Default::default()
        };
        assert!(matches!(nvme.validate(), Err(Error::InvalidArgument(_))));

        let aio = AioController {
            filename: String::new(),
            ..Default::default()
        };
        assert!(matches!(aio.validate(), Err(Error::InvalidArgument(_))));

        assert!(NullDebug::default().validate().is_ok());
    }

    #[test]
    fn test_proto_conversion_keeps_id_and_transport() {
        let controller = NvmeRemoteController {
            traddr: "203.0.113.5".to_string(),
            transport: NvmeTransportType::Rdma,
            ..Default::default()
        };
        let wire = pb::NvmfRemoteController::from(controller.clone());
        assert_eq!(wire.id.as_ref().map(|k| k.value.as_str()), Some("OpiNvme8"));
        assert_eq!(wire.trsvcid, 4444);

        let back = NvmeRemoteController::try_from(wire).unwrap();
        assert_eq!(back, controller);
    }

    #[test]
    fn test_proto_without_handle_is_invalid() {
        let wire = pb::NullDebug {
            handle: None,
            block_size: 512,
            blocks_count: 1,
        };
        assert!(matches!(
            NullDebug::try_from(wire),
            Err(Error::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_unspecified_transport_is_invalid_response() {
        let mut wire = pb::NvmfRemoteController::from(NvmeRemoteController::default());
        wire.trtype = 0;
        assert_eq!(
            NvmeRemoteController::try_from(wire),
            Err(Error::InvalidResponse("unsupported transport type: 0".to_string()))
        );

        let mut wire = pb::NvmfRemoteController::from(NvmeRemoteController::default());
        wire.trsvcid = 70000;
        assert!(matches!(
            NvmeRemoteController::try_from(wire),
            Err(Error::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_counts_at_int64_boundary() {
        let largest = NullDebug {
            block_size: i64::MAX as u64,
            ..Default::default()
        };
        let wire = pb::NullDebug::try_from(largest.clone()).unwrap();
        assert_eq!(wire.block_size, i64::MAX);
        assert_eq!(NullDebug::try_from(wire).unwrap(), largest);

        let too_large = NullDebug {
            block_size: u64::MAX,
            ..Default::default()
        };
        let expected = Error::InvalidArgument(format!("block_size out of range: {}", u64::MAX));
        assert_eq!(pb::NullDebug::try_from(too_large.clone()), Err(expected.clone()));
        assert_eq!(too_large.validate(), Err(expected));

        let aio = AioController {
            blocks_count: u64::MAX,
            ..Default::default()
        };
        assert!(pb::AioController::try_from(aio.clone()).is_err());
        assert!(aio.validate().is_err());

        let stats = VolumeStats {
            read_bytes_count: u64::MAX,
            ..Default::default()
        };
        assert!(pb::VolumeStats::try_from(stats).is_err());
    }

    #[test]
    fn test_resource_spec_toml_tagging() {
        let spec: ResourceSpec = toml::from_str(
            r#"
            kind = "aio_device"
            id = "OpiAio7"
            filename = "/var/tmp/aio"
            "#,
        )
        .unwrap();
        assert_eq!(spec.kind(), ResourceKind::AioDevice);
        assert_eq!(spec.id(), "OpiAio7");
        match spec {
            ResourceSpec::AioDevice(a) => assert_eq!(a.block_size, 512),
            other => panic!("unexpected spec: {:?}", other),
        }
    }
}
