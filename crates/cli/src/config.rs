//! CLI configuration

use opi_storage_common::{BackendPlan, DEFAULT_ENDPOINT};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Exerciser configuration, read from `opi-storagectl.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExerciserConfig {
    /// Storage service endpoint
    pub endpoint: String,

    /// Host name of the storage target the remote controller connects to.
    /// Resolved at run time and written into `traddr`.
    pub storage_host: Option<String>,

    /// Resources exercised by the backend run
    pub backend: BackendPlan,
}

impl Default for ExerciserConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            storage_host: None,
            backend: BackendPlan::default(),
        }
    }
}

impl ExerciserConfig {
    /// Load configuration from file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Self = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opi_storage_common::ResourceKind;

    #[test]
    fn test_defaults_match_reference_resources() {
        let config = ExerciserConfig::default();
        assert_eq!(config.endpoint, "http://127.0.0.1:50051");
        assert_eq!(config.backend.nvme.id, "OpiNvme8");
        assert_eq!(config.backend.nvme.trsvcid, 4444);
        assert_eq!(config.backend.null.id, "OpiNull9");
        assert_eq!(config.backend.aio.id, "OpiAio4");
        assert_eq!(config.backend.kinds, ResourceKind::ALL.to_vec());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config: ExerciserConfig = toml::from_str(
            r#"
            storage_host = "spdk"

            [backend]
            parallel = true
            kinds = ["null_device", "aio_device"]

            [backend.aio]
            filename = "/dev/shm/aio"
            "#,
        )
        .unwrap();

        assert_eq!(config.storage_host.as_deref(), Some("spdk"));
        assert!(config.backend.parallel);
        assert_eq!(config.backend.kinds.len(), 2);
        assert_eq!(config.backend.aio.filename, "/dev/shm/aio");
        assert_eq!(config.backend.aio.id, "OpiAio4");
        assert_eq!(config.backend.nvme.id, "OpiNvme8");
    }

    #[test]
    fn test_save_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("opi-storagectl.toml");

        let mut config = ExerciserConfig::default();
        config.backend.nvme.traddr = "203.0.113.5".to_string();
        config.save(&path).unwrap();

        assert_eq!(ExerciserConfig::load(&path).unwrap(), config);
    }
}
