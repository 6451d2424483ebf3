//! Daemon configuration

use opi_storage_common::ResourceSpec;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Daemon configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DaemonConfig {
    /// gRPC listen address
    pub grpc_listen: String,

    /// Resources present at startup
    pub seed: Vec<ResourceSpec>,
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            grpc_listen: "127.0.0.1:50051".to_string(),
            seed: Vec::new(),
        }
    }
}

impl DaemonConfig {
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
    use opi_storage_common::{NullDebug, ResourceKind};

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = DaemonConfig::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.grpc_listen, "127.0.0.1:50051");
        assert!(config.seed.is_empty());
    }

    #[test]
    fn test_save_and_load_seed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("conf").join("storaged.toml");

        let config = DaemonConfig {
            grpc_listen: "0.0.0.0:6000".to_string(),
            seed: vec![ResourceSpec::NullDevice(NullDebug {
                id: "Preloaded".to_string(),
                ..Default::default()
            })],
        };
        config.save(&path).unwrap();

        let loaded = DaemonConfig::load(&path).unwrap();
        assert_eq!(loaded.grpc_listen, "0.0.0.0:6000");
        assert_eq!(loaded.seed.len(), 1);
        assert_eq!(loaded.seed[0].kind(), ResourceKind::NullDevice);
        assert_eq!(loaded.seed[0].id(), "Preloaded");
    }
}
