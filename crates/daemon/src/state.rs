//! State management for the daemon

use opi_storage_common::{
    AioController, InMemoryBackend, NullDebug, NvmeRemoteController, ResourceSpec, Result,
};
use tracing::info;

/// Live resources of every kind served by the daemon
#[derive(Clone, Default)]
pub struct StateManager {
    nvme: InMemoryBackend<NvmeRemoteController>,
    null: InMemoryBackend<NullDebug>,
    aio: InMemoryBackend<AioController>,
}

impl StateManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the given resources, failing on the first duplicate or invalid one
    pub fn seed(&self, specs: &[ResourceSpec]) -> Result<()> {
        for spec in specs {
            match spec.clone() {
                ResourceSpec::RemoteController(c) => {
                    self.nvme.create(c)?;
                }
                ResourceSpec::NullDevice(n) => {
                    self.null.create(n)?;
                }
                ResourceSpec::AioDevice(a) => {
                    self.aio.create(a)?;
                }
            }
            info!("Seeded {} {}", spec.kind(), spec.id());
        }
        Ok(())
    }

    pub fn nvme(&self) -> &InMemoryBackend<NvmeRemoteController> {
        &self.nvme
    }

    pub fn null(&self) -> &InMemoryBackend<NullDebug> {
        &self.null
    }

    pub fn aio(&self) -> &InMemoryBackend<AioController> {
        &self.aio
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opi_storage_common::Error;

    #[test]
    fn test_seed_populates_backends() {
        let state = StateManager::new();
        state
            .seed(&[
                ResourceSpec::RemoteController(NvmeRemoteController::default()),
                ResourceSpec::AioDevice(AioController::default()),
            ])
            .unwrap();

        assert_eq!(state.nvme().len(), 1);
        assert!(state.null().is_empty());
        assert_eq!(state.aio().get("OpiAio4").unwrap().filename, "/tmp/aio_bdev_file");
    }

    #[test]
    fn test_seed_rejects_duplicates() {
        let state = StateManager::new();
        let spec = ResourceSpec::NullDevice(NullDebug::default());
        let err = state.seed(&[spec.clone(), spec]).unwrap_err();
        assert!(matches!(err, Error::AlreadyExists { .. }));
    }
}
