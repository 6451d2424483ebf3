//! In-memory storage backend
//!
//! Emulates the service contract of the storage services: duplicate ids are
//! rejected on create, unknown ids yield `NotFound`. Used by the simulated
//! daemon and as the default behavior of the test double.

use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

use crate::error::{Error, Result};
use crate::lifecycle::LifecycleClient;
use crate::types::{StorageResource, VolumeStats};

/// Bytes accounted per synthetic read
const READ_UNIT_BYTES: u64 = 4096;

#[derive(Debug, Clone)]
struct Entry<R> {
    resource: R,
    stats: VolumeStats,
}

/// Thread-safe map of live resources of one kind
#[derive(Debug, Clone)]
pub struct InMemoryBackend<R> {
    entries: Arc<RwLock<BTreeMap<String, Entry<R>>>>,
}

impl<R: StorageResource> Default for InMemoryBackend<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: StorageResource> InMemoryBackend<R> {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }

    fn not_found(id: &str) -> Error {
        Error::NotFound {
            kind: R::KIND,
            id: id.to_string(),
        }
    }

    pub fn create(&self, resource: R) -> Result<R> {
        resource.validate()?;
        let mut entries = self.entries.write();
        if entries.contains_key(resource.id()) {
            return Err(Error::AlreadyExists {
                kind: R::KIND,
                id: resource.id().to_string(),
            });
        }
        debug!("create {} {}", R::KIND, resource.id());
        entries.insert(
            resource.id().to_string(),
            Entry {
                resource: resource.clone(),
                stats: VolumeStats::default(),
            },
        );
        Ok(resource)
    }

    pub fn update(&self, resource: R) -> Result<R> {
        resource.validate()?;
        let mut entries = self.entries.write();
        let entry = entries
            .get_mut(resource.id())
            .ok_or_else(|| Self::not_found(resource.id()))?;
        debug!("update {} {}", R::KIND, resource.id());
        entry.resource = resource.clone();
        Ok(resource)
    }

    /// All live resources, ordered by id
    pub fn list(&self) -> Vec<R> {
        self.entries
            .read()
            .values()
            .map(|e| e.resource.clone())
            .collect()
    }

    /// Fetch a resource. Each fetch is accounted as one read.
    pub fn get(&self, id: &str) -> Result<R> {
        let mut entries = self.entries.write();
        let entry = entries.get_mut(id).ok_or_else(|| Self::not_found(id))?;
        entry.stats.read_ops_count += 1;
        entry.stats.read_bytes_count += READ_UNIT_BYTES;
        entry.stats.read_latency_ticks += 1;
        Ok(entry.resource.clone())
    }

    pub fn stats(&self, id: &str) -> Result<VolumeStats> {
        self.entries
            .read()
            .get(id)
            .map(|e| e.stats)
            .ok_or_else(|| Self::not_found(id))
    }

    /// Zero the counters of a resource
    pub fn reset(&self, id: &str) -> Result<()> {
        let mut entries = self.entries.write();
        let entry = entries.get_mut(id).ok_or_else(|| Self::not_found(id))?;
        entry.stats = VolumeStats::default();
        Ok(())
    }

    pub fn delete(&self, id: &str) -> Result<()> {
        debug!("delete {} {}", R::KIND, id);
        self.entries
            .write()
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| Self::not_found(id))
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

/// Lifecycle client talking straight to an in-memory backend
#[derive(Debug, Clone)]
pub struct InMemoryClient<R> {
    backend: InMemoryBackend<R>,
}

impl<R: StorageResource> InMemoryClient<R> {
    pub fn new(backend: InMemoryBackend<R>) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &InMemoryBackend<R> {
        &self.backend
    }
}

#[async_trait::async_trait]
impl<R: StorageResource> LifecycleClient<R> for InMemoryClient<R> {
    async fn create(&mut self, resource: R) -> Result<R> {
        self.backend.create(resource)
    }

    async fn update(&mut self, resource: R) -> Result<R> {
        self.backend.update(resource)
    }

    async fn list(&mut self) -> Result<Vec<R>> {
        Ok(self.backend.list())
    }

    async fn get(&mut self, id: &str) -> Result<R> {
        self.backend.get(id)
    }

    async fn stats(&mut self, id: &str) -> Result<VolumeStats> {
        self.backend.stats(id)
    }

    async fn delete(&mut self, id: &str) -> Result<()> {
        self.backend.delete(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AioController, NullDebug, ResourceKind};

    #[test]
    fn test_duplicate_create_rejected() {
        let backend = InMemoryBackend::<NullDebug>::new();
        backend.create(NullDebug::default()).unwrap();
        let err = backend.create(NullDebug::default()).unwrap_err();
        assert_eq!(
            err,
            Error::AlreadyExists {
                kind: ResourceKind::NullDevice,
                id: "OpiNull9".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_ids_not_found() {
        let backend = InMemoryBackend::<AioController>::new();
        assert!(backend.get("missing").unwrap_err().is_not_found());
        assert!(backend.stats("missing").unwrap_err().is_not_found());
        assert!(backend.delete("missing").unwrap_err().is_not_found());
        assert!(backend.reset("missing").unwrap_err().is_not_found());
        assert!(backend
            .update(AioController::default())
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn test_invalid_spec_rejected_before_insert() {
        let backend = InMemoryBackend::<AioController>::new();
        let bad = AioController {
            filename: String::new(),
            ..Default::default()
        };
        assert!(matches!(backend.create(bad), Err(Error::InvalidArgument(_))));
        assert!(backend.is_empty());
    }

    #[test]
    fn test_reads_show_up_in_stats_until_reset() {
        let backend = InMemoryBackend::<NullDebug>::new();
        backend.create(NullDebug::default()).unwrap();
        backend.get("OpiNull9").unwrap();
        backend.get("OpiNull9").unwrap();

        let stats = backend.stats("OpiNull9").unwrap();
        assert_eq!(stats.read_ops_count, 2);
        assert_eq!(stats.read_bytes_count, 2 * READ_UNIT_BYTES);
        assert_eq!(stats.write_ops_count, 0);

        backend.reset("OpiNull9").unwrap();
        assert_eq!(backend.stats("OpiNull9").unwrap(), VolumeStats::default());
    }

    #[test]
    fn test_list_is_ordered_by_id() {
        let backend = InMemoryBackend::<NullDebug>::new();
        for id in ["b", "c", "a"] {
            backend
                .create(NullDebug {
                    id: id.to_string(),
                    ..Default::default()
                })
                .unwrap();
        }
        let ids: Vec<String> = backend.list().into_iter().map(|n| n.id).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }
}
