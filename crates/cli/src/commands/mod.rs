//! CLI Commands

pub mod aio;
pub mod backend;
pub mod null;
pub mod nvme;

use anyhow::Result;
use opi_storage_common::{LifecycleClient, StorageResource, VolumeStats};
use serde::Serialize;

use crate::output::{print_item, print_list, print_success, OutputFormat, TableDisplay};

/// A single storage operation against one resource kind
#[derive(Debug, Clone, PartialEq)]
pub enum ResourceOp<R> {
    Create(R),
    Update(R),
    List,
    Get(String),
    Stats(String),
    Delete(String),
}

/// Counters display wrapper for serialization
#[derive(Debug, Serialize)]
pub struct StatsDisplay {
    pub id: String,
    #[serde(flatten)]
    pub stats: VolumeStats,
}

impl TableDisplay for StatsDisplay {
    fn headers() -> Vec<&'static str> {
        vec![
            "ID",
            "Read Bytes",
            "Read Ops",
            "Write Bytes",
            "Write Ops",
            "Read Latency",
            "Write Latency",
        ]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.stats.read_bytes_count.to_string(),
            self.stats.read_ops_count.to_string(),
            self.stats.write_bytes_count.to_string(),
            self.stats.write_ops_count.to_string(),
            self.stats.read_latency_ticks.to_string(),
            self.stats.write_latency_ticks.to_string(),
        ]
    }
}

/// Run one operation and print its response
pub async fn execute_op<R, C>(client: &mut C, op: ResourceOp<R>, format: OutputFormat) -> Result<()>
where
    R: StorageResource + Serialize + TableDisplay,
    C: LifecycleClient<R> + ?Sized,
{
    let kind = R::KIND;
    match op {
        ResourceOp::Create(resource) => {
            let created = client.create(resource).await?;
            print_success(&format!("{} '{}' created", kind, created.id()));
            print_item(&created, format);
        }
        ResourceOp::Update(resource) => {
            let updated = client.update(resource).await?;
            print_success(&format!("{} '{}' updated", kind, updated.id()));
            print_item(&updated, format);
        }
        ResourceOp::List => {
            let items = client.list().await?;
            print_list(&items, format);
        }
        ResourceOp::Get(id) => {
            let item = client.get(&id).await?;
            print_item(&item, format);
        }
        ResourceOp::Stats(id) => {
            let stats = client.stats(&id).await?;
            print_item(&StatsDisplay { id, stats }, format);
        }
        ResourceOp::Delete(id) => {
            client.delete(&id).await?;
            print_success(&format!("{} '{}' deleted", kind, id));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use opi_storage_common::testing::RecordingClient;
    use opi_storage_common::{LifecycleStep, NullDebug};

    #[tokio::test]
    async fn test_each_op_is_one_call() {
        let mut client = RecordingClient::<NullDebug>::new();
        let format = OutputFormat::Json;

        execute_op(&mut client, ResourceOp::Create(NullDebug::default()), format)
            .await
            .unwrap();
        execute_op(&mut client, ResourceOp::<NullDebug>::Stats("OpiNull9".into()), format)
            .await
            .unwrap();
        execute_op(&mut client, ResourceOp::<NullDebug>::Delete("OpiNull9".into()), format)
            .await
            .unwrap();

        assert_eq!(
            client.steps(),
            vec![LifecycleStep::Create, LifecycleStep::Stats, LifecycleStep::Delete]
        );
    }

    #[tokio::test]
    async fn test_errors_propagate() {
        let mut client = RecordingClient::<NullDebug>::new();
        let err = execute_op(
            &mut client,
            ResourceOp::<NullDebug>::Get("missing".into()),
            OutputFormat::Plain,
        )
        .await
        .unwrap_err();
        let err = err.downcast::<opi_storage_common::Error>().unwrap();
        assert!(err.is_not_found());
    }
}
