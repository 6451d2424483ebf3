//! Resource lifecycle exerciser
//!
//! Drives one resource through the fixed sequence
//! Create -> Update -> List -> Get -> Stats -> Delete against a single
//! storage service, stopping at the first failure. Every step is exactly one
//! remote call; nothing is retried, cached or rolled back.

use serde::Serialize;
use std::future::Future;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::types::{ResourceKind, StorageResource, VolumeStats};

/// The six operations every storage service exposes for one resource kind
#[async_trait::async_trait]
pub trait LifecycleClient<R: StorageResource>: Send {
    /// Create a new resource
    async fn create(&mut self, resource: R) -> Result<R>;

    /// Resubmit a resource under its existing id
    async fn update(&mut self, resource: R) -> Result<R>;

    /// List all resources of this kind
    async fn list(&mut self) -> Result<Vec<R>>;

    /// Fetch a resource by id
    async fn get(&mut self, id: &str) -> Result<R>;

    /// Read I/O counters for a resource
    async fn stats(&mut self, id: &str) -> Result<VolumeStats>;

    /// Delete a resource
    async fn delete(&mut self, id: &str) -> Result<()>;
}

/// One step of the lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleStep {
    Create,
    Update,
    List,
    Get,
    Stats,
    Delete,
}

impl LifecycleStep {
    /// Steps in execution order
    pub const ALL: [LifecycleStep; 6] = [
        LifecycleStep::Create,
        LifecycleStep::Update,
        LifecycleStep::List,
        LifecycleStep::Get,
        LifecycleStep::Stats,
        LifecycleStep::Delete,
    ];
}

impl std::fmt::Display for LifecycleStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LifecycleStep::Create => write!(f, "create"),
            LifecycleStep::Update => write!(f, "update"),
            LifecycleStep::List => write!(f, "list"),
            LifecycleStep::Get => write!(f, "get"),
            LifecycleStep::Stats => write!(f, "stats"),
            LifecycleStep::Delete => write!(f, "delete"),
        }
    }
}

/// Lifecycle state of one resource instance within a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleState {
    #[default]
    Unstarted,
    Created,
    Updated,
    Listed,
    Fetched,
    StatsRead,
    Deleted,
    Failed(LifecycleStep),
}

impl LifecycleState {
    /// The step allowed from this state, if any
    pub fn next_step(&self) -> Option<LifecycleStep> {
        match self {
            LifecycleState::Unstarted => Some(LifecycleStep::Create),
            LifecycleState::Created => Some(LifecycleStep::Update),
            LifecycleState::Updated => Some(LifecycleStep::List),
            LifecycleState::Listed => Some(LifecycleStep::Get),
            LifecycleState::Fetched => Some(LifecycleStep::Stats),
            LifecycleState::StatsRead => Some(LifecycleStep::Delete),
            LifecycleState::Deleted | LifecycleState::Failed(_) => None,
        }
    }

    /// State reached after `step` succeeds. Out-of-order steps are rejected.
    pub fn advance(self, step: LifecycleStep) -> Result<Self> {
        if self.next_step() != Some(step) {
            return Err(Error::InvalidArgument(format!(
                "cannot {} from state {:?}",
                step, self
            )));
        }
        Ok(match step {
            LifecycleStep::Create => LifecycleState::Created,
            LifecycleStep::Update => LifecycleState::Updated,
            LifecycleStep::List => LifecycleState::Listed,
            LifecycleStep::Get => LifecycleState::Fetched,
            LifecycleStep::Stats => LifecycleState::StatsRead,
            LifecycleStep::Delete => LifecycleState::Deleted,
        })
    }

    pub fn is_terminal(&self) -> bool {
        self.next_step().is_none()
    }
}

/// Responses collected from one lifecycle run
#[derive(Debug, Clone)]
pub struct LifecycleResult<R> {
    pub id: String,
    pub created: Option<R>,
    pub updated: Option<R>,
    pub listed: Option<Vec<R>>,
    pub fetched: Option<R>,
    pub stats: Option<VolumeStats>,
    pub deleted: bool,
    state: LifecycleState,
}

impl<R: StorageResource> LifecycleResult<R> {
    fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            created: None,
            updated: None,
            listed: None,
            fetched: None,
            stats: None,
            deleted: false,
            state: LifecycleState::Unstarted,
        }
    }

    pub fn kind(&self) -> ResourceKind {
        R::KIND
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// Steps that completed successfully, in order
    pub fn completed_steps(&self) -> Vec<LifecycleStep> {
        let done = [
            self.created.is_some(),
            self.updated.is_some(),
            self.listed.is_some(),
            self.fetched.is_some(),
            self.stats.is_some(),
            self.deleted,
        ];
        LifecycleStep::ALL
            .into_iter()
            .zip(done)
            .filter_map(|(step, ok)| ok.then_some(step))
            .collect()
    }

    /// Whether the List snapshot contained the resource
    pub fn listed_self(&self) -> Option<bool> {
        self.listed
            .as_ref()
            .map(|items| items.iter().any(|r| r.id() == self.id))
    }

    /// Kind-erased view for reports
    pub fn summary(&self) -> LifecycleSummary {
        LifecycleSummary {
            kind: R::KIND,
            id: self.id.clone(),
            state: self.state,
            completed: self.completed_steps(),
            listed_count: self.listed.as_ref().map(Vec::len),
            stats: self.stats,
            error: None,
        }
    }

    fn complete(mut self, step: LifecycleStep) -> std::result::Result<Self, LifecycleFailure<R>> {
        match self.state.advance(step) {
            Ok(next) => {
                self.state = next;
                Ok(self)
            }
            Err(error) => Err(self.fail(step, error)),
        }
    }

    fn fail(mut self, step: LifecycleStep, error: Error) -> LifecycleFailure<R> {
        warn!("{} {}: {} failed: {}", R::KIND.label(), self.id, step, error);
        self.state = LifecycleState::Failed(step);
        LifecycleFailure {
            step,
            error,
            partial: self,
        }
    }
}

/// Kind-erased outcome of a lifecycle run
#[derive(Debug, Clone, Serialize)]
pub struct LifecycleSummary {
    pub kind: ResourceKind,
    pub id: String,
    pub state: LifecycleState,
    pub completed: Vec<LifecycleStep>,
    pub listed_count: Option<usize>,
    pub stats: Option<VolumeStats>,
    pub error: Option<String>,
}

impl LifecycleSummary {
    pub fn is_success(&self) -> bool {
        self.state == LifecycleState::Deleted
    }
}

/// A lifecycle run that stopped at a failing step
#[derive(Debug)]
pub struct LifecycleFailure<R> {
    pub step: LifecycleStep,
    pub error: Error,
    /// Responses of every step that completed before the failure
    pub partial: LifecycleResult<R>,
}

impl<R: StorageResource> LifecycleFailure<R> {
    pub fn summary(&self) -> LifecycleSummary {
        LifecycleSummary {
            error: Some(self.error.to_string()),
            ..self.partial.summary()
        }
    }
}

impl<R: StorageResource> std::fmt::Display for LifecycleFailure<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}: {} failed: {}",
            R::KIND,
            self.partial.id,
            self.step,
            self.error
        )
    }
}

impl<R: StorageResource> std::error::Error for LifecycleFailure<R> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Race one remote call against cancellation.
async fn guarded<T>(
    cancel: &CancellationToken,
    call: impl Future<Output = Result<T>>,
) -> Result<T> {
    if cancel.is_cancelled() {
        return Err(Error::Cancelled);
    }
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(Error::Cancelled),
        result = call => result,
    }
}

/// Run the full lifecycle, resubmitting `spec` unchanged for the Update step.
pub async fn run_lifecycle<R, C>(
    client: &mut C,
    spec: R,
    cancel: &CancellationToken,
) -> std::result::Result<LifecycleResult<R>, LifecycleFailure<R>>
where
    R: StorageResource,
    C: LifecycleClient<R> + ?Sized,
{
    let update = spec.clone();
    run_lifecycle_with(client, spec, update, cancel).await
}

/// Run the full lifecycle with a separate payload for the Update step.
///
/// `update` must carry the same id as `spec`; ids never change mid-run.
pub async fn run_lifecycle_with<R, C>(
    client: &mut C,
    spec: R,
    update: R,
    cancel: &CancellationToken,
) -> std::result::Result<LifecycleResult<R>, LifecycleFailure<R>>
where
    R: StorageResource,
    C: LifecycleClient<R> + ?Sized,
{
    let label = R::KIND.label();
    let mut run = LifecycleResult::<R>::new(spec.id());
    let id = run.id.clone();

    info!("=======================================");
    info!("Testing {}", R::KIND.service_name());
    info!("=======================================");

    if id.is_empty() {
        let error = Error::InvalidArgument(format!("{} id must not be empty", R::KIND));
        return Err(run.fail(LifecycleStep::Create, error));
    }

    // Create
    match guarded(cancel, client.create(spec)).await {
        Ok(created) => {
            info!("Created {}: {:?}", label, created);
            run.created = Some(created);
            run = run.complete(LifecycleStep::Create)?;
        }
        Err(e) => return Err(run.fail(LifecycleStep::Create, e)),
    }

    // Update
    if update.id() != id {
        let error = Error::InvalidArgument(format!(
            "update id {} does not match {}",
            update.id(),
            id
        ));
        return Err(run.fail(LifecycleStep::Update, error));
    }
    match guarded(cancel, client.update(update)).await {
        Ok(updated) => {
            info!("Updated {}: {:?}", label, updated);
            run.updated = Some(updated);
            run = run.complete(LifecycleStep::Update)?;
        }
        Err(e) => return Err(run.fail(LifecycleStep::Update, e)),
    }

    // List
    match guarded(cancel, client.list()).await {
        Ok(listed) => {
            info!("Listed {}: {} item(s)", label, listed.len());
            debug!("Listed {}: {:?}", label, listed);
            if !listed.iter().any(|r| r.id() == id) {
                warn!("Listed {} does not include {}", label, id);
            }
            run.listed = Some(listed);
            run = run.complete(LifecycleStep::List)?;
        }
        Err(e) => return Err(run.fail(LifecycleStep::List, e)),
    }

    // Get
    match guarded(cancel, client.get(&id)).await {
        Ok(fetched) if fetched.id() != id => {
            let error = Error::InvalidResponse(format!(
                "get {} returned {}",
                id,
                fetched.id()
            ));
            return Err(run.fail(LifecycleStep::Get, error));
        }
        Ok(fetched) => {
            info!("Got {}: {}", label, fetched.id());
            run.fetched = Some(fetched);
            run = run.complete(LifecycleStep::Get)?;
        }
        Err(e) => return Err(run.fail(LifecycleStep::Get, e)),
    }

    // Stats
    match guarded(cancel, client.stats(&id)).await {
        Ok(stats) => {
            info!("Stats {}: {:?}", label, stats);
            run.stats = Some(stats);
            run = run.complete(LifecycleStep::Stats)?;
        }
        Err(e) => return Err(run.fail(LifecycleStep::Stats, e)),
    }

    // Delete
    match guarded(cancel, client.delete(&id)).await {
        Ok(()) => {
            info!("Deleted {}: {:?}", label, run.created);
            run.deleted = true;
            run = run.complete(LifecycleStep::Delete)?;
        }
        Err(e) => return Err(run.fail(LifecycleStep::Delete, e)),
    }

    Ok(run)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{InMemoryBackend, InMemoryClient};
    use crate::testing::{RecordingClient, Reply};
    use crate::types::{AioController, NullDebug, NvmeRemoteController};

    fn nvme_spec() -> NvmeRemoteController {
        NvmeRemoteController {
            id: "OpiNvme8".to_string(),
            traddr: "203.0.113.5".to_string(),
            trsvcid: 4444,
            subnqn: "nqn.2016-06.io.spdk:cnode1".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_out_of_order_step_fails_the_run() {
        let run = LifecycleResult::<NullDebug>::new("OpiNull9")
            .complete(LifecycleStep::Create)
            .unwrap();
        assert_eq!(run.state(), LifecycleState::Created);

        let failure = run.complete(LifecycleStep::Get).unwrap_err();
        assert_eq!(failure.step, LifecycleStep::Get);
        assert!(matches!(failure.error, Error::InvalidArgument(_)));
        assert_eq!(
            failure.partial.state(),
            LifecycleState::Failed(LifecycleStep::Get)
        );
    }

    #[test]
    fn test_state_machine_order() {
        let mut state = LifecycleState::Unstarted;
        for step in LifecycleStep::ALL {
            state = state.advance(step).unwrap();
        }
        assert_eq!(state, LifecycleState::Deleted);
        assert!(state.is_terminal());

        // No skipping
        assert!(LifecycleState::Created.advance(LifecycleStep::Get).is_err());
        assert!(LifecycleState::Failed(LifecycleStep::List)
            .advance(LifecycleStep::Get)
            .is_err());
    }

    #[tokio::test]
    async fn test_full_lifecycle_every_kind() {
        let cancel = CancellationToken::new();

        let mut nvme = RecordingClient::<NvmeRemoteController>::new();
        let run = run_lifecycle(&mut nvme, nvme_spec(), &cancel).await.unwrap();
        assert_eq!(run.state(), LifecycleState::Deleted);
        assert_eq!(run.completed_steps(), LifecycleStep::ALL.to_vec());
        assert_eq!(run.created.as_ref().unwrap().id, "OpiNvme8");
        assert_eq!(run.fetched.as_ref().unwrap().id, "OpiNvme8");
        assert_eq!(run.listed_self(), Some(true));
        assert_eq!(nvme.steps(), LifecycleStep::ALL.to_vec());

        let mut null = RecordingClient::<NullDebug>::new();
        let run = run_lifecycle(&mut null, NullDebug::default(), &cancel)
            .await
            .unwrap();
        assert_eq!(run.fetched.unwrap().id, "OpiNull9");
        assert!(run.deleted);

        let mut aio = RecordingClient::<AioController>::new();
        let run = run_lifecycle(&mut aio, AioController::default(), &cancel)
            .await
            .unwrap();
        assert_eq!(run.kind(), ResourceKind::AioDevice);
        assert_eq!(run.fetched.unwrap().filename, "/tmp/aio_bdev_file");
    }

    #[tokio::test]
    async fn test_create_failure_stops_everything() {
        let cancel = CancellationToken::new();
        let mut client = RecordingClient::<NullDebug>::new();
        client.program(
            LifecycleStep::Create,
            Reply::Fail(Error::InvalidArgument("bad spec".to_string())),
        );

        let failure = run_lifecycle(&mut client, NullDebug::default(), &cancel)
            .await
            .unwrap_err();
        assert_eq!(failure.step, LifecycleStep::Create);
        assert_eq!(failure.partial.state(), LifecycleState::Failed(LifecycleStep::Create));
        assert!(failure.partial.completed_steps().is_empty());

        assert_eq!(client.count(LifecycleStep::Create), 1);
        for step in &LifecycleStep::ALL[1..] {
            assert_eq!(client.count(*step), 0, "{} should not be called", step);
        }
    }

    #[tokio::test]
    async fn test_duplicate_create_aborts_after_first_step() {
        let cancel = CancellationToken::new();
        let backend = InMemoryBackend::<AioController>::new();
        backend.create(AioController::default()).unwrap();

        let mut client = RecordingClient::with_backend(backend.clone());
        let failure = run_lifecycle(&mut client, AioController::default(), &cancel)
            .await
            .unwrap_err();

        assert_eq!(failure.step, LifecycleStep::Create);
        assert!(failure.error.is_already_exists());
        assert_eq!(client.steps(), vec![LifecycleStep::Create]);
        // The pre-existing resource is left alone
        assert_eq!(backend.len(), 1);
    }

    #[tokio::test]
    async fn test_get_after_delete_is_not_found() {
        let cancel = CancellationToken::new();
        let backend = InMemoryBackend::<NvmeRemoteController>::new();
        let mut client = InMemoryClient::new(backend.clone());

        run_lifecycle(&mut client, nvme_spec(), &cancel).await.unwrap();

        let err = client.get("OpiNvme8").await.unwrap_err();
        assert_eq!(
            err,
            Error::NotFound {
                kind: ResourceKind::RemoteController,
                id: "OpiNvme8".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_rerun_after_delete_succeeds() {
        let cancel = CancellationToken::new();
        let mut client = InMemoryClient::new(InMemoryBackend::<NullDebug>::new());

        run_lifecycle(&mut client, NullDebug::default(), &cancel)
            .await
            .unwrap();
        let second = run_lifecycle(&mut client, NullDebug::default(), &cancel)
            .await
            .unwrap();
        assert_eq!(second.state(), LifecycleState::Deleted);
    }

    #[tokio::test]
    async fn test_mid_run_failure_keeps_partial_results() {
        let cancel = CancellationToken::new();
        let backend = InMemoryBackend::<NullDebug>::new();
        let mut client = RecordingClient::with_backend(backend.clone());
        client.program(
            LifecycleStep::Stats,
            Reply::Fail(Error::Transport("connection reset".to_string())),
        );

        let failure = run_lifecycle(&mut client, NullDebug::default(), &cancel)
            .await
            .unwrap_err();
        assert_eq!(failure.step, LifecycleStep::Stats);
        assert_eq!(failure.error, Error::Transport("connection reset".to_string()));
        assert_eq!(
            failure.partial.completed_steps(),
            vec![
                LifecycleStep::Create,
                LifecycleStep::Update,
                LifecycleStep::List,
                LifecycleStep::Get
            ]
        );
        assert_eq!(client.count(LifecycleStep::Delete), 0);
        // No compensation: the resource is still there
        assert!(backend.get("OpiNull9").is_ok());

        let summary = failure.summary();
        assert_eq!(summary.state, LifecycleState::Failed(LifecycleStep::Stats));
        assert!(summary.error.unwrap().contains("connection reset"));
    }

    #[tokio::test]
    async fn test_cancel_before_stats_never_reaches_delete() {
        let cancel = CancellationToken::new();
        let mut client = RecordingClient::<NvmeRemoteController>::new();
        client.program(LifecycleStep::Get, Reply::PassThenCancel(cancel.clone()));

        let failure = run_lifecycle(&mut client, nvme_spec(), &cancel)
            .await
            .unwrap_err();
        assert_eq!(failure.step, LifecycleStep::Stats);
        assert_eq!(failure.error, Error::Cancelled);
        assert_eq!(client.count(LifecycleStep::Stats), 0);
        assert_eq!(client.count(LifecycleStep::Delete), 0);
    }

    #[tokio::test]
    async fn test_cancel_in_flight_step_fails_promptly() {
        let cancel = CancellationToken::new();
        let mut client = RecordingClient::<AioController>::new();
        client.program(LifecycleStep::Stats, Reply::Hang);

        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(std::time::Duration::from_millis(20)).await;
            trigger.cancel();
        });

        let failure = tokio::time::timeout(
            std::time::Duration::from_secs(5),
            run_lifecycle(&mut client, AioController::default(), &cancel),
        )
        .await
        .expect("cancellation should unblock the hung step")
        .unwrap_err();

        assert_eq!(failure.step, LifecycleStep::Stats);
        assert_eq!(failure.error, Error::Cancelled);
        assert_eq!(client.count(LifecycleStep::Stats), 1);
        assert_eq!(client.count(LifecycleStep::Delete), 0);
    }

    #[tokio::test]
    async fn test_empty_id_makes_no_calls() {
        let cancel = CancellationToken::new();
        let mut client = RecordingClient::<NullDebug>::new();
        let spec = NullDebug {
            id: String::new(),
            ..Default::default()
        };

        let failure = run_lifecycle(&mut client, spec, &cancel).await.unwrap_err();
        assert_eq!(failure.step, LifecycleStep::Create);
        assert!(matches!(failure.error, Error::InvalidArgument(_)));
        assert!(client.steps().is_empty());
    }

    #[tokio::test]
    async fn test_update_with_other_id_is_rejected() {
        let cancel = CancellationToken::new();
        let mut client = RecordingClient::<NullDebug>::new();
        let update = NullDebug {
            id: "OpiNull10".to_string(),
            ..Default::default()
        };

        let failure = run_lifecycle_with(&mut client, NullDebug::default(), update, &cancel)
            .await
            .unwrap_err();
        assert_eq!(failure.step, LifecycleStep::Update);
        assert_eq!(client.steps(), vec![LifecycleStep::Create]);
    }

    #[tokio::test]
    async fn test_modified_update_is_observed_by_get() {
        let cancel = CancellationToken::new();
        let mut client = RecordingClient::<NullDebug>::new();
        let update = NullDebug {
            blocks_count: 128,
            ..Default::default()
        };

        let run = run_lifecycle_with(&mut client, NullDebug::default(), update, &cancel)
            .await
            .unwrap();
        assert_eq!(run.created.unwrap().blocks_count, 64);
        assert_eq!(run.fetched.unwrap().blocks_count, 128);
    }

    #[tokio::test]
    async fn test_get_with_wrong_id_fails() {
        let cancel = CancellationToken::new();
        let mut client = RecordingClient::<NullDebug>::new();
        client.program(
            LifecycleStep::Get,
            Reply::Return(NullDebug {
                id: "SomethingElse".to_string(),
                ..Default::default()
            }),
        );

        let failure = run_lifecycle(&mut client, NullDebug::default(), &cancel)
            .await
            .unwrap_err();
        assert_eq!(failure.step, LifecycleStep::Get);
        assert!(matches!(failure.error, Error::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_missing_list_entry_is_not_fatal() {
        let cancel = CancellationToken::new();
        let mut client = RecordingClient::<AioController>::new();
        client.program(LifecycleStep::List, Reply::ReturnList(Vec::new()));

        let run = run_lifecycle(&mut client, AioController::default(), &cancel)
            .await
            .unwrap();
        assert_eq!(run.listed_self(), Some(false));
        assert_eq!(run.state(), LifecycleState::Deleted);
    }
}
