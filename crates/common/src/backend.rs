//! Backend run across all three storage services
//!
//! Exercises the remote controller, then the null device, then the AIO
//! device. Kinds share no state, so a run may also drive them concurrently.

use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tonic::transport::Channel;
use tracing::{info, warn};

use crate::client::{AioControllerClient, NullDebugClient, NvmfRemoteControllerClient};
use crate::error::{Error, Result};
use crate::lifecycle::{run_lifecycle, LifecycleClient, LifecycleStep, LifecycleSummary};
use crate::types::{
    AioController, NullDebug, NvmeAddressFamily, NvmeRemoteController, ResourceKind,
    StorageResource,
};

/// What a backend run should exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendPlan {
    /// Kinds to exercise; run order is always remote controller, null, aio
    pub kinds: Vec<ResourceKind>,
    /// Drive the kinds concurrently instead of one after another
    pub parallel: bool,
    pub nvme: NvmeRemoteController,
    pub null: NullDebug,
    pub aio: AioController,
}

impl Default for BackendPlan {
    fn default() -> Self {
        Self {
            kinds: ResourceKind::ALL.to_vec(),
            parallel: false,
            nvme: NvmeRemoteController::default(),
            null: NullDebug::default(),
            aio: AioController::default(),
        }
    }
}

impl BackendPlan {
    fn includes(&self, kind: ResourceKind) -> bool {
        self.kinds.contains(&kind)
    }

    /// Point the remote controller at a resolved storage host address.
    pub fn set_storage_address(&mut self, addr: IpAddr) {
        self.nvme.traddr = addr.to_string();
        self.nvme.address_family = match addr {
            IpAddr::V4(_) => NvmeAddressFamily::Ipv4,
            IpAddr::V6(_) => NvmeAddressFamily::Ipv6,
        };
    }
}

/// Resolve a storage host name (e.g. `spdk`) to its first address
pub async fn resolve_storage_host(host: &str) -> Result<IpAddr> {
    if let Ok(ip) = host.parse::<IpAddr>() {
        return Ok(ip);
    }
    let mut addrs = tokio::net::lookup_host((host, 0))
        .await
        .map_err(|e| Error::Transport(format!("lookup {} failed: {}", host, e)))?;
    addrs
        .next()
        .map(|a| a.ip())
        .ok_or_else(|| Error::Transport(format!("lookup {} returned no addresses", host)))
}

/// Per-kind outcomes of a backend run
#[derive(Debug, Clone, Default, Serialize)]
pub struct BackendReport {
    pub runs: Vec<LifecycleSummary>,
}

impl BackendReport {
    pub fn is_success(&self) -> bool {
        self.runs.iter().all(LifecycleSummary::is_success)
    }

    pub fn get(&self, kind: ResourceKind) -> Option<&LifecycleSummary> {
        self.runs.iter().find(|r| r.kind == kind)
    }
}

/// First failing lifecycle of a backend run
#[derive(Debug, Error)]
#[error("{kind} lifecycle failed at {step}: {error}")]
pub struct BackendError {
    pub kind: ResourceKind,
    pub step: LifecycleStep,
    #[source]
    pub error: Error,
    /// Everything that ran, including the failing kind
    pub report: BackendReport,
}

type Outcome = std::result::Result<LifecycleSummary, (LifecycleStep, Error, LifecycleSummary)>;

async fn exercise<R, C>(client: &mut C, spec: R, cancel: &CancellationToken) -> Outcome
where
    R: StorageResource,
    C: LifecycleClient<R> + ?Sized,
{
    match run_lifecycle(client, spec, cancel).await {
        Ok(run) => Ok(run.summary()),
        Err(failure) => {
            let summary = failure.summary();
            Err((failure.step, failure.error, summary))
        }
    }
}

/// One client per storage service
pub struct Backend<N, U, A> {
    nvme: N,
    null: U,
    aio: A,
}

impl Backend<NvmfRemoteControllerClient, NullDebugClient, AioControllerClient> {
    /// gRPC clients sharing one channel
    pub fn from_channel(channel: Channel) -> Self {
        Self::new(
            NvmfRemoteControllerClient::new(channel.clone()),
            NullDebugClient::new(channel.clone()),
            AioControllerClient::new(channel),
        )
    }
}

impl<N, U, A> Backend<N, U, A>
where
    N: LifecycleClient<NvmeRemoteController>,
    U: LifecycleClient<NullDebug>,
    A: LifecycleClient<AioController>,
{
    pub fn new(nvme: N, null: U, aio: A) -> Self {
        Self { nvme, null, aio }
    }

    pub fn into_parts(self) -> (N, U, A) {
        (self.nvme, self.null, self.aio)
    }

    /// Run the planned lifecycles.
    ///
    /// Sequential runs stop at the first failing kind. Parallel runs let
    /// every kind finish and report the first failure in run order.
    pub async fn run(
        &mut self,
        plan: &BackendPlan,
        cancel: &CancellationToken,
    ) -> std::result::Result<BackendReport, BackendError> {
        if plan.parallel {
            self.run_parallel(plan, cancel).await
        } else {
            self.run_sequential(plan, cancel).await
        }
    }

    async fn run_sequential(
        &mut self,
        plan: &BackendPlan,
        cancel: &CancellationToken,
    ) -> std::result::Result<BackendReport, BackendError> {
        let mut report = BackendReport::default();

        for kind in ResourceKind::ALL {
            if !plan.includes(kind) {
                continue;
            }
            let outcome = match kind {
                ResourceKind::RemoteController => {
                    exercise(&mut self.nvme, plan.nvme.clone(), cancel).await
                }
                ResourceKind::NullDevice => {
                    exercise(&mut self.null, plan.null.clone(), cancel).await
                }
                ResourceKind::AioDevice => exercise(&mut self.aio, plan.aio.clone(), cancel).await,
            };
            match outcome {
                Ok(summary) => report.runs.push(summary),
                Err((step, error, summary)) => {
                    report.runs.push(summary);
                    return Err(BackendError {
                        kind,
                        step,
                        error,
                        report,
                    });
                }
            }
        }

        info!("Backend run complete: {} kind(s)", report.runs.len());
        Ok(report)
    }

    async fn run_parallel(
        &mut self,
        plan: &BackendPlan,
        cancel: &CancellationToken,
    ) -> std::result::Result<BackendReport, BackendError> {
        let Self { nvme, null, aio } = self;

        let nvme_run = async move {
            if plan.includes(ResourceKind::RemoteController) {
                Some(exercise(nvme, plan.nvme.clone(), cancel).await)
            } else {
                None
            }
        };
        let null_run = async move {
            if plan.includes(ResourceKind::NullDevice) {
                Some(exercise(null, plan.null.clone(), cancel).await)
            } else {
                None
            }
        };
        let aio_run = async move {
            if plan.includes(ResourceKind::AioDevice) {
                Some(exercise(aio, plan.aio.clone(), cancel).await)
            } else {
                None
            }
        };

        let (nvme_out, null_out, aio_out) = tokio::join!(nvme_run, null_run, aio_run);

        let mut report = BackendReport::default();
        let mut first_failure = None;
        for (kind, outcome) in ResourceKind::ALL
            .into_iter()
            .zip([nvme_out, null_out, aio_out])
        {
            match outcome {
                None => {}
                Some(Ok(summary)) => report.runs.push(summary),
                Some(Err((step, error, summary))) => {
                    report.runs.push(summary);
                    if first_failure.is_none() {
                        first_failure = Some((kind, step, error));
                    } else {
                        warn!("{} lifecycle failed at {}: {}", kind, step, error);
                    }
                }
            }
        }

        match first_failure {
            Some((kind, step, error)) => Err(BackendError {
                kind,
                step,
                error,
                report,
            }),
            None => {
                info!("Backend run complete: {} kind(s)", report.runs.len());
                Ok(report)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::LifecycleState;
    use crate::testing::{RecordingClient, Reply};

    type TestBackend = Backend<
        RecordingClient<NvmeRemoteController>,
        RecordingClient<NullDebug>,
        RecordingClient<AioController>,
    >;

    fn test_backend() -> TestBackend {
        Backend::new(RecordingClient::new(), RecordingClient::new(), RecordingClient::new())
    }

    #[tokio::test]
    async fn test_sequential_run_covers_all_kinds() {
        let mut backend = test_backend();
        let report = backend
            .run(&BackendPlan::default(), &CancellationToken::new())
            .await
            .unwrap();

        assert!(report.is_success());
        let kinds: Vec<ResourceKind> = report.runs.iter().map(|r| r.kind).collect();
        assert_eq!(kinds, ResourceKind::ALL.to_vec());
        assert_eq!(report.get(ResourceKind::NullDevice).unwrap().id, "OpiNull9");
    }

    #[tokio::test]
    async fn test_sequential_run_stops_at_first_failing_kind() {
        let (mut nvme, null, aio) = test_backend().into_parts();
        nvme.program(
            LifecycleStep::Update,
            Reply::Fail(Error::Transport("broken pipe".to_string())),
        );
        let mut backend = Backend::new(nvme, null, aio);

        let err = backend
            .run(&BackendPlan::default(), &CancellationToken::new())
            .await
            .unwrap_err();
        assert_eq!(err.kind, ResourceKind::RemoteController);
        assert_eq!(err.step, LifecycleStep::Update);
        assert_eq!(err.report.runs.len(), 1);

        let (_, null, aio) = backend.into_parts();
        assert!(null.calls().is_empty());
        assert!(aio.calls().is_empty());
    }

    #[tokio::test]
    async fn test_parallel_run_finishes_independent_kinds() {
        let (nvme, mut null, aio) = test_backend().into_parts();
        null.program(
            LifecycleStep::Get,
            Reply::Fail(Error::NotFound {
                kind: ResourceKind::NullDevice,
                id: "OpiNull9".to_string(),
            }),
        );
        let mut backend = Backend::new(nvme, null, aio);
        let plan = BackendPlan {
            parallel: true,
            ..Default::default()
        };

        let err = backend.run(&plan, &CancellationToken::new()).await.unwrap_err();
        assert_eq!(err.kind, ResourceKind::NullDevice);
        assert_eq!(err.report.runs.len(), 3);
        assert_eq!(
            err.report.get(ResourceKind::AioDevice).unwrap().state,
            LifecycleState::Deleted
        );
        assert_eq!(
            err.report.get(ResourceKind::NullDevice).unwrap().state,
            LifecycleState::Failed(LifecycleStep::Get)
        );
    }

    #[tokio::test]
    async fn test_plan_kind_filter() {
        let mut backend = test_backend();
        let plan = BackendPlan {
            kinds: vec![ResourceKind::AioDevice],
            ..Default::default()
        };
        let report = backend.run(&plan, &CancellationToken::new()).await.unwrap();
        assert_eq!(report.runs.len(), 1);

        let (nvme, null, aio) = backend.into_parts();
        assert!(nvme.calls().is_empty());
        assert!(null.calls().is_empty());
        assert_eq!(aio.calls().len(), 6);
    }

    #[tokio::test]
    async fn test_storage_host_literal_ip() {
        let addr = resolve_storage_host("203.0.113.5").await.unwrap();
        let mut plan = BackendPlan::default();
        plan.set_storage_address(addr);
        assert_eq!(plan.nvme.traddr, "203.0.113.5");
        assert_eq!(plan.nvme.address_family, NvmeAddressFamily::Ipv4);

        plan.set_storage_address("::1".parse().unwrap());
        assert_eq!(plan.nvme.address_family, NvmeAddressFamily::Ipv6);
    }
}
