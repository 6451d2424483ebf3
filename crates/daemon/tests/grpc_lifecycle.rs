//! Lifecycle runs against the simulator over real gRPC.

use opi_storage_common::client::{
    connect_channel, AioControllerClient, NullDebugClient, NvmfRemoteControllerClient,
};
use opi_storage_common::{
    run_lifecycle, AioController, Backend, BackendPlan, Error, LifecycleClient, LifecycleState,
    LifecycleStep, NullDebug, NvmeRemoteController, ResourceKind, ResourceSpec,
};
use opi_storaged::grpc;
use opi_storaged::state::StateManager;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

struct TestServer {
    addr: String,
    state: StateManager,
    shutdown: CancellationToken,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn start_server() -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = format!("http://{}", listener.local_addr().unwrap());
    let state = StateManager::new();
    let shutdown = CancellationToken::new();

    tokio::spawn(grpc::serve_with_listener(
        listener,
        state.clone(),
        shutdown.clone(),
    ));

    TestServer {
        addr,
        state,
        shutdown,
    }
}

fn opi_nvme8() -> NvmeRemoteController {
    NvmeRemoteController {
        id: "OpiNvme8".to_string(),
        traddr: "203.0.113.5".to_string(),
        trsvcid: 4444,
        subnqn: "nqn.2016-06.io.spdk:cnode1".to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn opi_nvme8_scenario_end_to_end() {
    let server = start_server().await;
    let mut client = NvmfRemoteControllerClient::connect(&server.addr).await.unwrap();
    let cancel = CancellationToken::new();

    let created = client.create(opi_nvme8()).await.unwrap();
    assert_eq!(created.id, "OpiNvme8");

    let updated = client.update(opi_nvme8()).await.unwrap();
    assert_eq!(updated.id, "OpiNvme8");

    let listed = client.list().await.unwrap();
    assert!(listed.iter().any(|c| c.id == "OpiNvme8"));

    let fetched = client.get("OpiNvme8").await.unwrap();
    assert_eq!(fetched, opi_nvme8());

    let stats = client.stats("OpiNvme8").await.unwrap();
    assert_eq!(stats.read_ops_count, 1);

    client.delete("OpiNvme8").await.unwrap();

    let err = client.get("OpiNvme8").await.unwrap_err();
    assert_eq!(
        err,
        Error::NotFound {
            kind: ResourceKind::RemoteController,
            id: "OpiNvme8".to_string()
        }
    );

    // The same id can go through the whole lifecycle again
    let run = run_lifecycle(&mut client, opi_nvme8(), &cancel).await.unwrap();
    assert_eq!(run.state(), LifecycleState::Deleted);
    assert!(server.state.nvme().is_empty());
}

#[tokio::test]
async fn every_kind_completes_over_grpc() {
    let server = start_server().await;
    let channel = connect_channel(&server.addr).await.unwrap();
    let cancel = CancellationToken::new();

    let mut null = NullDebugClient::new(channel.clone());
    let run = run_lifecycle(&mut null, NullDebug::default(), &cancel)
        .await
        .unwrap();
    assert_eq!(run.listed_self(), Some(true));
    assert_eq!(run.fetched.unwrap().id, "OpiNull9");

    let mut aio = AioControllerClient::new(channel);
    let run = run_lifecycle(&mut aio, AioController::default(), &cancel)
        .await
        .unwrap();
    assert_eq!(run.fetched.unwrap().filename, "/tmp/aio_bdev_file");
    assert!(run.deleted);

    assert!(server.state.null().is_empty());
    assert!(server.state.aio().is_empty());
}

#[tokio::test]
async fn duplicate_create_is_already_exists() {
    let server = start_server().await;
    server
        .state
        .seed(&[ResourceSpec::NullDevice(NullDebug::default())])
        .unwrap();

    let mut client = NullDebugClient::connect(&server.addr).await.unwrap();
    let failure = run_lifecycle(&mut client, NullDebug::default(), &CancellationToken::new())
        .await
        .unwrap_err();

    assert_eq!(failure.step, LifecycleStep::Create);
    assert!(failure.error.is_already_exists());
    // Aborted after step 1: the seeded device was never updated or deleted
    assert_eq!(server.state.null().len(), 1);
    assert_eq!(server.state.null().stats("OpiNull9").unwrap().read_ops_count, 0);
}

#[tokio::test]
async fn malformed_spec_is_invalid_argument() {
    let server = start_server().await;
    let mut client = AioControllerClient::connect(&server.addr).await.unwrap();

    let err = client
        .create(AioController {
            filename: String::new(),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
}

#[tokio::test]
async fn reset_clears_counters() {
    let server = start_server().await;
    let mut client = NvmfRemoteControllerClient::connect(&server.addr).await.unwrap();

    client.create(opi_nvme8()).await.unwrap();
    client.get("OpiNvme8").await.unwrap();
    assert_eq!(client.stats("OpiNvme8").await.unwrap().read_ops_count, 1);

    client.reset("OpiNvme8").await.unwrap();
    assert_eq!(client.stats("OpiNvme8").await.unwrap().read_ops_count, 0);

    assert!(client.reset("Unknown").await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn backend_run_over_one_channel() {
    let server = start_server().await;
    let channel = connect_channel(&server.addr).await.unwrap();
    let mut backend = Backend::from_channel(channel);

    let report = backend
        .run(&BackendPlan::default(), &CancellationToken::new())
        .await
        .unwrap();
    assert!(report.is_success());
    assert_eq!(report.runs.len(), 3);

    let parallel = BackendPlan {
        parallel: true,
        ..Default::default()
    };
    let report = backend
        .run(&parallel, &CancellationToken::new())
        .await
        .unwrap();
    assert!(report.is_success());
}

#[tokio::test]
async fn unreachable_endpoint_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let err = NullDebugClient::connect(&addr).await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
}
