//! gRPC server implementation

use opi_storage_common::generated::{
    self as pb,
    aio_controller_service_server::{AioControllerService, AioControllerServiceServer},
    null_debug_service_server::{NullDebugService, NullDebugServiceServer},
    nvmf_remote_controller_service_server::{
        NvmfRemoteControllerService, NvmfRemoteControllerServiceServer,
    },
};
use opi_storage_common::{
    object_key, AioController, Error, NullDebug, NvmeRemoteController, StorageResource,
};
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tokio_util::sync::CancellationToken;
use tonic::transport::server::Router;
use tonic::{Request, Response, Status};
use tracing::{debug, info};

use crate::config::DaemonConfig;
use crate::state::StateManager;

/// gRPC service implementation for all three storage services
#[derive(Clone)]
pub struct StorageService {
    state: StateManager,
}

impl StorageService {
    pub fn new(state: StateManager) -> Self {
        Self { state }
    }
}

/// Decode a request body into a domain resource.
fn decode<P, R>(body: Option<P>, what: &str) -> Result<R, Status>
where
    R: StorageResource + TryFrom<P, Error = Error>,
{
    let body = body.ok_or_else(|| Status::invalid_argument(format!("{} required", what)))?;
    R::try_from(body).map_err(|e| match e {
        Error::InvalidResponse(msg) => Status::invalid_argument(msg),
        other => Status::from(other),
    })
}

/// Extract a non-empty id from a key or name field.
fn require_id(id: String) -> Result<String, Status> {
    if id.is_empty() {
        return Err(Status::invalid_argument("name required"));
    }
    Ok(id)
}

fn key_value(key: Option<pb::ObjectKey>) -> Result<String, Status> {
    require_id(key.map(|k| k.value).unwrap_or_default())
}

// ============================================================================
// NVMe-oF remote controllers
// ============================================================================

#[tonic::async_trait]
impl NvmfRemoteControllerService for StorageService {
    async fn create_nvmf_remote_controller(
        &self,
        request: Request<pb::CreateNvmfRemoteControllerRequest>,
    ) -> Result<Response<pb::NvmfRemoteController>, Status> {
        let controller: NvmeRemoteController =
            decode(request.into_inner().nvmf_remote_controller, "nvmf_remote_controller")?;
        debug!("CreateNvmfRemoteController: {}", controller.id);

        let created = self.state.nvme().create(controller)?;
        Ok(Response::new(created.into()))
    }

    async fn update_nvmf_remote_controller(
        &self,
        request: Request<pb::UpdateNvmfRemoteControllerRequest>,
    ) -> Result<Response<pb::NvmfRemoteController>, Status> {
        let controller: NvmeRemoteController =
            decode(request.into_inner().nvmf_remote_controller, "nvmf_remote_controller")?;
        debug!("UpdateNvmfRemoteController: {}", controller.id);

        let updated = self.state.nvme().update(controller)?;
        Ok(Response::new(updated.into()))
    }

    async fn delete_nvmf_remote_controller(
        &self,
        request: Request<pb::DeleteNvmfRemoteControllerRequest>,
    ) -> Result<Response<pb::DeleteResponse>, Status> {
        let id = require_id(request.into_inner().name)?;
        debug!("DeleteNvmfRemoteController: {}", id);

        self.state.nvme().delete(&id)?;
        Ok(Response::new(pb::DeleteResponse {}))
    }

    async fn list_nvmf_remote_controllers(
        &self,
        _request: Request<pb::ListNvmfRemoteControllersRequest>,
    ) -> Result<Response<pb::ListNvmfRemoteControllersResponse>, Status> {
        Ok(Response::new(pb::ListNvmfRemoteControllersResponse {
            nvmf_remote_controllers: self
                .state
                .nvme()
                .list()
                .into_iter()
                .map(Into::into)
                .collect(),
        }))
    }

    async fn get_nvmf_remote_controller(
        &self,
        request: Request<pb::GetNvmfRemoteControllerRequest>,
    ) -> Result<Response<pb::NvmfRemoteController>, Status> {
        let id = require_id(request.into_inner().name)?;
        let controller = self.state.nvme().get(&id)?;
        Ok(Response::new(controller.into()))
    }

    async fn nvmf_remote_controller_reset(
        &self,
        request: Request<pb::NvmfRemoteControllerResetRequest>,
    ) -> Result<Response<pb::NvmfRemoteControllerResetResponse>, Status> {
        let id = key_value(request.into_inner().id)?;
        debug!("NvmfRemoteControllerReset: {}", id);

        self.state.nvme().reset(&id)?;
        Ok(Response::new(pb::NvmfRemoteControllerResetResponse {}))
    }

    async fn nvmf_remote_controller_stats(
        &self,
        request: Request<pb::NvmfRemoteControllerStatsRequest>,
    ) -> Result<Response<pb::NvmfRemoteControllerStatsResponse>, Status> {
        let id = key_value(request.into_inner().id)?;
        let stats = self.state.nvme().stats(&id)?;
        Ok(Response::new(pb::NvmfRemoteControllerStatsResponse {
            id: object_key(&id),
            stats: Some(pb::VolumeStats::try_from(stats)?),
        }))
    }
}

// ============================================================================
// Null debug devices
// ============================================================================

#[tonic::async_trait]
impl NullDebugService for StorageService {
    async fn create_null_debug(
        &self,
        request: Request<pb::CreateNullDebugRequest>,
    ) -> Result<Response<pb::NullDebug>, Status> {
        let device: NullDebug = decode(request.into_inner().null_debug, "null_debug")?;
        debug!("CreateNullDebug: {}", device.id);

        let created = self.state.null().create(device)?;
        Ok(Response::new(pb::NullDebug::try_from(created)?))
    }

    async fn update_null_debug(
        &self,
        request: Request<pb::UpdateNullDebugRequest>,
    ) -> Result<Response<pb::NullDebug>, Status> {
        let device: NullDebug = decode(request.into_inner().null_debug, "null_debug")?;
        debug!("UpdateNullDebug: {}", device.id);

        let updated = self.state.null().update(device)?;
        Ok(Response::new(pb::NullDebug::try_from(updated)?))
    }

    async fn delete_null_debug(
        &self,
        request: Request<pb::DeleteNullDebugRequest>,
    ) -> Result<Response<pb::DeleteResponse>, Status> {
        let id = require_id(request.into_inner().name)?;
        debug!("DeleteNullDebug: {}", id);

        self.state.null().delete(&id)?;
        Ok(Response::new(pb::DeleteResponse {}))
    }

    async fn list_null_debugs(
        &self,
        _request: Request<pb::ListNullDebugsRequest>,
    ) -> Result<Response<pb::ListNullDebugsResponse>, Status> {
        Ok(Response::new(pb::ListNullDebugsResponse {
            null_debugs: self
                .state
                .null()
                .list()
                .into_iter()
                .map(pb::NullDebug::try_from)
                .collect::<Result<_, _>>()?,
        }))
    }

    async fn get_null_debug(
        &self,
        request: Request<pb::GetNullDebugRequest>,
    ) -> Result<Response<pb::NullDebug>, Status> {
        let id = require_id(request.into_inner().name)?;
        let device = self.state.null().get(&id)?;
        Ok(Response::new(pb::NullDebug::try_from(device)?))
    }

    async fn null_debug_stats(
        &self,
        request: Request<pb::NullDebugStatsRequest>,
    ) -> Result<Response<pb::NullDebugStatsResponse>, Status> {
        let id = key_value(request.into_inner().handle)?;
        let stats = self.state.null().stats(&id)?;
        Ok(Response::new(pb::NullDebugStatsResponse {
            handle: object_key(&id),
            stats: Some(pb::VolumeStats::try_from(stats)?),
        }))
    }
}

// ============================================================================
// AIO controllers
// ============================================================================

#[tonic::async_trait]
impl AioControllerService for StorageService {
    async fn create_aio_controller(
        &self,
        request: Request<pb::CreateAioControllerRequest>,
    ) -> Result<Response<pb::AioController>, Status> {
        let controller: AioController =
            decode(request.into_inner().aio_controller, "aio_controller")?;
        debug!("CreateAioController: {}", controller.id);

        let created = self.state.aio().create(controller)?;
        Ok(Response::new(pb::AioController::try_from(created)?))
    }

    async fn update_aio_controller(
        &self,
        request: Request<pb::UpdateAioControllerRequest>,
    ) -> Result<Response<pb::AioController>, Status> {
        let controller: AioController =
            decode(request.into_inner().aio_controller, "aio_controller")?;
        debug!("UpdateAioController: {}", controller.id);

        let updated = self.state.aio().update(controller)?;
        Ok(Response::new(pb::AioController::try_from(updated)?))
    }

    async fn delete_aio_controller(
        &self,
        request: Request<pb::DeleteAioControllerRequest>,
    ) -> Result<Response<pb::DeleteResponse>, Status> {
        let id = require_id(request.into_inner().name)?;
        debug!("DeleteAioController: {}", id);

        self.state.aio().delete(&id)?;
        Ok(Response::new(pb::DeleteResponse {}))
    }

    async fn list_aio_controllers(
        &self,
        _request: Request<pb::ListAioControllersRequest>,
    ) -> Result<Response<pb::ListAioControllersResponse>, Status> {
        Ok(Response::new(pb::ListAioControllersResponse {
            aio_controllers: self
                .state
                .aio()
                .list()
                .into_iter()
                .map(pb::AioController::try_from)
                .collect::<Result<_, _>>()?,
        }))
    }

    async fn get_aio_controller(
        &self,
        request: Request<pb::GetAioControllerRequest>,
    ) -> Result<Response<pb::AioController>, Status> {
        let id = require_id(request.into_inner().name)?;
        let controller = self.state.aio().get(&id)?;
        Ok(Response::new(pb::AioController::try_from(controller)?))
    }

    async fn aio_controller_stats(
        &self,
        request: Request<pb::AioControllerStatsRequest>,
    ) -> Result<Response<pb::AioControllerStatsResponse>, Status> {
        let id = key_value(request.into_inner().handle)?;
        let stats = self.state.aio().stats(&id)?;
        Ok(Response::new(pb::AioControllerStatsResponse {
            handle: object_key(&id),
            stats: Some(pb::VolumeStats::try_from(stats)?),
        }))
    }
}

/// Router with all three storage services mounted
pub fn router(state: StateManager) -> Router {
    let service = StorageService::new(state);
    tonic::transport::Server::builder()
        .add_service(NvmfRemoteControllerServiceServer::new(service.clone()))
        .add_service(NullDebugServiceServer::new(service.clone()))
        .add_service(AioControllerServiceServer::new(service))
}

/// Start the gRPC server
pub async fn serve(config: DaemonConfig, state: StateManager) -> anyhow::Result<()> {
    let addr = config.grpc_listen.parse()?;

    info!("gRPC server listening on {}", addr);

    router(state).serve(addr).await?;

    Ok(())
}

/// Serve on an already bound listener until `shutdown` is cancelled
pub async fn serve_with_listener(
    listener: TcpListener,
    state: StateManager,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    info!("gRPC server listening on {}", listener.local_addr()?);

    router(state)
        .serve_with_incoming_shutdown(TcpListenerStream::new(listener), shutdown.cancelled_owned())
        .await?;

    Ok(())
}
