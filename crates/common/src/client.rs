//! gRPC clients for the storage services
//!
//! Thin adapters over the generated tonic clients that speak the domain types
//! and implement [`LifecycleClient`].

use tonic::transport::{Channel, Endpoint};
use tracing::debug;

use crate::error::{Error, Result};
use crate::generated as pb;
use crate::generated::aio_controller_service_client::AioControllerServiceClient;
use crate::generated::null_debug_service_client::NullDebugServiceClient;
use crate::generated::nvmf_remote_controller_service_client::NvmfRemoteControllerServiceClient;
use crate::lifecycle::LifecycleClient;
use crate::types::{
    object_key, AioController, NullDebug, NvmeRemoteController, StorageResource, VolumeStats,
};

/// Open a channel to a storage endpoint such as `http://127.0.0.1:50051`
pub async fn connect_channel(addr: &str) -> Result<Channel> {
    let endpoint = Endpoint::from_shared(addr.to_string())
        .map_err(|e| Error::InvalidArgument(format!("invalid address {}: {}", addr, e)))?;
    debug!("Connecting to {}", addr);
    Ok(endpoint.connect().await?)
}

fn missing_stats<R: StorageResource>(id: &str) -> Error {
    Error::InvalidResponse(format!("{} {} stats response without counters", R::KIND, id))
}

/// Client for `NvmfRemoteControllerService`
#[derive(Debug, Clone)]
pub struct NvmfRemoteControllerClient {
    client: NvmfRemoteControllerServiceClient<Channel>,
}

impl NvmfRemoteControllerClient {
    pub fn new(channel: Channel) -> Self {
        Self {
            client: NvmfRemoteControllerServiceClient::new(channel),
        }
    }

    pub async fn connect(addr: &str) -> Result<Self> {
        Ok(Self::new(connect_channel(addr).await?))
    }

    /// Reset the controller connection
    pub async fn reset(&mut self, id: &str) -> Result<()> {
        let request = tonic::Request::new(pb::NvmfRemoteControllerResetRequest {
            id: object_key(id),
        });
        self.client
            .nvmf_remote_controller_reset(request)
            .await
            .map_err(|s| Error::from_status(s, NvmeRemoteController::KIND, id))?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl LifecycleClient<NvmeRemoteController> for NvmfRemoteControllerClient {
    async fn create(&mut self, resource: NvmeRemoteController) -> Result<NvmeRemoteController> {
        let id = resource.id.clone();
        let request = tonic::Request::new(pb::CreateNvmfRemoteControllerRequest {
            nvmf_remote_controller: Some(resource.into()),
        });
        let response = self
            .client
            .create_nvmf_remote_controller(request)
            .await
            .map_err(|s| Error::from_status(s, NvmeRemoteController::KIND, &id))?;
        response.into_inner().try_into()
    }

    async fn update(&mut self, resource: NvmeRemoteController) -> Result<NvmeRemoteController> {
        let id = resource.id.clone();
        let request = tonic::Request::new(pb::UpdateNvmfRemoteControllerRequest {
            nvmf_remote_controller: Some(resource.into()),
        });
        let response = self
            .client
            .update_nvmf_remote_controller(request)
            .await
            .map_err(|s| Error::from_status(s, NvmeRemoteController::KIND, &id))?;
        response.into_inner().try_into()
    }

    async fn list(&mut self) -> Result<Vec<NvmeRemoteController>> {
        let request = tonic::Request::new(pb::ListNvmfRemoteControllersRequest {});
        let response = self
            .client
            .list_nvmf_remote_controllers(request)
            .await
            .map_err(|s| Error::from_status(s, NvmeRemoteController::KIND, ""))?;
        response
            .into_inner()
            .nvmf_remote_controllers
            .into_iter()
            .map(NvmeRemoteController::try_from)
            .collect()
    }

    async fn get(&mut self, id: &str) -> Result<NvmeRemoteController> {
        let request = tonic::Request::new(pb::GetNvmfRemoteControllerRequest {
            name: id.to_string(),
        });
        let response = self
            .client
            .get_nvmf_remote_controller(request)
            .await
            .map_err(|s| Error::from_status(s, NvmeRemoteController::KIND, id))?;
        response.into_inner().try_into()
    }

    async fn stats(&mut self, id: &str) -> Result<VolumeStats> {
        let request = tonic::Request::new(pb::NvmfRemoteControllerStatsRequest {
            id: object_key(id),
        });
        let response = self
            .client
            .nvmf_remote_controller_stats(request)
            .await
            .map_err(|s| Error::from_status(s, NvmeRemoteController::KIND, id))?;
        response
            .into_inner()
            .stats
            .ok_or_else(|| missing_stats::<NvmeRemoteController>(id))?
            .try_into()
    }

    async fn delete(&mut self, id: &str) -> Result<()> {
        let request = tonic::Request::new(pb::DeleteNvmfRemoteControllerRequest {
            name: id.to_string(),
        });
        self.client
            .delete_nvmf_remote_controller(request)
            .await
            .map_err(|s| Error::from_status(s, NvmeRemoteController::KIND, id))?;
        Ok(())
    }
}

/// Client for `NullDebugService`
#[derive(Debug, Clone)]
pub struct NullDebugClient {
    client: NullDebugServiceClient<Channel>,
}

impl NullDebugClient {
    pub fn new(channel: Channel) -> Self {
        Self {
            client: NullDebugServiceClient::new(channel),
        }
    }

    pub async fn connect(addr: &str) -> Result<Self> {
        Ok(Self::new(connect_channel(addr).await?))
    }
}

#[async_trait::async_trait]
impl LifecycleClient<NullDebug> for NullDebugClient {
    async fn create(&mut self, resource: NullDebug) -> Result<NullDebug> {
        let id = resource.id.clone();
        let request = tonic::Request::new(pb::CreateNullDebugRequest {
            null_debug: Some(pb::NullDebug::try_from(resource)?),
        });
        let response = self
            .client
            .create_null_debug(request)
            .await
            .map_err(|s| Error::from_status(s, NullDebug::KIND, &id))?;
        response.into_inner().try_into()
    }

    async fn update(&mut self, resource: NullDebug) -> Result<NullDebug> {
        let id = resource.id.clone();
        let request = tonic::Request::new(pb::UpdateNullDebugRequest {
            null_debug: Some(pb::NullDebug::try_from(resource)?),
        });
        let response = self
            .client
            .update_null_debug(request)
            .await
            .map_err(|s| Error::from_status(s, NullDebug::KIND, &id))?;
        response.into_inner().try_into()
    }

    async fn list(&mut self) -> Result<Vec<NullDebug>> {
        let request = tonic::Request::new(pb::ListNullDebugsRequest {});
        let response = self
            .client
            .list_null_debugs(request)
            .await
            .map_err(|s| Error::from_status(s, NullDebug::KIND, ""))?;
        response
            .into_inner()
            .null_debugs
            .into_iter()
            .map(NullDebug::try_from)
            .collect()
    }

    async fn get(&mut self, id: &str) -> Result<NullDebug> {
        let request = tonic::Request::new(pb::GetNullDebugRequest {
            name: id.to_string(),
        });
        let response = self
            .client
            .get_null_debug(request)
            .await
            .map_err(|s| Error::from_status(s, NullDebug::KIND, id))?;
        response.into_inner().try_into()
    }

    async fn stats(&mut self, id: &str) -> Result<VolumeStats> {
        let request = tonic::Request::new(pb::NullDebugStatsRequest {
            handle: object_key(id),
        });
        let response = self
            .client
            .null_debug_stats(request)
            .await
            .map_err(|s| Error::from_status(s, NullDebug::KIND, id))?;
        response
            .into_inner()
            .stats
            .ok_or_else(|| missing_stats::<NullDebug>(id))?
            .try_into()
    }

    async fn delete(&mut self, id: &str) -> Result<()> {
        let request = tonic::Request::new(pb::DeleteNullDebugRequest {
            name: id.to_string(),
        });
        self.client
            .delete_null_debug(request)
            .await
            .map_err(|s| Error::from_status(s, NullDebug::KIND, id))?;
        Ok(())
    }
}

/// Client for `AioControllerService`
#[derive(Debug, Clone)]
pub struct AioControllerClient {
    client: AioControllerServiceClient<Channel>,
}

impl AioControllerClient {
    pub fn new(channel: Channel) -> Self {
        Self {
            client: AioControllerServiceClient::new(channel),
        }
    }

    pub async fn connect(addr: &str) -> Result<Self> {
        Ok(Self::new(connect_channel(addr).await?))
    }
}

#[async_trait::async_trait]
impl LifecycleClient<AioController> for AioControllerClient {
    async fn create(&mut self, resource: AioController) -> Result<AioController> {
        let id = resource.id.clone();
        let request = tonic::Request::new(pb::CreateAioControllerRequest {
            aio_controller: Some(pb::AioController::try_from(resource)?),
        });
        let response = self
            .client
            .create_aio_controller(request)
            .await
            .map_err(|s| Error::from_status(s, AioController::KIND, &id))?;
        response.into_inner().try_into()
    }

    async fn update(&mut self, resource: AioController) -> Result<AioController> {
        let id = resource.id.clone();
        let request = tonic::Request::new(pb::UpdateAioControllerRequest {
            aio_controller: Some(pb::AioController::try_from(resource)?),
        });
        let response = self
            .client
            .update_aio_controller(request)
            .await
            .map_err(|s| Error::from_status(s, AioController::KIND, &id))?;
        response.into_inner().try_into()
    }

    async fn list(&mut self) -> Result<Vec<AioController>> {
        let request = tonic::Request::new(pb::ListAioControllersRequest {});
        let response = self
            .client
            .list_aio_controllers(request)
            .await
            .map_err(|s| Error::from_status(s, AioController::KIND, ""))?;
        response
            .into_inner()
            .aio_controllers
            .into_iter()
            .map(AioController::try_from)
            .collect()
    }

    async fn get(&mut self, id: &str) -> Result<AioController> {
        let request = tonic::Request::new(pb::GetAioControllerRequest {
            name: id.to_string(),
        });
        let response = self
            .client
            .get_aio_controller(request)
            .await
            .map_err(|s| Error::from_status(s, AioController::KIND, id))?;
        response.into_inner().try_into()
    }

    async fn stats(&mut self, id: &str) -> Result<VolumeStats> {
        let request = tonic::Request::new(pb::AioControllerStatsRequest {
            handle: object_key(id),
        });
        let response = self
            .client
            .aio_controller_stats(request)
            .await
            .map_err(|s| Error::from_status(s, AioController::KIND, id))?;
        response
            .into_inner()
            .stats
            .ok_or_else(|| missing_stats::<AioController>(id))?
            .try_into()
    }

    async fn delete(&mut self, id: &str) -> Result<()> {
        let request = tonic::Request::new(pb::DeleteAioControllerRequest {
            name: id.to_string(),
        });
        self.client
            .delete_aio_controller(request)
            .await
            .map_err(|s| Error::from_status(s, AioController::KIND, id))?;
        Ok(())
    }
}
