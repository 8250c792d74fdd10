use hardhat_tc_common::types::Endpoint;
use hardhat_tc_node_interaction::{HardhatClient, RpcClientFactory, RpcError};
use tracing::info;

use crate::{ContainerHandle, DockerContainer, RuntimeContainer, ShutdownError, StartupError};

/// A started hardhat node together with a client connected to it.
pub struct StartedHardhatContainer<C = DockerContainer> {
    handle: ContainerHandle<C>,
    endpoint: Endpoint,
    client: HardhatClient,
}

impl<C: RuntimeContainer> StartedHardhatContainer<C> {
    pub(crate) async fn new(handle: ContainerHandle<C>) -> Result<Self, StartupError> {
        let endpoint = handle.endpoint(None).await?;
        let client = RpcClientFactory::create(&endpoint)?;
        info!(id = handle.id(), %endpoint, "Hardhat node is ready");
        Ok(Self {
            handle,
            endpoint,
            client,
        })
    }

    pub fn handle(&self) -> &ContainerHandle<C> {
        &self.handle
    }

    /// The endpoint as reachable through the host reported by the runtime.
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// The client created for the runtime reported host.
    pub fn client(&self) -> &HardhatClient {
        &self.client
    }

    /// The `http://{host}:{port}` URL of the JSON-RPC server, `host` defaulting to the one reported
    /// by the runtime.
    pub fn host_rpc_endpoint(&self, host: Option<&str>) -> String {
        self.endpoint_through(host).url()
    }

    /// Creates another client, reaching the node through `host` when given.
    pub fn create_client(&self, host: Option<&str>) -> Result<HardhatClient, RpcError> {
        RpcClientFactory::create(&self.endpoint_through(host))
    }

    pub async fn stop(&mut self) -> Result<(), ShutdownError> {
        self.handle.stop().await
    }

    fn endpoint_through(&self, host: Option<&str>) -> Endpoint {
        match host {
            Some(host) => self.endpoint.with_host(host),
            None => self.endpoint.clone(),
        }
    }
}
