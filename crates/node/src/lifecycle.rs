use hardhat_tc_common::types::Endpoint;
use tracing::{info, instrument};

use crate::{
    ContainerRuntime, DockerRuntime, LaunchSpec, RuntimeContainer, ShutdownError, StartupError,
};

/// The lifecycle stage of a [`ContainerHandle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
pub enum ContainerState {
    Started,
    Stopped,
}

enum HandleState<C> {
    Started(C),
    Stopped,
}

/// The exclusive owner of one launched container.
///
/// The created stage only exists inside [`ContainerLifecycleManager::start`]: a handle is handed
/// out once the runtime reported the container ready, moves to stopped, and is never reused.
pub struct ContainerHandle<C> {
    spec: LaunchSpec,
    state: HandleState<C>,
}

impl<C: RuntimeContainer> ContainerHandle<C> {
    fn started(spec: LaunchSpec, container: C) -> Self {
        Self {
            spec,
            state: HandleState::Started(container),
        }
    }

    pub fn state(&self) -> ContainerState {
        match self.state {
            HandleState::Started(_) => ContainerState::Started,
            HandleState::Stopped => ContainerState::Stopped,
        }
    }

    pub fn launch_spec(&self) -> &LaunchSpec {
        &self.spec
    }

    /// The runtime id of the container while it's running.
    pub fn id(&self) -> Option<&str> {
        match &self.state {
            HandleState::Started(container) => Some(container.id()),
            _ => None,
        }
    }

    /// The endpoint the JSON-RPC port of the container is published on. The host defaults to the
    /// one reported by the runtime, the port is always the runtime mapping of the exposed port.
    pub async fn endpoint(&self, host: Option<&str>) -> Result<Endpoint, StartupError> {
        let HandleState::Started(container) = &self.state else {
            return Err(StartupError::NotStarted);
        };

        let host = match host {
            Some(host) => host.to_owned(),
            None => container
                .host()
                .await
                .map_err(StartupError::HostResolution)?,
        };
        let port = container
            .mapped_port(self.spec.exposed_port)
            .await
            .map_err(|source| StartupError::PortMapping {
                port: self.spec.exposed_port,
                source,
            })?;
        Ok(Endpoint::new(host, port))
    }

    /// Stops the container. The handle is stopped afterwards even when the runtime reported an
    /// error, stopping again only reports [`ShutdownError::AlreadyStopped`].
    #[instrument(level = "info", skip_all, fields(id = self.id()), err)]
    pub async fn stop(&mut self) -> Result<(), ShutdownError> {
        match std::mem::replace(&mut self.state, HandleState::Stopped) {
            HandleState::Started(container) => {
                container.stop().await.map_err(ShutdownError::Runtime)?;
                info!(id = container.id(), "Stopped the container");
                Ok(())
            }
            HandleState::Stopped => Err(ShutdownError::AlreadyStopped),
        }
    }
}

/// Starts containers on a [`ContainerRuntime`].
#[derive(Clone, Debug, Default)]
pub struct ContainerLifecycleManager<R = DockerRuntime> {
    runtime: R,
}

impl<R: ContainerRuntime> ContainerLifecycleManager<R> {
    pub fn new(runtime: R) -> Self {
        Self { runtime }
    }

    pub fn runtime(&self) -> &R {
        &self.runtime
    }

    /// Launches the container of `spec`, waiting until it reported readiness. A failed launch
    /// is returned as is and never retried.
    #[instrument(level = "info", skip_all, fields(image = %spec.image), err)]
    pub async fn start(
        &self,
        spec: LaunchSpec,
    ) -> Result<ContainerHandle<R::Container>, StartupError> {
        let container = self
            .runtime
            .start(&spec)
            .await
            .map_err(|source| StartupError::Runtime {
                image: spec.image.clone(),
                source,
            })?;
        info!(id = container.id(), "Started the container");
        Ok(ContainerHandle::started(spec, container))
    }
}
