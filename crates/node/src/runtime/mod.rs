//! The container runtimes nodes are launched on.

mod docker;

pub use docker::*;

use crate::{LaunchSpec, RuntimeError};

/// Something that can launch the container described by a [`LaunchSpec`].
pub trait ContainerRuntime: Send + Sync {
    type Container: RuntimeContainer;

    /// Launches the container, only returning once the readiness signal of the [`LaunchSpec`]
    /// appeared in the container logs.
    fn start(
        &self,
        spec: &LaunchSpec,
    ) -> impl Future<Output = Result<Self::Container, RuntimeError>> + Send;
}

/// A container launched by a [`ContainerRuntime`].
pub trait RuntimeContainer: Send + Sync {
    fn id(&self) -> &str;

    /// The host the mapped ports of the container are reachable through.
    fn host(&self) -> impl Future<Output = Result<String, RuntimeError>> + Send;

    /// The host port `internal_port` of the container is published on.
    fn mapped_port(
        &self,
        internal_port: u16,
    ) -> impl Future<Output = Result<u16, RuntimeError>> + Send;

    fn stop(&self) -> impl Future<Output = Result<(), RuntimeError>> + Send;
}
