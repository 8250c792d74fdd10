use hardhat_tc_config::ConfigError;
use hardhat_tc_node_interaction::RpcError;
use thiserror::Error;

/// An error reported by a [`ContainerRuntime`](crate::ContainerRuntime) implementation.
pub type RuntimeError = Box<dyn std::error::Error + Send + Sync>;

/// The reasons a node can fail to start or be reached after starting.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("The container runtime failed to start {image}")]
    Runtime {
        image: String,
        #[source]
        source: RuntimeError,
    },

    #[error("Failed to resolve the host port mapped to container port {port}")]
    PortMapping {
        port: u16,
        #[source]
        source: RuntimeError,
    },

    #[error("Failed to resolve the host the container is reachable through")]
    HostResolution(#[source] RuntimeError),

    #[error("The container is not running")]
    NotStarted,

    #[error(transparent)]
    Client(#[from] RpcError),
}

#[derive(Debug, Error)]
pub enum ShutdownError {
    #[error("The container runtime failed to stop the container")]
    Runtime(#[source] RuntimeError),

    #[error("The container was already stopped")]
    AlreadyStopped,
}
