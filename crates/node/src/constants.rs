/// The hardhat release the default image is pinned to.
pub const HARDHAT_VERSION: &str = "2.22.3";

/// The repository of the hardhat node images, tagged by hardhat version.
pub const IMAGE_REPOSITORY: &str = "ghcr.io/fuxingloh/hardhat-container";

/// The port the node serves JSON-RPC on inside the container.
pub const RPC_PORT: u16 = 8545;

/// The log line the node prints once its JSON-RPC server accepts requests.
pub const READINESS_SIGNAL: &str = "Started HTTP and WebSocket JSON-RPC server at";

/// The image reference of the pinned hardhat release.
pub fn default_image() -> String {
    format!("{IMAGE_REPOSITORY}:{HARDHAT_VERSION}")
}
