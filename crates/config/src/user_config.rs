use serde::Serialize;

use crate::NetworkConfig;

/// The hardhat user configuration the node's configuration script exports, restricted to the
/// `hardhat` network.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HardhatUserConfig {
    pub networks: Networks,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Networks {
    pub hardhat: NetworkConfig,
}

impl From<NetworkConfig> for HardhatUserConfig {
    fn from(hardhat: NetworkConfig) -> Self {
        Self {
            networks: Networks { hardhat },
        }
    }
}
