//! The environment variables the hardhat node container reads its network configuration from.

use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// The environment variables understood by the node container.
///
/// The serialized names are the wire contract between the launcher and the node's configuration
/// script and must never change.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
pub enum EnvironmentVariable {
    #[strum(serialize = "HARDHAT_CHAIN_ID")]
    ChainId,
    #[strum(serialize = "HARDHAT_HARDFORK")]
    Hardfork,
    #[strum(serialize = "HARDHAT_ALLOW_UNLIMITED_CONTRACT_SIZE")]
    AllowUnlimitedContractSize,
    #[strum(serialize = "HARDHAT_GAS")]
    Gas,
    #[strum(serialize = "HARDHAT_MINING_AUTO")]
    MiningAuto,
    #[strum(serialize = "HARDHAT_MINING_INTERVAL")]
    MiningInterval,
    #[strum(serialize = "HARDHAT_FORKING_ENABLED")]
    ForkingEnabled,
    #[strum(serialize = "HARDHAT_FORKING_URL")]
    ForkingUrl,
}

impl EnvironmentVariable {
    pub fn name(self) -> &'static str {
        self.into()
    }
}
