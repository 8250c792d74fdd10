//! The network configuration of a hardhat development node.
//!
//! [`NetworkConfig`] is the typed source of truth. The environment variables in
//! [`EnvironmentVariable`] are only the serialization boundary towards the node container: the
//! launcher writes them through [`NetworkConfig::to_environment`] and the node side reads them back
//! through [`NetworkConfig::resolve`].

use std::{collections::BTreeMap, fmt::Display, str::FromStr};

use serde::{Serialize, Serializer};
use thiserror::Error;

mod environment;
mod error;
mod user_config;

pub use environment::*;
pub use error::*;
pub use user_config::*;

/// The chain id used when `HARDHAT_CHAIN_ID` isn't set.
pub const DEFAULT_CHAIN_ID: u64 = 31337;

/// The interval mining period used when `HARDHAT_MINING_INTERVAL` isn't set.
pub const DEFAULT_MINING_INTERVAL_MS: u64 = 6_000;

/// The configuration of the `hardhat` network of a development node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkConfig {
    pub chain_id: u64,

    /// Omitted entirely when not configured so the node picks its own default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hardfork: Option<String>,

    pub allow_unlimited_contract_size: bool,

    pub gas: GasSetting,

    pub mining: MiningConfig,

    /// Only ever present when forking is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forking: Option<ForkingConfig>,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            chain_id: DEFAULT_CHAIN_ID,
            hardfork: None,
            allow_unlimited_contract_size: true,
            gas: GasSetting::Auto,
            mining: MiningConfig::default(),
            forking: None,
        }
    }
}

impl NetworkConfig {
    /// Resolves the network configuration from an environment lookup function.
    ///
    /// Unset and empty numeric variables fall back to their defaults. Numbers are read as decimal
    /// or as `0x` prefixed hexadecimal integers, exponent and fractional notations are rejected.
    /// Booleans are `true` only when their lowercase value is `"true"`, and enabling forking
    /// without a URL is an error.
    pub fn resolve(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let lookup = |variable: EnvironmentVariable| get(variable.name());

        let chain_id = parse_number(
            EnvironmentVariable::ChainId,
            lookup(EnvironmentVariable::ChainId),
            DEFAULT_CHAIN_ID,
        )?;
        let hardfork = non_empty(lookup(EnvironmentVariable::Hardfork));
        let allow_unlimited_contract_size = parse_boolean(
            lookup(EnvironmentVariable::AllowUnlimitedContractSize),
            true,
        );
        let gas = match non_empty(lookup(EnvironmentVariable::Gas)) {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidGas {
                variable: EnvironmentVariable::Gas,
                value,
            })?,
            None => GasSetting::Auto,
        };
        let mining = MiningConfig {
            auto: parse_boolean(lookup(EnvironmentVariable::MiningAuto), false),
            interval_ms: parse_number(
                EnvironmentVariable::MiningInterval,
                lookup(EnvironmentVariable::MiningInterval),
                DEFAULT_MINING_INTERVAL_MS,
            )?,
        };

        let forking = match parse_boolean(lookup(EnvironmentVariable::ForkingEnabled), false) {
            true => {
                let url = non_empty(lookup(EnvironmentVariable::ForkingUrl))
                    .ok_or(ConfigError::MissingForkingUrl)?;
                Some(ForkingConfig::new(url))
            }
            false => None,
        };

        Ok(Self {
            chain_id,
            hardfork,
            allow_unlimited_contract_size,
            gas,
            mining,
            forking,
        })
    }

    /// Resolves the network configuration from the environment of the current process.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(|name| std::env::var(name).ok())
    }

    /// Serializes the configuration into the environment variables consumed by the node.
    pub fn to_environment(&self) -> BTreeMap<EnvironmentVariable, String> {
        let mut environment = BTreeMap::new();
        environment.insert(EnvironmentVariable::ChainId, self.chain_id.to_string());
        if let Some(hardfork) = self.hardfork.as_ref() {
            environment.insert(EnvironmentVariable::Hardfork, hardfork.clone());
        }
        environment.insert(
            EnvironmentVariable::AllowUnlimitedContractSize,
            self.allow_unlimited_contract_size.to_string(),
        );
        environment.insert(EnvironmentVariable::Gas, self.gas.to_string());
        environment.insert(EnvironmentVariable::MiningAuto, self.mining.auto.to_string());
        environment.insert(
            EnvironmentVariable::MiningInterval,
            self.mining.interval_ms.to_string(),
        );
        environment.insert(
            EnvironmentVariable::ForkingEnabled,
            self.forking.is_some().to_string(),
        );
        if let Some(forking) = self.forking.as_ref() {
            environment.insert(EnvironmentVariable::ForkingUrl, forking.url.clone());
        }
        environment
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MiningConfig {
    /// Whether a block is mined for every submitted transaction.
    pub auto: bool,

    /// The interval mining period in milliseconds, `0` disables interval mining. The timer runs
    /// inside the node, nothing on the launcher side observes it.
    #[serde(rename = "interval")]
    pub interval_ms: u64,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            auto: false,
            interval_ms: DEFAULT_MINING_INTERVAL_MS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ForkingConfig {
    enabled: bool,
    pub url: String,
}

impl ForkingConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            enabled: true,
            url: url.into(),
        }
    }
}

/// The block gas limit policy of the node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GasSetting {
    /// Let the node estimate the gas of every transaction.
    #[default]
    Auto,
    /// Use a fixed gas limit for every transaction.
    Fixed(u64),
}

impl Display for GasSetting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::Fixed(gas) => Display::fmt(gas, f),
        }
    }
}

impl FromStr for GasSetting {
    type Err = InvalidGasSetting;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("auto") {
            return Ok(Self::Auto);
        }
        trimmed
            .parse()
            .map(Self::Fixed)
            .map_err(|_| InvalidGasSetting(s.to_owned()))
    }
}

impl Serialize for GasSetting {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Auto => serializer.serialize_str("auto"),
            Self::Fixed(gas) => serializer.serialize_u64(*gas),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("expected a base-10 integer or \"auto\", got {0:?}")]
pub struct InvalidGasSetting(pub String);

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

fn parse_number(
    variable: EnvironmentVariable,
    value: Option<String>,
    default: u64,
) -> Result<u64, ConfigError> {
    let Some(value) = non_empty(value) else {
        return Ok(default);
    };
    let trimmed = value.trim();
    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(digits) => u64::from_str_radix(digits, 16),
        None => trimmed.parse(),
    };
    parsed.map_err(|_| ConfigError::InvalidNumber { variable, value })
}

fn parse_boolean(value: Option<String>, default: bool) -> bool {
    value.map_or(default, |value| value.to_lowercase() == "true")
}
