use thiserror::Error;

use crate::EnvironmentVariable;

/// A network configuration that must not be used to launch a node.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{variable} must be a base-10 integer, got {value:?}")]
    InvalidNumber {
        variable: EnvironmentVariable,
        value: String,
    },

    #[error("{variable} must be a base-10 integer or \"auto\", got {value:?}")]
    InvalidGas {
        variable: EnvironmentVariable,
        value: String,
    },

    #[error(
        "forking enabled but no URL provided: {} is required when {} is true",
        EnvironmentVariable::ForkingUrl,
        EnvironmentVariable::ForkingEnabled
    )]
    MissingForkingUrl,
}
