use std::{collections::BTreeMap, time::Duration};

use crate::constants::{RPC_PORT, READINESS_SIGNAL, default_image};

/// Everything a [`ContainerRuntime`](crate::ContainerRuntime) needs to launch one node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LaunchSpec {
    pub image: String,
    pub environment: BTreeMap<String, String>,
    pub exposed_port: u16,

    /// The substring of a log line marking the node as ready.
    pub readiness_signal: String,

    /// How long the runtime waits for the readiness signal. [`None`] leaves it to the runtime.
    pub startup_timeout: Option<Duration>,
}

impl Default for LaunchSpec {
    fn default() -> Self {
        Self {
            image: default_image(),
            environment: Default::default(),
            exposed_port: RPC_PORT,
            readiness_signal: READINESS_SIGNAL.to_owned(),
            startup_timeout: None,
        }
    }
}
