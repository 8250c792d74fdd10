use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// The host-visible address of a node's JSON-RPC port.
///
/// Only ever produced after the container runtime reported the port mapping of a started node.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Endpoint {
    pub host: String,
    pub port: u16,
}

impl Endpoint {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Returns a copy of this endpoint reachable through a different host name, keeping the
    /// mapped port.
    pub fn with_host(&self, host: impl Into<String>) -> Self {
        Self::new(host, self.port)
    }

    /// The `http://{host}:{port}` URL of the endpoint.
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}
