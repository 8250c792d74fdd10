use std::{borrow::Cow, time::Duration};

use alloy::{
    primitives::{BlockNumber, TxHash},
    transports::TransportError,
};
use thiserror::Error;

/// A failed interaction with a node.
///
/// Transport failures and errors reported by the node are surfaced as they are, nothing in this
/// crate retries a request.
#[derive(Debug, Error)]
pub enum RpcError {
    #[error("The {method} request failed")]
    Transport {
        method: Cow<'static, str>,
        #[source]
        source: TransportError,
    },

    #[error("Failed to decode the response of the {method} request")]
    Decode {
        method: Cow<'static, str>,
        #[source]
        source: serde_json::Error,
    },

    #[error("The node endpoint {url} is not a valid URL")]
    InvalidEndpoint {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Transaction {0} is unknown to the node")]
    MissingTransaction(TxHash),

    #[error("The node did not reach block {target} within {timeout:?}")]
    BlockTimeout { target: BlockNumber, timeout: Duration },
}
