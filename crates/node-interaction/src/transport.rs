use std::{borrow::Cow, fmt::Debug, pin::Pin};

use alloy::rpc::client::{ClientBuilder, RpcClient};
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::{RequestTracingLayer, RpcError};

/// A JSON-RPC transport bound to a single node.
///
/// Implementations send the request as-is and hand back the `result` member of the response. They
/// must not cache responses: chain state changes through test actions the transport can't see.
pub trait RpcTransport: Send + Sync {
    fn request(
        &self,
        method: Cow<'static, str>,
        params: Value,
    ) -> Pin<Box<dyn Future<Output = Result<Value, RpcError>> + Send + '_>>;
}

/// The HTTP transport used to talk to a started node.
#[derive(Clone)]
pub struct HttpTransport {
    url: Url,
    client: RpcClient,
}

impl HttpTransport {
    pub fn new(url: Url) -> Self {
        let client = ClientBuilder::default()
            .layer(RequestTracingLayer::new(url.as_str()))
            .http(url.clone());
        Self { url, client }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("url", &self.url.as_str())
            .finish_non_exhaustive()
    }
}

impl RpcTransport for HttpTransport {
    fn request(
        &self,
        method: Cow<'static, str>,
        params: Value,
    ) -> Pin<Box<dyn Future<Output = Result<Value, RpcError>> + Send + '_>> {
        Box::pin(async move {
            self.client
                .request::<_, Value>(method.clone(), params)
                .await
                .map_err(|source| RpcError::Transport { method, source })
        })
    }
}

/// Sends a request over the transport and decodes its result.
pub(crate) async fn dispatch<R: DeserializeOwned>(
    transport: &dyn RpcTransport,
    method: &'static str,
    params: Value,
) -> Result<R, RpcError> {
    let result = transport.request(Cow::Borrowed(method), params).await?;
    serde_json::from_value(result).map_err(|source| RpcError::Decode {
        method: Cow::Borrowed(method),
        source,
    })
}

/// Sends a request over the transport, discarding whatever the node returned.
///
/// Used for the node-control methods whose result is an acknowledgement (`true`, `null`, or a
/// method specific string) with nothing to act upon.
pub(crate) async fn dispatch_ignoring_result(
    transport: &dyn RpcTransport,
    method: &'static str,
    params: Value,
) -> Result<(), RpcError> {
    transport
        .request(Cow::Borrowed(method), params)
        .await
        .map(|_| ())
}
