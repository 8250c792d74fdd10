use std::{sync::Arc, time::Instant};

use alloy::{
    rpc::json_rpc::{RequestPacket, ResponsePacket},
    transports::{TransportError, TransportFut},
};
use tower::{Layer, Service};
use tracing::{debug, warn};

/// A layer that logs every JSON-RPC request sent to a node together with its latency.
///
/// It only observes the requests: it neither caches nor retries them.
#[derive(Clone, Debug)]
pub struct RequestTracingLayer {
    endpoint: Arc<str>,
}

impl RequestTracingLayer {
    pub fn new(endpoint: impl AsRef<str>) -> Self {
        Self {
            endpoint: endpoint.as_ref().into(),
        }
    }
}

impl<S> Layer<S> for RequestTracingLayer {
    type Service = RequestTracingService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RequestTracingService {
            service: inner,
            endpoint: self.endpoint.clone(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct RequestTracingService<S> {
    service: S,
    endpoint: Arc<str>,
}

impl<S> Service<RequestPacket> for RequestTracingService<S>
where
    S: Service<RequestPacket, Future = TransportFut<'static>, Error = TransportError>
        + Send
        + 'static
        + Clone,
{
    type Response = ResponsePacket;
    type Error = TransportError;
    type Future = TransportFut<'static>;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&mut self, req: RequestPacket) -> Self::Future {
        let method = match &req {
            RequestPacket::Single(request) => request.method().to_owned(),
            RequestPacket::Batch(requests) => format!("batch of {}", requests.len()),
        };
        let endpoint = self.endpoint.clone();
        let future = self.service.call(req);

        Box::pin(async move {
            let started = Instant::now();
            let response = future.await;
            match &response {
                Ok(_) => debug!(
                    %endpoint,
                    %method,
                    elapsed = ?started.elapsed(),
                    "Node request completed"
                ),
                Err(error) => warn!(
                    %endpoint,
                    %method,
                    %error,
                    elapsed = ?started.elapsed(),
                    "Node request failed"
                ),
            }
            response
        })
    }
}
