use std::{
    borrow::Cow,
    collections::{HashMap, VecDeque},
    pin::Pin,
    sync::{Arc, Mutex},
};

use alloy::transports::TransportErrorKind;
use serde_json::Value;

use crate::{RpcError, RpcTransport};

/// A transport answering from scripted responses and recording every request it receives.
///
/// Responses of a method are handed out in order, the last one repeating once the others are used
/// up. Methods without any response fail as a transport error.
#[derive(Default)]
pub(crate) struct MockTransport {
    responses: Mutex<HashMap<String, VecDeque<Value>>>,
    requests: Mutex<Vec<(String, Value)>>,
}

impl MockTransport {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn respond(self: Arc<Self>, method: &str, response: Value) -> Arc<Self> {
        self.responses
            .lock()
            .unwrap()
            .entry(method.to_owned())
            .or_default()
            .push_back(response);
        self
    }

    pub(crate) fn requests(&self) -> Vec<(String, Value)> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn methods(&self) -> Vec<String> {
        self.requests().into_iter().map(|(method, _)| method).collect()
    }

    pub(crate) fn count(&self, method: &str) -> usize {
        self.methods().into_iter().filter(|m| *m == method).count()
    }
}

impl RpcTransport for MockTransport {
    fn request(
        &self,
        method: Cow<'static, str>,
        params: Value,
    ) -> Pin<Box<dyn Future<Output = Result<Value, RpcError>> + Send + '_>> {
        self.requests
            .lock()
            .unwrap()
            .push((method.to_string(), params));
        let response = {
            let mut responses = self.responses.lock().unwrap();
            responses.get_mut(method.as_ref()).and_then(|queue| match queue.len() {
                0 => None,
                1 => queue.front().cloned(),
                _ => queue.pop_front(),
            })
        };
        Box::pin(async move {
            response.ok_or_else(|| {
                let source =
                    TransportErrorKind::custom_str(&format!("no scripted response for {method}"));
                RpcError::Transport { method, source }
            })
        })
    }
}
