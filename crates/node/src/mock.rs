use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use crate::{ContainerRuntime, LaunchSpec, RuntimeContainer, RuntimeError};

/// A runtime that launches nothing, recording the specs it was asked to start and the stops of
/// the containers it handed out.
#[derive(Clone, Debug)]
pub(crate) struct MockRuntime {
    host: String,
    port: u16,
    fail: bool,
    launched: Arc<Mutex<Vec<LaunchSpec>>>,
    stops: Arc<AtomicUsize>,
}

impl MockRuntime {
    pub(crate) fn new() -> Self {
        Self {
            host: "localhost".to_owned(),
            port: 32768,
            fail: false,
            launched: Default::default(),
            stops: Default::default(),
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    pub(crate) fn launched(&self) -> Vec<LaunchSpec> {
        self.launched.lock().unwrap().clone()
    }

    pub(crate) fn stops(&self) -> usize {
        self.stops.load(Ordering::SeqCst)
    }
}

impl ContainerRuntime for MockRuntime {
    type Container = MockContainer;

    async fn start(&self, spec: &LaunchSpec) -> Result<Self::Container, RuntimeError> {
        let mut launched = self.launched.lock().unwrap();
        launched.push(spec.clone());
        if self.fail {
            return Err("the image could not be pulled".into());
        }
        Ok(MockContainer {
            id: format!("mock-{}", launched.len()),
            host: self.host.clone(),
            internal_port: spec.exposed_port,
            port: self.port,
            stops: self.stops.clone(),
        })
    }
}

#[derive(Debug)]
pub(crate) struct MockContainer {
    id: String,
    host: String,
    internal_port: u16,
    port: u16,
    stops: Arc<AtomicUsize>,
}

impl RuntimeContainer for MockContainer {
    fn id(&self) -> &str {
        &self.id
    }

    async fn host(&self) -> Result<String, RuntimeError> {
        Ok(self.host.clone())
    }

    async fn mapped_port(&self, internal_port: u16) -> Result<u16, RuntimeError> {
        match internal_port == self.internal_port {
            true => Ok(self.port),
            false => Err(format!("port {internal_port} is not exposed").into()),
        }
    }

    async fn stop(&self) -> Result<(), RuntimeError> {
        self.stops.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
