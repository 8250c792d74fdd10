use testcontainers::{
    ContainerAsync, ContainerRequest, GenericImage, ImageExt,
    core::{IntoContainerPort, WaitFor},
    runners::AsyncRunner,
};
use tracing::debug;

use crate::{ContainerRuntime, LaunchSpec, RuntimeContainer, RuntimeError};

/// Launches nodes on the local Docker daemon through `testcontainers`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DockerRuntime;

impl ContainerRuntime for DockerRuntime {
    type Container = DockerContainer;

    fn start(
        &self,
        spec: &LaunchSpec,
    ) -> impl Future<Output = Result<Self::Container, RuntimeError>> + Send {
        let request = container_request(spec);
        async move {
            let container = request.start().await?;
            debug!(id = container.id(), "Docker container started");
            Ok(DockerContainer { container })
        }
    }
}

/// A running Docker container. Dropping it removes the container.
#[derive(Debug)]
pub struct DockerContainer {
    container: ContainerAsync<GenericImage>,
}

impl RuntimeContainer for DockerContainer {
    fn id(&self) -> &str {
        self.container.id()
    }

    async fn host(&self) -> Result<String, RuntimeError> {
        let host = self.container.get_host().await?;
        Ok(host.to_string())
    }

    async fn mapped_port(&self, internal_port: u16) -> Result<u16, RuntimeError> {
        Ok(self.container.get_host_port_ipv4(internal_port).await?)
    }

    async fn stop(&self) -> Result<(), RuntimeError> {
        Ok(self.container.stop().await?)
    }
}

fn container_request(spec: &LaunchSpec) -> ContainerRequest<GenericImage> {
    let (name, tag) = split_image_reference(&spec.image);
    let image = GenericImage::new(name, tag)
        .with_exposed_port(spec.exposed_port.tcp())
        .with_wait_for(WaitFor::message_on_stdout(spec.readiness_signal.as_str()));

    let mut request = ContainerRequest::from(image);
    for (key, value) in spec.environment.iter() {
        request = request.with_env_var(key, value);
    }
    if let Some(timeout) = spec.startup_timeout {
        request = request.with_startup_timeout(timeout);
    }
    request
}

/// Splits an image reference into its name and tag, the tag defaulting to `latest`. A colon
/// followed by a path is the port of a registry rather than a tag.
fn split_image_reference(reference: &str) -> (&str, &str) {
    match reference.rsplit_once(':') {
        Some((name, tag)) if !tag.contains('/') => (name, tag),
        _ => (reference, "latest"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_reference_with_tag_is_split() {
        assert_eq!(
            split_image_reference("ghcr.io/fuxingloh/hardhat-container:2.22.3"),
            ("ghcr.io/fuxingloh/hardhat-container", "2.22.3")
        );
    }

    #[test]
    fn image_reference_without_tag_uses_latest() {
        assert_eq!(
            split_image_reference("localhost:5000/hardhat"),
            ("localhost:5000/hardhat", "latest")
        );
        assert_eq!(split_image_reference("hardhat"), ("hardhat", "latest"));
    }
}
