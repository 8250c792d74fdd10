use std::{collections::BTreeMap, time::Duration};

use hardhat_tc_config::{ConfigError, EnvironmentVariable, GasSetting, NetworkConfig};
use tracing::{debug, instrument};

use crate::{
    ContainerLifecycleManager, ContainerRuntime, DockerContainer, DockerRuntime, LaunchSpec,
    StartedHardhatContainer, StartupError, constants::default_image,
};

/// A builder of hardhat node containers.
///
/// Every `with_*` method writes the environment variables it covers, replacing earlier values of
/// the same variables. Nothing is validated until the container is started.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HardhatContainer {
    image: String,
    environment: BTreeMap<String, String>,
    startup_timeout: Option<Duration>,
}

impl Default for HardhatContainer {
    fn default() -> Self {
        Self {
            image: default_image(),
            environment: Default::default(),
            startup_timeout: None,
        }
    }
}

impl HardhatContainer {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    #[must_use]
    pub fn with_startup_timeout(mut self, timeout: Duration) -> Self {
        self.startup_timeout = Some(timeout);
        self
    }

    /// Sets an arbitrary environment variable of the container.
    #[must_use]
    pub fn with_env_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.environment.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_chain_id(self, chain_id: u64) -> Self {
        self.with_variable(EnvironmentVariable::ChainId, chain_id)
    }

    #[must_use]
    pub fn with_hardfork(self, hardfork: impl Into<String>) -> Self {
        self.with_variable(EnvironmentVariable::Hardfork, hardfork.into())
    }

    #[must_use]
    pub fn with_allow_unlimited_contract_size(self, allow: bool) -> Self {
        self.with_variable(EnvironmentVariable::AllowUnlimitedContractSize, allow)
    }

    #[must_use]
    pub fn with_gas(self, gas: GasSetting) -> Self {
        self.with_variable(EnvironmentVariable::Gas, gas)
    }

    /// Whether a block is mined for every submitted transaction.
    #[must_use]
    pub fn with_mining_auto(self, auto: bool) -> Self {
        self.with_variable(EnvironmentVariable::MiningAuto, auto)
    }

    /// The interval mining period in milliseconds.
    #[must_use]
    pub fn with_mining_interval(self, interval_ms: u64) -> Self {
        self.with_variable(EnvironmentVariable::MiningInterval, interval_ms)
    }

    /// Enables automine while also mining a block every `interval_ms` milliseconds.
    #[must_use]
    pub fn with_auto_mining(self, interval_ms: u64) -> Self {
        self.with_mining_auto(true).with_mining_interval(interval_ms)
    }

    /// Forks the chain served at `url`.
    #[must_use]
    pub fn with_forking(self, url: impl Into<String>) -> Self {
        self.with_variable(EnvironmentVariable::ForkingEnabled, true)
            .with_variable(EnvironmentVariable::ForkingUrl, url.into())
    }

    /// Writes every variable of the network configuration.
    #[must_use]
    pub fn with_network_config(self, config: &NetworkConfig) -> Self {
        config
            .to_environment()
            .into_iter()
            .fold(self, |builder, (variable, value)| {
                builder.with_variable(variable, value)
            })
    }

    fn with_variable(self, variable: EnvironmentVariable, value: impl ToString) -> Self {
        self.with_env_var(variable.name(), value.to_string())
    }

    pub fn environment(&self) -> &BTreeMap<String, String> {
        &self.environment
    }

    /// Resolves the network configuration the node would resolve from this environment.
    pub fn validate(&self) -> Result<NetworkConfig, ConfigError> {
        NetworkConfig::resolve(|name| self.environment.get(name).cloned())
    }

    pub fn build(&self) -> LaunchSpec {
        LaunchSpec {
            image: self.image.clone(),
            environment: self.environment.clone(),
            startup_timeout: self.startup_timeout,
            ..Default::default()
        }
    }

    /// Starts the node on the local Docker daemon.
    pub async fn start(self) -> Result<StartedHardhatContainer<DockerContainer>, StartupError> {
        self.start_with(&ContainerLifecycleManager::new(DockerRuntime))
            .await
    }

    /// Starts the node through `manager`. An invalid configuration fails before the runtime is
    /// asked to launch anything.
    #[instrument(level = "info", skip_all, fields(image = %self.image), err)]
    pub async fn start_with<R: ContainerRuntime>(
        self,
        manager: &ContainerLifecycleManager<R>,
    ) -> Result<StartedHardhatContainer<R::Container>, StartupError> {
        let config = self.validate()?;
        debug!(?config, "Resolved the network configuration");
        let handle = manager.start(self.build()).await?;
        StartedHardhatContainer::new(handle).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{constants::HARDHAT_VERSION, mock::MockRuntime};

    #[test]
    fn default_builder_uses_the_pinned_image_and_no_variables() {
        // Act
        let spec = HardhatContainer::new().build();

        // Assert
        assert_eq!(
            spec.image,
            format!("ghcr.io/fuxingloh/hardhat-container:{HARDHAT_VERSION}")
        );
        assert!(spec.environment.is_empty());
        assert_eq!(spec.exposed_port, 8545);
        assert_eq!(
            spec.readiness_signal,
            "Started HTTP and WebSocket JSON-RPC server at"
        );
    }

    #[test]
    fn forking_is_absent_unless_requested() {
        // Act
        let spec = HardhatContainer::new()
            .with_chain_id(1337)
            .with_mining_auto(true)
            .build();

        // Assert
        assert!(!spec.environment.contains_key("HARDHAT_FORKING_ENABLED"));
        assert!(!spec.environment.contains_key("HARDHAT_FORKING_URL"));
    }

    #[test]
    fn forking_writes_both_variables() {
        // Act
        let spec = HardhatContainer::new()
            .with_forking("https://rpc.example")
            .build();

        // Assert
        assert_eq!(spec.environment["HARDHAT_FORKING_ENABLED"], "true");
        assert_eq!(spec.environment["HARDHAT_FORKING_URL"], "https://rpc.example");
    }

    #[test]
    fn non_conflicting_calls_commute() {
        // Act
        let first = HardhatContainer::new()
            .with_chain_id(1)
            .with_mining_interval(2000)
            .with_allow_unlimited_contract_size(false);
        let second = HardhatContainer::new()
            .with_allow_unlimited_contract_size(false)
            .with_mining_interval(2000)
            .with_chain_id(1);

        // Assert
        assert_eq!(first.build(), second.build());
    }

    #[test]
    fn repeated_calls_are_idempotent_and_last_write_wins() {
        // Act
        let repeated = HardhatContainer::new().with_chain_id(5).with_chain_id(5);
        let overwritten = HardhatContainer::new().with_chain_id(5).with_chain_id(7);

        // Assert
        assert_eq!(repeated.build(), HardhatContainer::new().with_chain_id(5).build());
        assert_eq!(overwritten.environment()["HARDHAT_CHAIN_ID"], "7");
    }

    #[test]
    fn auto_mining_sets_automine_and_interval() {
        // Act
        let spec = HardhatContainer::new().with_auto_mining(2000).build();

        // Assert
        assert_eq!(spec.environment["HARDHAT_MINING_AUTO"], "true");
        assert_eq!(spec.environment["HARDHAT_MINING_INTERVAL"], "2000");
    }

    #[test]
    fn network_config_round_trips_through_the_environment() {
        // Arrange
        let config = NetworkConfig {
            chain_id: 10,
            hardfork: Some("cancun".to_owned()),
            gas: GasSetting::Fixed(30_000_000),
            ..Default::default()
        };

        // Act
        let resolved = HardhatContainer::new()
            .with_network_config(&config)
            .validate()
            .unwrap();

        // Assert
        assert_eq!(resolved, config);
    }

    #[tokio::test]
    async fn forking_without_url_fails_before_the_runtime_is_touched() {
        // Arrange
        let runtime = MockRuntime::new();
        let manager = ContainerLifecycleManager::new(runtime.clone());
        let builder = HardhatContainer::new().with_env_var("HARDHAT_FORKING_ENABLED", "true");

        // Act
        let result = builder.start_with(&manager).await;

        // Assert
        assert!(matches!(
            result,
            Err(StartupError::Config(ConfigError::MissingForkingUrl))
        ));
        assert!(runtime.launched().is_empty());
    }

    #[tokio::test]
    async fn malformed_numbers_fail_before_the_runtime_is_touched() {
        // Arrange
        let runtime = MockRuntime::new();
        let manager = ContainerLifecycleManager::new(runtime.clone());
        let builder = HardhatContainer::new().with_env_var("HARDHAT_CHAIN_ID", "one");

        // Act
        let result = builder.start_with(&manager).await;

        // Assert
        assert!(matches!(
            result,
            Err(StartupError::Config(ConfigError::InvalidNumber { .. }))
        ));
        assert!(runtime.launched().is_empty());
    }

    #[tokio::test]
    async fn started_container_receives_the_built_spec() {
        // Arrange
        let runtime = MockRuntime::new();
        let manager = ContainerLifecycleManager::new(runtime.clone());
        let builder = HardhatContainer::new()
            .with_chain_id(1337)
            .with_startup_timeout(Duration::from_secs(30));
        let expected = builder.build();

        // Act
        let started = builder.start_with(&manager).await.unwrap();

        // Assert
        assert_eq!(runtime.launched(), vec![expected]);
        assert_eq!(started.host_rpc_endpoint(None), "http://localhost:32768");
    }
}
