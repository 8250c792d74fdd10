use anyhow::Context as _;
use hardhat_tc_config::{HardhatUserConfig, NetworkConfig};

/// Renders the hardhat user config the variables returned by `get` describe as pretty JSON.
pub fn render_config(get: impl Fn(&str) -> Option<String>) -> anyhow::Result<String> {
    let config = NetworkConfig::resolve(get).context("Invalid hardhat network configuration")?;
    serde_json::to_string_pretty(&HardhatUserConfig::from(config))
        .context("Failed to serialize the hardhat user config")
}

/// Prints the hardhat user config of the current process environment.
pub fn config() -> anyhow::Result<()> {
    let rendered = render_config(|name| std::env::var(name).ok())?;
    println!("{rendered}");
    Ok(())
}
