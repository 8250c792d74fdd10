use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use hardhat_tc_config::GasSetting;
use hardhat_tc_node::HardhatContainer;

#[derive(Debug, Parser)]
#[command(name = "hardhat-devnode", version, about, arg_required_else_help = true)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolves the `HARDHAT_*` variables of the current environment and prints the hardhat user
    /// config they describe.
    Config,

    /// Starts a hardhat node and keeps it running until interrupted.
    Run(RunArguments),
}

#[derive(Clone, Debug, Default, Args)]
pub struct RunArguments {
    /// The image to run instead of the pinned hardhat release.
    #[arg(long)]
    pub image: Option<String>,

    #[arg(long)]
    pub chain_id: Option<u64>,

    #[arg(long)]
    pub hardfork: Option<String>,

    /// Whether a block is mined for every submitted transaction.
    #[arg(long)]
    pub mining_auto: Option<bool>,

    /// The interval mining period, `0` disables interval mining.
    #[arg(long, value_name = "MILLISECONDS")]
    pub mining_interval: Option<u64>,

    /// The JSON-RPC URL of the chain to fork.
    #[arg(long)]
    pub fork_url: Option<String>,

    #[arg(long)]
    pub allow_unlimited_contract_size: Option<bool>,

    /// The block gas limit, either `auto` or a number.
    #[arg(long)]
    pub gas: Option<GasSetting>,

    /// How long to wait for the node to report readiness.
    #[arg(long, value_name = "MILLISECONDS")]
    pub startup_timeout_ms: Option<u64>,

    /// The host to print the endpoint with instead of the one reported by Docker.
    #[arg(long)]
    pub host: Option<String>,
}

impl RunArguments {
    /// The container builder the arguments describe. Options that weren't given are left to the
    /// node's defaults.
    pub fn container(&self) -> HardhatContainer {
        let mut container = HardhatContainer::new();
        if let Some(image) = self.image.as_ref() {
            container = container.with_image(image);
        }
        if let Some(chain_id) = self.chain_id {
            container = container.with_chain_id(chain_id);
        }
        if let Some(hardfork) = self.hardfork.as_ref() {
            container = container.with_hardfork(hardfork);
        }
        if let Some(auto) = self.mining_auto {
            container = container.with_mining_auto(auto);
        }
        if let Some(interval) = self.mining_interval {
            container = container.with_mining_interval(interval);
        }
        if let Some(url) = self.fork_url.as_ref() {
            container = container.with_forking(url);
        }
        if let Some(allow) = self.allow_unlimited_contract_size {
            container = container.with_allow_unlimited_contract_size(allow);
        }
        if let Some(gas) = self.gas {
            container = container.with_gas(gas);
        }
        if let Some(timeout) = self.startup_timeout_ms {
            container = container.with_startup_timeout(Duration::from_millis(timeout));
        }
        container
    }
}
