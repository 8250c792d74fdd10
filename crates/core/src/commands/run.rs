use anyhow::Context as _;
use tracing::info;

use crate::arguments::RunArguments;

/// Starts a node, prints its endpoint and stops it again once Ctrl-C was received.
pub async fn run(arguments: RunArguments) -> anyhow::Result<()> {
    let mut container = arguments
        .container()
        .start()
        .await
        .context("Failed to start the hardhat node")?;
    println!("{}", container.host_rpc_endpoint(arguments.host.as_deref()));

    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for Ctrl-C")?;
    info!("Stopping the hardhat node");
    container
        .stop()
        .await
        .context("Failed to stop the hardhat node")
}
