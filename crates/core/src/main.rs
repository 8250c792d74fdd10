use anyhow::Context as _;
use clap::Parser;
use hardhat_tc_core::{
    arguments::{Arguments, Command},
    commands,
};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    let arguments = Arguments::parse();
    match arguments.command {
        Command::Config => commands::config(),
        Command::Run(run) => tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .context("Failed building the Runtime")?
            .block_on(commands::run(run)),
    }
}
