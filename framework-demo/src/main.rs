//! `framework-demo` binary.

mod cli;
mod commands;
mod interactive;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use framework_telemetry::tracing_support;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    framework_config::load_dotenv();

    let cli = Cli::parse();
    tracing_support::init(cli.verbose);

    let config = framework_config::load(cli.config.as_deref()).context("loading configuration")?;

    commands::dispatch(cli.command, config).await
}
