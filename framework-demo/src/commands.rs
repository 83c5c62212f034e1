//! Subcommand handlers.

use std::io::{self, Write};
use std::num::NonZeroUsize;
use std::sync::Arc;

use anyhow::{Context, Result};
use framework_adapters::openai::OpenAiAdapter;
use framework_adapters::traits::ModelAdapter;
use framework_config::DemoConfig;
use framework_demo::render;
use framework_primitives::{Mode, Strategy};
use framework_prompts::build_prompt;
use framework_runner::{DemoRunner, RunError, offline_report};
use tracing::info;

use crate::cli::Commands;
use crate::interactive;

pub async fn dispatch(command: Commands, mut config: DemoConfig) -> Result<()> {
    match command {
        Commands::Strategies => render::write_strategies(&mut io::stdout().lock())?,
        Commands::Models => render::write_models(&mut io::stdout().lock())?,
        Commands::Prompt { strategy, task } => {
            writeln!(io::stdout().lock(), "{}", build_prompt(strategy, &task)?)?;
        }
        Commands::Offline { strategy } => {
            let report = offline_report(strategy)?;
            render::write_report(&mut io::stdout().lock(), &report)?;
        }
        Commands::Online {
            strategy,
            task,
            prompt,
            model,
            temperature,
            samples,
        } => {
            if let Some(model) = model {
                config.model = model;
            }
            if let Some(temperature) = temperature {
                config.temperature = temperature;
            }
            if let Some(samples) = samples {
                config.samples = samples.get();
            }
            config.mode = Mode::Online;
            run_online(&config, strategy, &task, prompt).await?;
        }
        Commands::Interactive { mode } => {
            if let Some(mode) = mode {
                config.mode = mode;
            }
            interactive::run(config).await?;
        }
    }
    Ok(())
}

/// Builds the live adapter; a missing credential is fatal here.
pub fn connect(config: &DemoConfig) -> Result<Arc<dyn ModelAdapter>> {
    let openai = config
        .openai_config()
        .context("online mode needs an API key")?;
    info!(base_url = openai.base_url(), model = %config.model, "connecting to completion service");
    Ok(Arc::new(OpenAiAdapter::new(openai)?))
}

/// Sample count from a validated config.
pub fn sample_count(config: &DemoConfig) -> Result<NonZeroUsize> {
    NonZeroUsize::new(config.samples).context("samples must be at least 1")
}

async fn run_online(
    config: &DemoConfig,
    strategy: Strategy,
    task: &str,
    prompt: Option<String>,
) -> Result<()> {
    if task.trim().is_empty() {
        return Err(RunError::EmptyBasicPrompt.into());
    }
    let strategy_prompt = match prompt {
        Some(prompt) => prompt,
        None => build_prompt(strategy, task)?,
    };

    let adapter = connect(config)?;
    let runner = DemoRunner::new(adapter, config.completion_settings())
        .with_samples(sample_count(config)?);

    let report = runner.run(strategy, task, &strategy_prompt).await?;

    render::write_report(&mut io::stdout().lock(), &report)?;
    Ok(())
}
