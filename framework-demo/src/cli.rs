//! Command-line interface.

use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use framework_primitives::{Mode, ModelId, Strategy, Temperature};

#[derive(Parser, Debug)]
#[command(name = "framework-demo")]
#[command(
    version,
    about = "Compare basic prompts with strategy-enhanced prompts",
    long_about = None
)]
pub struct Cli {
    /// JSON configuration file
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging for the demo crates
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the prompting strategies
    Strategies,

    /// List the models accepted for live runs
    Models,

    /// Print the enhanced prompt for a task
    Prompt {
        /// Strategy slug or display name
        #[arg(short, long)]
        strategy: Strategy,

        /// Task text
        #[arg(short, long)]
        task: String,
    },

    /// Show the recorded example comparison for a strategy
    Offline {
        /// Strategy slug or display name
        #[arg(short, long)]
        strategy: Strategy,
    },

    /// Run a live comparison against the completion service
    Online {
        /// Strategy slug or display name
        #[arg(short, long)]
        strategy: Strategy,

        /// Task text, sent as the basic prompt
        #[arg(short, long)]
        task: String,

        /// Edited strategy prompt (built from the task when omitted)
        #[arg(short, long)]
        prompt: Option<String>,

        /// Model override
        #[arg(short, long)]
        model: Option<ModelId>,

        /// Temperature override, between 0 and 2
        #[arg(long)]
        temperature: Option<Temperature>,

        /// Self-consistency sample count override
        #[arg(long)]
        samples: Option<NonZeroUsize>,
    },

    /// Start a line-oriented session
    Interactive {
        /// Starting mode (defaults to the configured mode)
        #[arg(long)]
        mode: Option<Mode>,
    },
}
