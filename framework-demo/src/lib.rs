//! Prompt framework demo facade.
//!
//! Bundles the workspace crates under short names and provides the text
//! rendering shared by the `framework-demo` binary's subcommands.

#![warn(missing_docs, clippy::pedantic)]

/// Strategies, models, temperature and task types.
pub use framework_primitives as primitives;

/// Strategy prompt construction.
pub use framework_prompts as prompts;

/// Completion client and the OpenAI adapter.
pub use framework_adapters as adapters;

/// Layered configuration.
pub use framework_config as config;

/// Tracing subscriber setup.
pub use framework_telemetry as telemetry;

/// Live runs, recorded examples and session state.
pub use framework_runner as runner;

pub mod render;
