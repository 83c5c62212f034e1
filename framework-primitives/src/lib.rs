//! Core shared types for the prompt framework demo.

#![warn(missing_docs, clippy::pedantic)]

mod error;
mod mode;
mod model;
mod strategy;
mod task;

/// Error type and result alias shared across the workspace.
pub use error::{Error, Result};
/// Offline replay or live calls.
pub use mode::Mode;
/// Model identifiers and sampling temperature.
pub use model::{DEFAULT_TEMPERATURE, ModelId, Temperature};
/// Prompting strategies demonstrated by the tool.
pub use strategy::Strategy;
/// Validated user task text.
pub use task::Task;
