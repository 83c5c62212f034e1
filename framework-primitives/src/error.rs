//! Shared error definitions for demo primitives.

use thiserror::Error;

/// Result alias used throughout the demo.
pub type Result<T> = std::result::Result<T, Error>;

/// Validation errors raised while constructing primitive types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// The task was empty or contained only whitespace.
    #[error("task cannot be empty")]
    EmptyTask,

    /// The strategy identifier did not match any known strategy.
    #[error("unknown strategy `{name}`")]
    UnknownStrategy {
        /// The identifier that failed to parse.
        name: String,
    },

    /// The mode identifier was neither offline nor online.
    #[error("unknown mode `{name}`")]
    UnknownMode {
        /// The rejected identifier.
        name: String,
    },

    /// The model identifier is not part of the allowed set.
    #[error("unsupported model `{name}`")]
    UnknownModel {
        /// The rejected model identifier.
        name: String,
    },

    /// Temperature text was not a number.
    #[error("temperature `{input}` is not a number")]
    InvalidTemperature {
        /// The rejected text.
        input: String,
    },

    /// Temperature was non-finite or outside the accepted range.
    #[error("temperature {value} is outside [{min}, {max}]")]
    TemperatureOutOfRange {
        /// The rejected value.
        value: f32,
        /// Inclusive lower bound.
        min: f32,
        /// Inclusive upper bound.
        max: f32,
    },
}
