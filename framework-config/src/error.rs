use std::path::PathBuf;

use framework_adapters::traits::AdapterError;
use framework_primitives::Error as PrimitiveError;
use thiserror::Error;

/// Result alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        /// File that failed to load.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid JSON for [`crate::DemoConfig`].
    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        /// File that failed to parse.
        path: PathBuf,
        /// Underlying decode error.
        #[source]
        source: serde_json::Error,
    },

    /// A model, temperature or mode value failed validation.
    #[error(transparent)]
    Invalid(#[from] PrimitiveError),

    /// A setting holds a value outside its accepted domain.
    #[error("invalid value for `{key}`: {reason}")]
    InvalidValue {
        /// Setting or environment variable name.
        key: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// The API credential is not available.
    #[error("{var} environment variable not set")]
    MissingCredential {
        /// Environment variable that was consulted.
        var: String,
    },

    /// The adapter rejected the derived configuration.
    #[error(transparent)]
    Adapter(#[from] AdapterError),
}

impl ConfigError {
    pub(crate) fn invalid_value(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.into(),
            reason: reason.into(),
        }
    }
}
