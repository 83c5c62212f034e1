//! Strongly typed configuration schema.

use std::env;
use std::time::Duration;

use framework_adapters::completion::CompletionSettings;
use framework_adapters::openai::{DEFAULT_BASE_URL, OPENAI_API_KEY_ENV, OpenAiConfig};
use framework_primitives::{Mode, ModelId, Temperature};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Samples drawn per self-consistency run.
pub const DEFAULT_SAMPLES: usize = 3;

const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Demo settings.
///
/// Every field has a default, so a config file only needs the keys it
/// changes:
///
/// ```json
/// { "mode": "online", "model": "gpt-4o-mini", "temperature": 0.3 }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    /// Offline replay or live calls.
    pub mode: Mode,
    /// Model used for live calls.
    pub model: ModelId,
    /// Sampling temperature for live calls.
    pub temperature: Temperature,
    /// Self-consistency sample count.
    pub samples: usize,
    /// Base URL of the chat completions service.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Environment variable holding the API key.
    pub api_key_env: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            model: ModelId::ONLINE_DEFAULT,
            temperature: Temperature::default(),
            samples: DEFAULT_SAMPLES,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            api_key_env: OPENAI_API_KEY_ENV.to_owned(),
        }
    }
}

impl DemoConfig {
    /// Checks cross-field constraints that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first offending key.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.samples == 0 {
            return Err(ConfigError::invalid_value("samples", "must be at least 1"));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::invalid_value(
                "timeout_secs",
                "must be at least 1",
            ));
        }
        if self.api_key_env.trim().is_empty() {
            return Err(ConfigError::invalid_value("api_key_env", "cannot be empty"));
        }
        let base = self.base_url.trim();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ConfigError::invalid_value(
                "base_url",
                "must start with http:// or https://",
            ));
        }
        Ok(())
    }

    /// Model and temperature applied to each call.
    #[must_use]
    pub const fn completion_settings(&self) -> CompletionSettings {
        CompletionSettings::new(self.model, self.temperature)
    }

    /// Request timeout as a [`Duration`].
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Builds the adapter configuration, reading the API key from the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredential`] when the key is absent or blank,
    /// and [`ConfigError::Adapter`] for an unusable base URL.
    pub fn openai_config(&self) -> ConfigResult<OpenAiConfig> {
        self.openai_config_with(|var| env::var(var).ok())
    }

    /// Same as [`Self::openai_config`] with an explicit variable lookup.
    ///
    /// # Errors
    ///
    /// See [`Self::openai_config`].
    pub fn openai_config_with<F>(&self, lookup: F) -> ConfigResult<OpenAiConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let key = lookup(&self.api_key_env)
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingCredential {
                var: self.api_key_env.clone(),
            })?;

        Ok(OpenAiConfig::new(self.model.as_str())
            .with_api_key(key)
            .with_base_url(&self.base_url)?
            .with_timeout(self.timeout())
            .with_default_temperature(self.temperature.value()))
    }
}
