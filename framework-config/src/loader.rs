//! Configuration loader implementations.

use std::env;
use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{ConfigError, ConfigResult};
use crate::schema::DemoConfig;

/// Overrides the model.
pub const ENV_MODEL: &str = "FRAMEWORK_DEMO_MODEL";
/// Overrides the temperature.
pub const ENV_TEMPERATURE: &str = "FRAMEWORK_DEMO_TEMPERATURE";
/// Overrides the self-consistency sample count.
pub const ENV_SAMPLES: &str = "FRAMEWORK_DEMO_SAMPLES";
/// Overrides the completion service base URL.
pub const ENV_BASE_URL: &str = "OPENAI_BASE_URL";

/// Loads variables from a `.env` file in the working directory, if present.
///
/// Variables already set in the process environment win.
pub fn load_dotenv() {
    match dotenv::dotenv() {
        Ok(path) => debug!(path = %path.display(), "loaded .env file"),
        Err(err) => debug!(error = %err, "no .env file loaded"),
    }
}

/// Loads defaults, then `path` (if any), then process environment overrides,
/// and validates the result.
///
/// # Errors
///
/// Returns [`ConfigError`] if the file cannot be read or parsed, or if any
/// layer produces an invalid value.
pub fn load(path: Option<&Path>) -> ConfigResult<DemoConfig> {
    load_with(path, |key| env::var(key).ok())
}

/// Same as [`load`] with an explicit environment lookup.
///
/// # Errors
///
/// See [`load`].
pub fn load_with<F>(path: Option<&Path>, lookup: F) -> ConfigResult<DemoConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match path {
        Some(path) => from_file(path)?,
        None => DemoConfig::default(),
    };
    apply_env_overrides(&mut config, lookup)?;
    config.validate()?;
    info!(
        mode = %config.mode,
        model = %config.model,
        temperature = %config.temperature,
        samples = config.samples,
        "configuration loaded"
    );
    Ok(config)
}

/// Reads a JSON config file.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] or [`ConfigError::Parse`].
pub fn from_file(path: &Path) -> ConfigResult<DemoConfig> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn apply_env_overrides<F>(config: &mut DemoConfig, lookup: F) -> ConfigResult<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(model) = lookup(ENV_MODEL) {
        config.model = model.parse()?;
    }
    if let Some(raw) = lookup(ENV_TEMPERATURE) {
        let value: f32 = raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::invalid_value(ENV_TEMPERATURE, "not a number"))?;
        config.temperature = value.try_into()?;
    }
    if let Some(raw) = lookup(ENV_SAMPLES) {
        config.samples = raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::invalid_value(ENV_SAMPLES, "not a positive integer"))?;
    }
    if let Some(base_url) = lookup(ENV_BASE_URL).filter(|value| !value.trim().is_empty()) {
        config.base_url = base_url;
    }
    Ok(())
}
