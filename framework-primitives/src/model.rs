//! Completion model identifiers and sampling temperature.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default sampling temperature.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

const MIN_TEMPERATURE: f32 = 0.0;
const MAX_TEMPERATURE: f32 = 2.0;

/// A chat model from the allowed set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelId {
    /// `gpt-5`
    #[serde(rename = "gpt-5")]
    Gpt5,
    /// `gpt-5-mini`
    #[serde(rename = "gpt-5-mini")]
    Gpt5Mini,
    /// `gpt-4o`
    #[serde(rename = "gpt-4o")]
    Gpt4o,
    /// `gpt-4o-mini`
    #[serde(rename = "gpt-4o-mini")]
    Gpt4oMini,
    /// `gpt-4-turbo`
    #[serde(rename = "gpt-4-turbo")]
    Gpt4Turbo,
    /// `gpt-3.5-turbo`
    #[serde(rename = "gpt-3.5-turbo")]
    Gpt35Turbo,
}

impl ModelId {
    /// Allowed models, in selector order.
    pub const ALL: [Self; 6] = [
        Self::Gpt5,
        Self::Gpt5Mini,
        Self::Gpt4o,
        Self::Gpt4oMini,
        Self::Gpt4Turbo,
        Self::Gpt35Turbo,
    ];

    /// Model preselected for live runs.
    pub const ONLINE_DEFAULT: Self = Self::Gpt4o;

    /// Model reported for offline replays.
    pub const OFFLINE_DEFAULT: Self = Self::Gpt4oMini;

    /// Wire identifier sent to the completion service.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gpt5 => "gpt-5",
            Self::Gpt5Mini => "gpt-5-mini",
            Self::Gpt4o => "gpt-4o",
            Self::Gpt4oMini => "gpt-4o-mini",
            Self::Gpt4Turbo => "gpt-4-turbo",
            Self::Gpt35Turbo => "gpt-3.5-turbo",
        }
    }
}

impl Default for ModelId {
    fn default() -> Self {
        Self::ONLINE_DEFAULT
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelId {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        let needle = input.trim();
        Self::ALL
            .into_iter()
            .find(|model| model.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| Error::UnknownModel {
                name: input.to_owned(),
            })
    }
}

/// Sampling temperature within `[0.0, 2.0]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f32", into = "f32")]
pub struct Temperature(f32);

impl Temperature {
    /// Validates the supplied value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemperatureOutOfRange`] for non-finite values or values
    /// outside the inclusive range.
    pub fn new(value: f32) -> Result<Self> {
        if !value.is_finite() || !(MIN_TEMPERATURE..=MAX_TEMPERATURE).contains(&value) {
            return Err(Error::TemperatureOutOfRange {
                value,
                min: MIN_TEMPERATURE,
                max: MAX_TEMPERATURE,
            });
        }
        Ok(Self(value))
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn value(self) -> f32 {
        self.0
    }
}

impl Default for Temperature {
    fn default() -> Self {
        Self(DEFAULT_TEMPERATURE)
    }
}

impl TryFrom<f32> for Temperature {
    type Error = Error;

    fn try_from(value: f32) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Temperature> for f32 {
    fn from(value: Temperature) -> Self {
        value.0
    }
}

impl FromStr for Temperature {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        let value = input
            .trim()
            .parse::<f32>()
            .map_err(|_| Error::InvalidTemperature {
                input: input.to_owned(),
            })?;
        Self::new(value)
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}
