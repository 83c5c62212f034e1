//! Offline replay versus live completion calls.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// How a comparison is produced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Replays the pre-recorded example table; no network access.
    #[default]
    Offline,
    /// Sends prompts to the completion service.
    Online,
}

impl Mode {
    /// Lowercase identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Offline => "offline",
            Self::Online => "online",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "offline" | "demo" => Ok(Self::Offline),
            "online" | "live" => Ok(Self::Online),
            _ => Err(Error::UnknownMode {
                name: input.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_aliases() {
        assert_eq!("Live".parse::<Mode>().unwrap(), Mode::Online);
        assert_eq!("demo".parse::<Mode>().unwrap(), Mode::Offline);
        assert!("batch".parse::<Mode>().is_err());
        assert_eq!(Mode::default(), Mode::Offline);
    }
}
