//! User-supplied task text.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A problem statement that is non-empty after trimming.
///
/// The text is kept verbatim; trimming is only used for validation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Task(String);

impl Task {
    /// Validates and wraps the supplied text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyTask`] if the text is empty or whitespace only.
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(Error::EmptyTask);
        }
        Ok(Self(text))
    }

    /// Returns the task text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Task {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Task> for String {
    fn from(value: Task) -> Self {
        value.0
    }
}

impl AsRef<str> for Task {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_text() {
        assert_eq!(Task::new("").unwrap_err(), Error::EmptyTask);
        assert_eq!(Task::new(" \n\t ").unwrap_err(), Error::EmptyTask);
    }

    #[test]
    fn keeps_text_verbatim() {
        let task = Task::new("  Plan the offsite.\n").unwrap();
        assert_eq!(task.as_str(), "  Plan the offsite.\n");
    }

    #[test]
    fn deserialization_validates() {
        let err = serde_json::from_str::<Task>("\"   \"");
        assert!(err.is_err());
        let task: Task = serde_json::from_str("\"Summarize Q3\"").unwrap();
        assert_eq!(task.as_str(), "Summarize Q3");
    }
}
