use framework_primitives::Error as PrimitiveError;
use thiserror::Error;

use crate::template::TemplateError;

/// Result alias for prompt construction.
pub type PromptResult<T> = Result<T, PromptError>;

/// Errors raised while building strategy prompts.
#[derive(Debug, Error)]
pub enum PromptError {
    /// The task or strategy identifier failed validation.
    #[error(transparent)]
    Invalid(#[from] PrimitiveError),

    /// A fixed template could not be rendered.
    #[error(transparent)]
    Template(#[from] TemplateError),
}

impl PromptError {
    /// Returns `true` for user-input validation failures.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }
}
