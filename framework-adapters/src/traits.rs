//! The completion backend seam.
//!
//! The demo only ever sends one user prompt per call, so a request is a
//! prompt plus optional per-call model and temperature. Backends answer with
//! a stream of text deltas; [`crate::completion::complete`] drains it.

use std::pin::Pin;
use std::time::Duration;

use async_trait::async_trait;
use futures::Stream;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result alias for backend calls.
pub type AdapterResult<T> = Result<T, AdapterError>;

/// Text deltas produced by [`ModelAdapter::infer`].
pub type AdapterStream = Pin<Box<dyn Stream<Item = AdapterResult<InferenceChunk>> + Send>>;

/// Ways a completion call can fail.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// Missing credential or unusable endpoint settings.
    #[error("adapter not configured: {reason}")]
    Configuration {
        /// What is missing or wrong.
        reason: String,
    },

    /// The request was rejected before anything was sent.
    #[error("invalid completion request: {reason}")]
    InvalidRequest {
        /// Why the request was rejected.
        reason: String,
    },

    /// Connection, TLS or timeout failure.
    #[error("transport error: {reason}")]
    Transport {
        /// Underlying failure.
        reason: String,
    },

    /// HTTP 429 from the service.
    #[error("rate limited by the completion service (retry after {retry_after:?})")]
    RateLimited {
        /// Value of the `Retry-After` header, when present.
        retry_after: Option<Duration>,
    },

    /// Non-success status, or a body without a usable answer.
    #[error("unexpected response: {reason}")]
    Response {
        /// Status line or decode failure.
        reason: String,
    },
}

impl AdapterError {
    #[must_use]
    pub(crate) fn invalid_request(reason: impl Into<String>) -> Self {
        Self::InvalidRequest {
            reason: reason.into(),
        }
    }

    #[must_use]
    pub(crate) fn configuration(reason: impl Into<String>) -> Self {
        Self::Configuration {
            reason: reason.into(),
        }
    }

    /// Builds a [`AdapterError::Transport`].
    #[must_use]
    pub fn transport(reason: impl Into<String>) -> Self {
        Self::Transport {
            reason: reason.into(),
        }
    }

    /// Builds a [`AdapterError::Response`].
    #[must_use]
    pub fn response(reason: impl Into<String>) -> Self {
        Self::Response {
            reason: reason.into(),
        }
    }
}

/// Identifies a backend in logs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdapterMetadata {
    provider: &'static str,
    model: String,
}

impl AdapterMetadata {
    /// `model` is the one used when a request names none.
    #[must_use]
    pub fn new(provider: &'static str, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }

    /// Short provider name, e.g. `openai`.
    #[must_use]
    pub const fn provider(&self) -> &'static str {
        self.provider
    }

    /// Fallback model.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

/// One prompt to complete.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct CompletionRequest {
    prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

impl CompletionRequest {
    /// Wraps `prompt`, sent verbatim as the user message.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::InvalidRequest`] for a blank prompt.
    pub fn new(prompt: impl Into<String>) -> AdapterResult<Self> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(AdapterError::invalid_request("prompt cannot be empty"));
        }
        Ok(Self {
            prompt,
            model: None,
            temperature: None,
        })
    }

    /// Names the model for this call.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Sets the sampling temperature for this call.
    #[must_use]
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Prompt text.
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Per-call model, if any.
    #[must_use]
    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    /// Per-call temperature, if any.
    #[must_use]
    pub const fn temperature(&self) -> Option<f32> {
        self.temperature
    }
}

/// A piece of the answer.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct InferenceChunk {
    /// Text appended to the answer.
    pub delta: String,
    /// Set on the last chunk.
    pub done: bool,
}

impl InferenceChunk {
    /// Creates a chunk.
    #[must_use]
    pub fn new(delta: impl Into<String>, done: bool) -> Self {
        Self {
            delta: delta.into(),
            done,
        }
    }
}

/// A service that completes prompts.
///
/// Implementations are shared behind an `Arc` and must not keep per-call
/// state.
#[async_trait]
pub trait ModelAdapter: Send + Sync {
    /// Provider and fallback model.
    fn metadata(&self) -> &AdapterMetadata;

    /// Sends `request` and returns the answer as a stream of deltas.
    async fn infer(&self, request: CompletionRequest) -> AdapterResult<AdapterStream>;
}
