//! Single-call completion helper with a tagged outcome.

use std::fmt;

use framework_primitives::{ModelId, Temperature};
use futures::StreamExt;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::traits::{AdapterError, CompletionRequest, ModelAdapter};

/// Prefix of the display text for failed calls.
pub const ERROR_MARKER: &str = "Error calling LLM:";

/// Model and temperature applied to every call of a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CompletionSettings {
    /// Model requested from the provider.
    pub model: ModelId,
    /// Sampling temperature.
    pub temperature: Temperature,
}

impl CompletionSettings {
    /// Creates settings from validated parts.
    #[must_use]
    pub const fn new(model: ModelId, temperature: Temperature) -> Self {
        Self { model, temperature }
    }
}

/// Outcome of one completion call.
///
/// Both variants render to display text, but callers can branch on the
/// variant instead of inspecting the text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CompletionOutcome {
    /// The provider answered.
    Completed {
        /// Response text of the first choice.
        text: String,
    },
    /// The call failed; `reason` describes the failure.
    Failed {
        /// Human-readable failure description.
        reason: String,
    },
}

impl CompletionOutcome {
    /// Wraps an adapter error.
    #[must_use]
    pub fn from_error(err: &AdapterError) -> Self {
        Self::Failed {
            reason: err.to_string(),
        }
    }

    /// Returns `true` if the provider answered.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }

    /// Returns the response text when the call succeeded.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Completed { text } => Some(text),
            Self::Failed { .. } => None,
        }
    }

    /// Returns the failure reason when the call failed.
    #[must_use]
    pub fn failure(&self) -> Option<&str> {
        match self {
            Self::Completed { .. } => None,
            Self::Failed { reason } => Some(reason),
        }
    }

    /// Text shown to the user: the response, or the failure behind
    /// [`ERROR_MARKER`].
    #[must_use]
    pub fn display_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CompletionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Completed { text } => f.write_str(text),
            Self::Failed { reason } => write!(f, "{ERROR_MARKER} {reason}"),
        }
    }
}

/// Sends `prompt` as a single user message and collects the full response.
///
/// Never returns an error: invalid prompts, transport failures, provider
/// errors and stream errors all become [`CompletionOutcome::Failed`].
pub async fn complete(
    adapter: &dyn ModelAdapter,
    prompt: &str,
    settings: CompletionSettings,
) -> CompletionOutcome {
    let request = match CompletionRequest::new(prompt) {
        Ok(request) => request
            .with_model(settings.model.as_str())
            .with_temperature(settings.temperature.value()),
        Err(err) => return CompletionOutcome::from_error(&err),
    };

    let mut stream = match adapter.infer(request).await {
        Ok(stream) => stream,
        Err(err) => {
            warn!(
                provider = adapter.metadata().provider(),
                model = %settings.model,
                error = %err,
                "completion call failed"
            );
            return CompletionOutcome::from_error(&err);
        }
    };

    let mut text = String::new();
    while let Some(chunk) = stream.next().await {
        match chunk {
            Ok(chunk) => {
                text.push_str(&chunk.delta);
                if chunk.done {
                    break;
                }
            }
            Err(err) => {
                warn!(error = %err, "completion stream failed");
                return CompletionOutcome::from_error(&err);
            }
        }
    }

    debug!(model = %settings.model, len = text.len(), "completion received");
    CompletionOutcome::Completed { text }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use futures::stream;

    use super::*;
    use crate::traits::{AdapterMetadata, AdapterResult, AdapterStream, InferenceChunk};

    struct ChunkedAdapter {
        metadata: AdapterMetadata,
        chunks: Vec<AdapterResult<InferenceChunk>>,
        seen: Mutex<Vec<CompletionRequest>>,
    }

    impl ChunkedAdapter {
        fn new(chunks: Vec<AdapterResult<InferenceChunk>>) -> Self {
            Self {
                metadata: AdapterMetadata::new("test", "chunked"),
                chunks,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ModelAdapter for ChunkedAdapter {
        fn metadata(&self) -> &AdapterMetadata {
            &self.metadata
        }

        async fn infer(&self, request: CompletionRequest) -> AdapterResult<AdapterStream> {
            self.seen.lock().unwrap().push(request);
            let chunks: Vec<_> = self
                .chunks
                .iter()
                .map(|chunk| match chunk {
                    Ok(chunk) => Ok(chunk.clone()),
                    Err(err) => Err(AdapterError::transport(err.to_string())),
                })
                .collect();
            Ok(Box::pin(stream::iter(chunks)))
        }
    }

    struct FailingAdapter {
        metadata: AdapterMetadata,
    }

    #[async_trait]
    impl ModelAdapter for FailingAdapter {
        fn metadata(&self) -> &AdapterMetadata {
            &self.metadata
        }

        async fn infer(&self, _request: CompletionRequest) -> AdapterResult<AdapterStream> {
            Err(AdapterError::transport("connection refused"))
        }
    }

    #[tokio::test]
    async fn concatenates_stream_chunks() {
        let adapter = ChunkedAdapter::new(vec![
            Ok(InferenceChunk::new("Hello, ", false)),
            Ok(InferenceChunk::new("world", true)),
        ]);
        let settings = CompletionSettings::new(ModelId::Gpt4oMini, Temperature::new(0.2).unwrap());

        let outcome = complete(&adapter, "greet", settings).await;
        assert_eq!(outcome.text(), Some("Hello, world"));

        let seen = adapter.seen.lock().unwrap();
        assert_eq!(seen[0].model(), Some("gpt-4o-mini"));
        assert_eq!(seen[0].temperature(), Some(0.2));
        assert_eq!(seen[0].prompt(), "greet");
    }

    #[tokio::test]
    async fn adapter_failure_becomes_marked_outcome() {
        let adapter = FailingAdapter {
            metadata: AdapterMetadata::new("test", "failing"),
        };

        let outcome = complete(&adapter, "hello", CompletionSettings::default()).await;
        assert!(!outcome.is_completed());
        assert!(outcome.failure().unwrap().contains("connection refused"));
        assert!(outcome.display_text().starts_with(ERROR_MARKER));
    }

    #[tokio::test]
    async fn stream_error_becomes_failed_outcome() {
        let adapter = ChunkedAdapter::new(vec![
            Ok(InferenceChunk::new("partial", false)),
            Err(AdapterError::transport("reset by peer")),
        ]);

        let outcome = complete(&adapter, "hello", CompletionSettings::default()).await;
        assert!(outcome.display_text().contains("Error calling LLM:"));
        assert!(outcome.display_text().contains("reset by peer"));
    }

    #[tokio::test]
    async fn blank_prompt_fails_without_calling_adapter() {
        let adapter = ChunkedAdapter::new(vec![Ok(InferenceChunk::new("never", true))]);

        let outcome = complete(&adapter, "   ", CompletionSettings::default()).await;
        assert!(outcome.failure().unwrap().contains("prompt cannot be empty"));
        assert!(adapter.seen.lock().unwrap().is_empty());
    }

    #[test]
    fn completed_outcome_displays_verbatim() {
        let outcome = CompletionOutcome::Completed {
            text: "Error calling LLM: is just text here".into(),
        };
        assert!(outcome.is_completed());
        assert_eq!(outcome.display_text(), "Error calling LLM: is just text here");
    }
}
