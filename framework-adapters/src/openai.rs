//! `OpenAI` chat completions adapter.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures::stream;
use hyper::body::{Bytes, to_bytes};
use hyper::client::HttpConnector;
use hyper::header::{AUTHORIZATION, CONTENT_TYPE, RETRY_AFTER};
use hyper::{Body, Client, Request, StatusCode, Uri};
use hyper_rustls::HttpsConnector;
use rustls::{ClientConfig, OwnedTrustAnchor, RootCertStore};
use serde::{Deserialize, Serialize};
use tokio::time::timeout;
use tracing::{debug, info};
use webpki_roots::TLS_SERVER_ROOTS;

use crate::traits::{
    AdapterError, AdapterMetadata, AdapterResult, AdapterStream, CompletionRequest,
    InferenceChunk, ModelAdapter,
};

/// Environment variable holding the API credential.
pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/";

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

type HyperClient = Client<HttpsConnector<HttpConnector>, Body>;

/// Endpoint, credential and defaults for [`OpenAiAdapter`].
///
/// The key is never read from the environment here; callers resolve it and
/// pass it to [`OpenAiConfig::with_api_key`].
#[derive(Clone)]
pub struct OpenAiConfig {
    api_key: Option<String>,
    model: String,
    base_url: String,
    timeout: Duration,
    default_temperature: Option<f32>,
}

impl fmt::Debug for OpenAiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("default_temperature", &self.default_temperature)
            .finish()
    }
}

impl OpenAiConfig {
    /// Targets the public endpoint with `model` as the fallback model.
    #[must_use]
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            api_key: None,
            model: model.into(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            default_temperature: None,
        }
    }

    /// Points the adapter at another `OpenAI`-compatible server.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::Configuration`] unless the URL is absolute
    /// `http` or `https`.
    pub fn with_base_url(mut self, base_url: impl AsRef<str>) -> AdapterResult<Self> {
        self.base_url = sanitize_base_url(base_url.as_ref())?;
        Ok(self)
    }

    /// Temperature for requests that carry none.
    #[must_use]
    pub fn with_default_temperature(mut self, temperature: f32) -> Self {
        self.default_temperature = Some(temperature);
        self
    }

    /// Upper bound on one request, connection included.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the bearer credential.
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Whether a credential was supplied.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Base URL, normalized to end in `/`.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Adapter calling an `OpenAI`-compatible chat completions endpoint.
pub struct OpenAiAdapter {
    client: HyperClient,
    endpoint: Uri,
    metadata: AdapterMetadata,
    api_key: String,
    timeout: Duration,
    default_temperature: Option<f32>,
}

impl fmt::Debug for OpenAiAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiAdapter")
            .field("model", &self.metadata.model())
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl OpenAiAdapter {
    /// Builds the adapter and its TLS client.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::Configuration`] if the API key is missing or the
    /// endpoint cannot be derived from the base URL.
    pub fn new(config: OpenAiConfig) -> AdapterResult<Self> {
        let api_key = config.api_key.ok_or_else(|| {
            AdapterError::configuration(format!(
                "OpenAI adapter requires an API key ({OPENAI_API_KEY_ENV} is not set)"
            ))
        })?;

        let metadata = AdapterMetadata::new("openai", config.model);
        let endpoint = format!("{}v1/chat/completions", config.base_url)
            .parse::<Uri>()
            .map_err(|err| {
                AdapterError::configuration(format!("cannot derive chat endpoint: {err}"))
            })?;

        Ok(Self {
            client: https_client(),
            endpoint,
            metadata,
            api_key,
            timeout: config.timeout,
            default_temperature: config.default_temperature,
        })
    }

    fn build_request(&self, request: &CompletionRequest) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: request
                .model()
                .unwrap_or_else(|| self.metadata.model())
                .to_owned(),
            messages: vec![OpenAiMessage {
                role: "user",
                content: request.prompt().to_owned(),
            }],
            temperature: request.temperature().or(self.default_temperature),
            stream: false,
        }
    }
}

#[async_trait]
impl ModelAdapter for OpenAiAdapter {
    fn metadata(&self) -> &AdapterMetadata {
        &self.metadata
    }

    async fn infer(&self, request: CompletionRequest) -> AdapterResult<AdapterStream> {
        let payload = self.build_request(&request);
        let body = serde_json::to_vec(&payload).map_err(|err| {
            AdapterError::invalid_request(format!("cannot encode chat request: {err}"))
        })?;

        let request = Request::post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .body(Body::from(body))
            .map_err(|err| {
                AdapterError::transport(format!("cannot build HTTP request: {err}"))
            })?;

        info!(model = %payload.model, temperature = ?payload.temperature, "dispatching chat completion");

        let Ok(exchanged) = timeout(self.timeout, self.exchange(request)).await else {
            return Err(AdapterError::transport(format!(
                "no answer within {:?}",
                self.timeout
            )));
        };
        let (status, retry_after, bytes) = exchanged?;
        debug!(%status, len = bytes.len(), "chat completion response received");

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(AdapterError::RateLimited { retry_after });
        }
        if !status.is_success() {
            let reason = String::from_utf8_lossy(&bytes).to_string();
            return Err(AdapterError::response(format!(
                "OpenAI returned {status}: {reason}"
            )));
        }

        let response: ChatCompletionResponse = serde_json::from_slice(&bytes).map_err(|err| {
            AdapterError::response(format!("failed to decode OpenAI response: {err}"))
        })?;

        let content = response
            .choices
            .into_iter()
            .find_map(|choice| choice.message.and_then(|message| message.content))
            .ok_or_else(|| AdapterError::response("OpenAI response contained no message content"))?;

        let stream = stream::once(async move { Ok(InferenceChunk::new(content, true)) });
        Ok(Box::pin(stream))
    }
}

impl OpenAiAdapter {
    /// Sends the request and reads the whole body.
    async fn exchange(
        &self,
        request: Request<Body>,
    ) -> AdapterResult<(StatusCode, Option<Duration>, Bytes)> {
        let response = self
            .client
            .request(request)
            .await
            .map_err(|err| AdapterError::transport(err.to_string()))?;

        let status = response.status();
        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse::<u64>().ok())
            .map(Duration::from_secs);
        let bytes = to_bytes(response.into_body()).await.map_err(|err| {
            AdapterError::transport(format!("response body interrupted: {err}"))
        })?;
        Ok((status, retry_after, bytes))
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<OpenAiMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct OpenAiMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    #[serde(default)]
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

fn https_client() -> HyperClient {
    let mut roots = RootCertStore::empty();
    roots.add_trust_anchors(TLS_SERVER_ROOTS.iter().map(|anchor| {
        OwnedTrustAnchor::from_subject_spki_name_constraints(
            anchor.subject,
            anchor.spki,
            anchor.name_constraints,
        )
    }));

    let tls = ClientConfig::builder()
        .with_safe_defaults()
        .with_root_certificates(roots)
        .with_no_client_auth();

    // Plain http stays allowed for local OpenAI-compatible servers.
    let mut http = HttpConnector::new();
    http.enforce_http(false);

    Client::builder().build::<_, Body>(HttpsConnector::from((http, Arc::new(tls))))
}

fn sanitize_base_url(input: &str) -> AdapterResult<String> {
    let mut base = input.trim().to_owned();
    if !(base.starts_with("http://") || base.starts_with("https://")) {
        return Err(AdapterError::configuration(
            "base URL must start with http:// or https://",
        ));
    }
    if !base.ends_with('/') {
        base.push('/');
    }
    base.parse::<Uri>()
        .map_err(|err| AdapterError::configuration(format!("unusable base URL: {err}")))?;
    Ok(base)
}

#[cfg(test)]
mod tests {
    use futures::StreamExt;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    use super::*;
    use crate::completion::{CompletionSettings, ERROR_MARKER, complete};
    use framework_primitives::{ModelId, Temperature};

    /// Serves exactly one HTTP response and hands back the raw request.
    async fn serve_once(status_line: &str, body: &str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}/", listener.local_addr().unwrap());
        let response = format!(
            "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut raw = Vec::new();
            let mut buf = [0_u8; 4096];
            loop {
                let read = socket.read(&mut buf).await.unwrap();
                if read == 0 {
                    break;
                }
                raw.extend_from_slice(&buf[..read]);
                if request_complete(&raw) {
                    break;
                }
            }
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            String::from_utf8_lossy(&raw).to_string()
        });

        (base_url, handle)
    }

    fn request_complete(raw: &[u8]) -> bool {
        let text = String::from_utf8_lossy(raw);
        let Some(header_end) = text.find("\r\n\r\n") else {
            return false;
        };
        let content_length = text[..header_end]
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())
                    .flatten()
            })
            .unwrap_or(0);
        raw.len() >= header_end + 4 + content_length
    }

    fn adapter_for(base_url: &str) -> OpenAiAdapter {
        let config = OpenAiConfig::new("gpt-4o")
            .with_api_key("test_key")
            .with_base_url(base_url)
            .unwrap()
            .with_timeout(Duration::from_secs(5));
        OpenAiAdapter::new(config).unwrap()
    }

    #[test]
    fn base_url_requires_scheme() {
        let err = OpenAiConfig::new("gpt-4o")
            .with_base_url("api.openai.com")
            .expect_err("missing scheme should error");

        assert!(matches!(err, AdapterError::Configuration { .. }));
    }

    #[test]
    fn sanitize_appends_trailing_slash() {
        let cfg = OpenAiConfig::new("gpt-4o")
            .with_base_url("https://example.com/openai")
            .expect("valid URL");
        assert_eq!(cfg.base_url(), "https://example.com/openai/");
    }

    #[test]
    fn missing_api_key_is_configuration_error() {
        let err = OpenAiAdapter::new(OpenAiConfig::new("gpt-4o")).expect_err("no key");
        assert!(matches!(err, AdapterError::Configuration { .. }));
        assert!(err.to_string().contains(OPENAI_API_KEY_ENV));
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let cfg = OpenAiConfig::new("gpt-4o").with_api_key("sk-secret");
        let rendered = format!("{cfg:?}");
        assert!(!rendered.contains("sk-secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn request_model_overrides_default() {
        let config = OpenAiConfig::new("gpt-4o")
            .with_default_temperature(0.2)
            .with_api_key("test_key");
        let adapter = OpenAiAdapter::new(config).expect("adapter");

        let plain = CompletionRequest::new("hello").unwrap();
        let chat = adapter.build_request(&plain);
        assert_eq!(chat.model, "gpt-4o");
        assert_eq!(chat.temperature, Some(0.2));

        let overridden = CompletionRequest::new("hello")
            .unwrap()
            .with_model("gpt-3.5-turbo")
            .with_temperature(1.3);
        let chat = adapter.build_request(&overridden);
        assert_eq!(chat.model, "gpt-3.5-turbo");
        assert_eq!(chat.temperature, Some(1.3));
        assert_eq!(chat.messages.len(), 1);
        assert_eq!(chat.messages[0].role, "user");
        assert_eq!(chat.messages[0].content, "hello");
    }

    #[tokio::test]
    async fn posts_chat_completion_and_returns_first_content() {
        let (base_url, server) = serve_once(
            "200 OK",
            r#"{"choices":[{"message":{"content":null}},{"message":{"content":"Cut travel first."}}]}"#,
        )
        .await;
        let adapter = adapter_for(&base_url);
        let request = CompletionRequest::new("Where should we cut costs?")
            .unwrap()
            .with_model("gpt-4o-mini")
            .with_temperature(0.7);

        let mut stream = adapter.infer(request).await.expect("stream");
        let chunk = stream.next().await.unwrap().unwrap();
        assert_eq!(chunk.delta, "Cut travel first.");
        assert!(chunk.done);

        let raw = server.await.unwrap();
        assert!(raw.starts_with("POST /v1/chat/completions"));
        assert!(raw.to_lowercase().contains("authorization: bearer test_key"));
        let body = &raw[raw.find("\r\n\r\n").unwrap() + 4..];
        let json: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(json["model"], "gpt-4o-mini");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "Where should we cut costs?");
        assert_eq!(json["stream"], false);
    }

    #[tokio::test]
    async fn error_status_becomes_failed_outcome() {
        let (base_url, server) =
            serve_once("401 Unauthorized", r#"{"error":{"message":"bad key"}}"#).await;
        let adapter = adapter_for(&base_url);
        let settings = CompletionSettings::new(ModelId::Gpt4o, Temperature::default());

        let outcome = complete(&adapter, "hello", settings).await;
        server.await.unwrap();

        let text = outcome.display_text();
        assert!(text.starts_with(ERROR_MARKER));
        assert!(text.contains("401"));
        assert!(text.contains("bad key"));
    }

    #[tokio::test]
    async fn rate_limit_reports_retry_after() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}/", listener.local_addr().unwrap());
        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut raw = Vec::new();
            let mut buf = [0_u8; 4096];
            while !request_complete(&raw) {
                let read = socket.read(&mut buf).await.unwrap();
                if read == 0 {
                    break;
                }
                raw.extend_from_slice(&buf[..read]);
            }
            socket
                .write_all(
                    b"HTTP/1.1 429 Too Many Requests\r\nretry-after: 7\r\ncontent-length: 0\r\nconnection: close\r\n\r\n",
                )
                .await
                .unwrap();
        });

        let adapter = adapter_for(&base_url);
        let err = match adapter
            .infer(CompletionRequest::new("hello").unwrap())
            .await
        {
            Ok(_) => panic!("expected rate limit"),
            Err(err) => err,
        };
        server.await.unwrap();

        assert!(matches!(
            err,
            AdapterError::RateLimited {
                retry_after: Some(delay)
            } if delay == Duration::from_secs(7)
        ));
    }

    #[tokio::test]
    async fn stalled_body_hits_timeout() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}/", listener.local_addr().unwrap());
        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0_u8; 4096];
            let mut raw = Vec::new();
            while !request_complete(&raw) {
                let read = socket.read(&mut buf).await.unwrap();
                if read == 0 {
                    break;
                }
                raw.extend_from_slice(&buf[..read]);
            }
            let head = "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: 64\r\n\r\n{\"choices\"";
            socket.write_all(head.as_bytes()).await.unwrap();
            tokio::time::sleep(Duration::from_secs(5)).await;
        });

        let config = OpenAiConfig::new("gpt-4o")
            .with_api_key("test_key")
            .with_base_url(&base_url)
            .unwrap()
            .with_timeout(Duration::from_millis(200));
        let adapter = OpenAiAdapter::new(config).unwrap();

        let err = adapter
            .infer(CompletionRequest::new("hello").unwrap())
            .await
            .err()
            .expect("body never completes");
        assert!(matches!(err, AdapterError::Transport { .. }));
        assert!(err.to_string().contains("no answer within"));
        server.abort();
    }

    #[tokio::test]
    async fn malformed_body_becomes_failed_outcome() {
        let (base_url, server) = serve_once("200 OK", "not json").await;
        let adapter = adapter_for(&base_url);

        let outcome = complete(&adapter, "hello", CompletionSettings::default()).await;
        server.await.unwrap();

        assert!(outcome.failure().unwrap().contains("failed to decode"));
    }

    #[tokio::test]
    async fn unreachable_endpoint_never_panics() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}/", listener.local_addr().unwrap());
        drop(listener);
        let adapter = adapter_for(&base_url);

        let outcome = complete(&adapter, "hello", CompletionSettings::default()).await;
        assert!(outcome.display_text().contains("Error calling LLM:"));
    }
}
