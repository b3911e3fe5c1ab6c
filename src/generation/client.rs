use parking_lot::Mutex;
use reqwest::blocking::Client as HttpClient;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;
use tracing::debug;

use crate::error::GenerationError;
use crate::generation::preview;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:11434/api/generate";
pub const DEFAULT_MODEL: &str = "llama3.2:3b";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

/// Where and how completions are requested. Injected into the client at
/// construction; nothing here is tunable per call.
#[derive(Debug, Clone)]
pub struct CompletionConfig {
    pub endpoint: String,
    pub model: String,
    pub timeout: Duration,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl CompletionConfig {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// The seam between generation logic and the model server. One blocking
/// call per prompt, no retries; callers decide what a failure means.
pub trait CompletionClient: Send + Sync {
    fn complete(&self, prompt: &str) -> Result<String, GenerationError>;
}

pub struct OllamaClient {
    config: CompletionConfig,
    http: HttpClient,
}

impl OllamaClient {
    pub fn new(config: CompletionConfig) -> Result<Self, GenerationError> {
        let http = HttpClient::builder().timeout(config.timeout).build()?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &CompletionConfig {
        &self.config
    }
}

impl CompletionClient for OllamaClient {
    fn complete(&self, prompt: &str) -> Result<String, GenerationError> {
        let payload = GenerateRequest {
            model: &self.config.model,
            prompt,
            stream: false,
        };

        let response = self
            .http
            .post(&self.config.endpoint)
            .json(&payload)
            .send()?
            .error_for_status()?;

        let envelope: GenerateResponse = response.json()?;
        debug!(
            length = envelope.response.chars().count(),
            preview = %preview(&envelope.response, 200),
            "model response received"
        );
        Ok(envelope.response)
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

/// Queue-backed test double. Each `complete` call pops the next queued
/// result; an exhausted queue reads as an empty model response.
#[derive(Default)]
pub struct MockCompletionClient {
    responses: Mutex<VecDeque<Result<String, GenerationError>>>,
}

impl MockCompletionClient {
    pub fn push_response(&self, response: impl Into<String>) {
        self.responses.lock().push_back(Ok(response.into()));
    }

    pub fn push_error(&self, error: GenerationError) {
        self.responses.lock().push_back(Err(error));
    }
}

impl CompletionClient for MockCompletionClient {
    fn complete(&self, _prompt: &str) -> Result<String, GenerationError> {
        self.responses
            .lock()
            .pop_front()
            .unwrap_or(Err(GenerationError::EmptyResponse))
    }
}
