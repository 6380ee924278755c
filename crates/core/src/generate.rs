//! Generation backend client.
//!
//! [`GenerationClient`] performs the single chat-completion call of a
//! rewrite cycle against an OpenAI-compatible backend. One call per
//! invocation, no internal retry, no client-side timeout beyond what the
//! transport provides; callers needing bounded latency must wrap the call
//! themselves.

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::prompt::{GenerationConfig, GenerationRequest};
use crate::{RestyleError, Result};

/// Default backend endpoint.
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Client for the chat-completions backend.
pub struct GenerationClient {
    api_key: String,
    base_url: String,
    http: Client,
}

/// The terminal artifact of a rewrite cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    /// The rewritten article text.
    pub rewritten_text: String,
    /// Total tokens the backend reported consuming for this call.
    pub token_usage: u32,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
    #[serde(default)]
    usage: ChatUsage,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: String,
}

#[derive(Deserialize, Default)]
struct ChatUsage {
    #[serde(default)]
    total_tokens: u32,
}

impl GenerationClient {
    /// Creates a client for the default backend endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            http: Client::new(),
        }
    }

    /// Overrides the backend endpoint. Used to point at a test server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sends one generation request and returns the rewritten text.
    ///
    /// Authentication failures map to [`RestyleError::Authentication`],
    /// rate-limit responses to [`RestyleError::RateLimit`], and every other
    /// backend failure to [`RestyleError::Generation`] carrying the raw
    /// message.
    pub async fn generate(
        &self,
        request: &GenerationRequest,
        config: &GenerationConfig,
    ) -> Result<GenerationResult> {
        config.validate()?;

        let body = ChatRequest {
            model: config.model.as_str(),
            messages: vec![
                ChatMessage { role: "system", content: &request.system_instruction },
                ChatMessage { role: "user", content: &request.user_prompt },
            ],
            max_tokens: config.max_output_tokens,
            temperature: config.temperature,
        };

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| RestyleError::Generation(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(classify_failure(status, message));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| RestyleError::Generation(format!("malformed backend response: {}", e)))?;

        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| RestyleError::Generation("backend returned no choices".to_string()))?;

        Ok(GenerationResult {
            rewritten_text: choice.message.content,
            token_usage: parsed.usage.total_tokens,
        })
    }
}

/// Maps a non-success backend status to the error taxonomy.
fn classify_failure(status: StatusCode, message: String) -> RestyleError {
    let message = if message.is_empty() { status.to_string() } else { message };

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => RestyleError::Authentication(message),
        StatusCode::TOO_MANY_REQUESTS => RestyleError::RateLimit(message),
        _ => RestyleError::Generation(format!("HTTP {}: {}", status.as_u16(), message)),
    }
}
