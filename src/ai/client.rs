//! OpenAI-compatible chat completion client.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

use crate::config::AiConfig;

use super::CHAT_SYSTEM_PROMPT;

/// Connection timeout for HTTP requests.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Overall request timeout for HTTP requests.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Maximum number of retries for transient failures.
const MAX_RETRIES: u32 = 3;

/// Build an HTTP client with proper timeout configuration.
fn build_http_client() -> Result<Client, AiError> {
    Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| AiError::RequestFailed(e.to_string()))
}

/// Determine if a request should be retried based on status code and attempt count.
fn should_retry(status_code: u16, attempt: u32) -> bool {
    if attempt >= MAX_RETRIES {
        return false;
    }
    // Retry on 5xx server errors
    (500..600).contains(&status_code)
}

/// Calculate exponential backoff duration for retry attempts.
fn calculate_backoff(attempt: u32) -> Duration {
    // Exponential backoff: 1s, 2s, 4s
    Duration::from_secs(1 << attempt)
}

/// Pull a human-readable message out of an error response body.
///
/// Uses `error.message` when the body is JSON carrying one, otherwise the
/// status reason phrase.
fn api_error_message(body: &str, reason: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| json["error"]["message"].as_str().map(String::from))
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| reason.to_string())
}

/// Errors from remote model calls.
#[derive(Error, Debug)]
pub enum AiError {
    #[error("API key not configured (env: {})", .0.join(", "))]
    MissingApiKey(Vec<String>),
    #[error("API returned HTTP {status}: {message}")]
    Status { status: u16, message: String },
    #[error("API request failed: {0}")]
    RequestFailed(String),
    #[error("Failed to parse response: {0}")]
    ParseError(String),
    #[error("Model returned no content")]
    EmptyResponse,
    #[error("API request timed out")]
    Timeout,
}

impl AiError {
    /// Text shown in the conversation transcript for this failure.
    #[must_use]
    pub fn transcript_message(&self) -> String {
        match self {
            Self::MissingApiKey(envs) => format!(
                "配置错误：未找到 API Key。请在环境变量中添加 {}。\n\nConfiguration Error: No API Key found.",
                envs.iter()
                    .map(|e| format!("`{e}`"))
                    .collect::<Vec<_>>()
                    .join(" 或 ")
            ),
            Self::Status { status, message } => format!("API Error: {status} - {message}"),
            Self::EmptyResponse => "I couldn't generate a response.".to_string(),
            Self::RequestFailed(_) | Self::ParseError(_) | Self::Timeout => {
                "Sorry, I encountered an error connecting to DeepSeek.".to_string()
            }
        }
    }
}

/// Trait for remote model providers.
#[async_trait]
pub trait AiProvider: Send + Sync {
    /// Generate a reply to `user` under the `system` instruction.
    async fn generate(&self, system: &str, user: &str) -> Result<String, AiError>;
}

/// DeepSeek chat completion provider.
#[derive(Debug, Clone)]
pub struct DeepSeekProvider {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
    temperature: f32,
}

impl DeepSeekProvider {
    /// Create a new DeepSeek provider.
    ///
    /// # Errors
    ///
    /// Returns `AiError::RequestFailed` if the HTTP client cannot be built.
    pub fn new(
        base_url: String,
        api_key: String,
        model: String,
        temperature: f32,
    ) -> Result<Self, AiError> {
        Ok(Self {
            client: build_http_client()?,
            base_url,
            api_key,
            model,
            temperature,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl AiProvider for DeepSeekProvider {
    async fn generate(&self, system: &str, user: &str) -> Result<String, AiError> {
        let url = self.endpoint();

        let body = serde_json::json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": system },
                { "role": "user", "content": user }
            ],
            "stream": false,
            "temperature": self.temperature
        });

        let mut attempt = 0;
        loop {
            let response = self
                .client
                .post(&url)
                .bearer_auth(&self.api_key)
                .header("Content-Type", "application/json")
                .json(&body)
                .send()
                .await
                .map_err(|e| {
                    tracing::error!(error = %e, "Network error calling DeepSeek");
                    if e.is_timeout() {
                        AiError::Timeout
                    } else {
                        AiError::RequestFailed(e.to_string())
                    }
                })?;

            let status = response.status();
            if status.is_success() {
                let json: serde_json::Value = response
                    .json()
                    .await
                    .map_err(|e| AiError::ParseError(e.to_string()))?;

                return json["choices"][0]["message"]["content"]
                    .as_str()
                    .filter(|text| !text.is_empty())
                    .map(String::from)
                    .ok_or(AiError::EmptyResponse);
            }

            let status_code = status.as_u16();
            if should_retry(status_code, attempt) {
                let backoff = calculate_backoff(attempt);
                tracing::warn!(status = status_code, attempt, ?backoff, "Retrying DeepSeek request");
                tokio::time::sleep(backoff).await;
                attempt += 1;
                continue;
            }

            let text = response.text().await.unwrap_or_default();
            let message = api_error_message(&text, status.canonical_reason().unwrap_or(""));
            tracing::error!(status = status_code, %message, "DeepSeek API error");
            return Err(AiError::Status {
                status: status_code,
                message,
            });
        }
    }
}

/// Client that sends user messages to the remote model.
#[derive(Clone)]
pub struct AiClient {
    provider: Arc<dyn AiProvider>,
    model: String,
}

impl std::fmt::Debug for AiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AiClient")
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl AiClient {
    /// Wrap an arbitrary provider.
    #[must_use]
    pub fn with_provider(provider: Arc<dyn AiProvider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }

    /// Create client from configuration.
    ///
    /// # Errors
    ///
    /// Returns `AiError::MissingApiKey` if none of the configured API key
    /// environment variables is set to a non-empty value.
    pub fn from_config(config: &AiConfig) -> Result<Self, AiError> {
        let api_key = resolve_api_key(&config.api_key_envs)
            .ok_or_else(|| AiError::MissingApiKey(config.api_key_envs.clone()))?;

        let provider = DeepSeekProvider::new(
            config.base_url.clone(),
            api_key,
            config.model.clone(),
            config.temperature,
        )?;

        Ok(Self::with_provider(Arc::new(provider), config.model.clone()))
    }

    /// Get the configured model.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send a user message under the fixed chat system prompt.
    ///
    /// # Errors
    ///
    /// Returns the provider's error when the request fails or yields no text.
    pub async fn ask(&self, prompt: &str) -> Result<String, AiError> {
        self.provider.generate(CHAT_SYSTEM_PROMPT, prompt).await
    }
}

/// First non-empty value among the named environment variables.
fn resolve_api_key(envs: &[String]) -> Option<String> {
    envs.iter()
        .filter_map(|name| std::env::var(name).ok())
        .find(|value| !value.trim().is_empty())
}
