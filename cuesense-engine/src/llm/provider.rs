//! Chat-completion provider abstraction and the OpenAI-compatible HTTP
//! implementation.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::LlmError;

const USER_AGENT: &str = "cuesense/0.1.0";

/// One chat message
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        ChatMessage {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        ChatMessage {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// A fully-specified chat call
#[derive(Debug, Clone)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f64,
    pub max_tokens: u32,
}

impl ChatRequest {
    /// Cache identity: model, rendered prompt, temperature (per-mille
    /// resolution) and token budget. Two requests with the same key are
    /// interchangeable.
    pub fn cache_key(&self) -> String {
        let mut key = String::new();
        key.push_str(&self.model);
        key.push('|');
        key.push_str(&((self.temperature * 1000.0).round() as i64).to_string());
        key.push('|');
        key.push_str(&self.max_tokens.to_string());
        for message in &self.messages {
            key.push('|');
            key.push_str(&message.role);
            key.push(':');
            key.push_str(&message.content);
        }
        key
    }
}

/// Completion text returned by a provider
#[derive(Debug, Clone)]
pub struct ChatResponse {
    pub content: String,
}

/// Seam for the actual model backend. Production uses `OpenAiProvider`;
/// tests inject counting or canned implementations.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    fn name(&self) -> &str;

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, LlmError>;
}

// ============================================================================
// OpenAI-compatible HTTP provider
// ============================================================================

#[derive(Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f64,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct ApiResponse {
    choices: Vec<ApiChoice>,
}

#[derive(Deserialize)]
struct ApiChoice {
    message: ApiMessageBody,
}

#[derive(Deserialize)]
struct ApiMessageBody {
    content: String,
}

/// Chat-completions client for any OpenAI-compatible endpoint
pub struct OpenAiProvider {
    http_client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl OpenAiProvider {
    pub fn new(
        endpoint: String,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| LlmError::Network(e.to_string()))?;

        Ok(OpenAiProvider {
            http_client,
            endpoint,
            api_key,
        })
    }
}

#[async_trait]
impl LlmProvider for OpenAiProvider {
    fn name(&self) -> &str {
        "openai-compatible"
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, LlmError> {
        let body = ApiRequest {
            model: &request.model,
            messages: &request.messages,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        debug!(model = %request.model, endpoint = %self.endpoint, "LLM request");

        let mut builder = self.http_client.post(&self.endpoint).json(&body);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                LlmError::Timeout(e.to_string())
            } else {
                LlmError::Network(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(LlmError::Api(status.as_u16(), error_text));
        }

        let parsed: ApiResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Parse(e.to_string()))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| LlmError::Parse("response carried no choices".to_string()))?;

        Ok(ChatResponse { content })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(prompt: &str) -> ChatRequest {
        ChatRequest {
            model: "gpt-4o-mini".to_string(),
            messages: vec![ChatMessage::user(prompt)],
            temperature: 0.2,
            max_tokens: 500,
        }
    }

    #[test]
    fn test_cache_key_stable_for_identical_requests() {
        assert_eq!(request("describe").cache_key(), request("describe").cache_key());
    }

    #[test]
    fn test_cache_key_varies_by_prompt_and_params() {
        let base = request("a");
        assert_ne!(base.cache_key(), request("b").cache_key());

        let mut hotter = request("a");
        hotter.temperature = 0.9;
        assert_ne!(base.cache_key(), hotter.cache_key());

        let mut longer = request("a");
        longer.max_tokens = 1000;
        assert_ne!(base.cache_key(), longer.cache_key());

        let mut other_model = request("a");
        other_model.model = "gpt-4o".to_string();
        assert_ne!(base.cache_key(), other_model.cache_key());
    }

    #[test]
    fn test_provider_creation() {
        let provider = OpenAiProvider::new(
            "https://api.openai.com/v1/chat/completions".to_string(),
            Some("sk-test".to_string()),
            Duration::from_secs(30),
        );
        assert!(provider.is_ok());
    }
}
