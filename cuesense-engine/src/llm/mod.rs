//! LLM call layer: provider abstraction, shared call service and the
//! two judges built on top of it.

pub mod emotion_judge;
pub mod extract;
pub mod provider;
pub mod scene_judge;
pub mod service;

pub use emotion_judge::EmotionJudge;
pub use provider::{ChatMessage, ChatRequest, ChatResponse, LlmProvider, OpenAiProvider};
pub use scene_judge::SceneJudge;
pub use service::LlmService;

use thiserror::Error;

/// LLM call-layer errors.
///
/// Clone so one de-duplicated in-flight failure can be handed to every
/// caller waiting on that flight.
#[derive(Debug, Clone, Error)]
pub enum LlmError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error {0}: {1}")]
    Api(u16, String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Timeout: {0}")]
    Timeout(String),
}

impl LlmError {
    /// Transport and API failures are worth retrying; a response that
    /// arrived but would not parse is not.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            LlmError::Network(_) | LlmError::Api(_, _) | LlmError::Timeout(_)
        )
    }
}
