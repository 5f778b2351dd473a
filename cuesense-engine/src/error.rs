//! Engine error taxonomy.
//!
//! Failure classes follow the pipeline: input problems are fatal before
//! classification starts, a single judge failing is recoverable (the
//! other sources carry the result), every emotion source failing is
//! fatal. Low-confidence outcomes are values, never errors.

use thiserror::Error;

use crate::llm::LlmError;

pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Error, Debug)]
pub enum EngineError {
    /// Samples or feature vector unusable before classification
    #[error("Decode error: {0}")]
    Decode(String),

    /// One judge failed; callers with other sources recover
    #[error("{judge} judge failed: {reason}")]
    Judge { judge: String, reason: String },

    /// Every emotion source failed; no result can be synthesized
    #[error("all emotion sources failed: {}", .reasons.join("; "))]
    AllSourcesFailed { reasons: Vec<String> },

    /// Approved-term lookup problem
    #[error("Vocabulary error: {0}")]
    Vocabulary(String),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// LLM call-layer failure
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal invariant violation
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<cuesense_common::Error> for EngineError {
    fn from(e: cuesense_common::Error) -> Self {
        use cuesense_common::Error as Common;
        match e {
            Common::Io(inner) => EngineError::Io(inner),
            Common::Config(msg) => EngineError::Config(msg),
            Common::InvalidInput(msg) => EngineError::Decode(msg),
            Common::Internal(msg) => EngineError::Internal(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregate_failure_joins_reasons() {
        let err = EngineError::AllSourcesFailed {
            reasons: vec!["rule: empty catalogue".to_string(), "llm: timeout".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("rule: empty catalogue"));
        assert!(msg.contains("llm: timeout"));
    }

    #[test]
    fn test_common_invalid_input_maps_to_decode() {
        let err: EngineError =
            cuesense_common::Error::InvalidInput("tempo must be positive".to_string()).into();
        assert!(matches!(err, EngineError::Decode(_)));
    }
}
